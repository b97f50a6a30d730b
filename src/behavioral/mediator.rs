// Mediator: users never talk to each other directly; the chat room stamps
// and records every message.

use std::cell::RefCell;

use chrono::{Local, NaiveTime};

use crate::transcript::Transcript;

pub trait ChatRoomMediator {
    fn show_message(&self, user: &User<'_>, message: &str) -> String;
}

type Clock = Box<dyn Fn() -> NaiveTime>;

pub struct ChatRoom {
    clock: Clock,
    log: RefCell<Vec<String>>,
}

impl ChatRoom {
    /// Chat room stamping messages with the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(|| Local::now().time())
    }

    pub fn with_clock(clock: impl Fn() -> NaiveTime + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRoomMediator for ChatRoom {
    fn show_message(&self, user: &User<'_>, message: &str) -> String {
        let time = (self.clock)().format("%H:%M:%S");
        let line = format!("[{time}] {}: {message}", user.name());
        self.log.borrow_mut().push(line.clone());
        line
    }
}

pub struct User<'a> {
    name: String,
    chat_room: &'a dyn ChatRoomMediator,
}

impl<'a> User<'a> {
    pub fn new(name: impl Into<String>, chat_room: &'a dyn ChatRoomMediator) -> Self {
        Self {
            name: name.into(),
            chat_room,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send_message(&self, message: &str) -> String {
        self.chat_room.show_message(self, message)
    }
}

pub fn demo() -> Transcript {
    let room = ChatRoom::new();
    let alice = User::new("Alice", &room);
    let bob = User::new("Bob", &room);

    let mut out = Transcript::new();
    out.push(alice.send_message("Hi Bob!"));
    out.push(bob.send_message("Hello Alice!"));
    out
}
