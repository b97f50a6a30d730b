// Chain of Responsibility: a message walks a chain of loggers. Each link
// writes the message if it handles that level, then always passes it on.

use std::fmt;

use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

pub trait Logger {
    /// The level this link writes.
    fn level(&self) -> LogLevel;

    fn next(&self) -> Option<&dyn Logger>;

    fn set_next(&mut self, next: Box<dyn Logger>);

    fn log(&self, message: &str, level: LogLevel) -> Vec<String> {
        let mut lines = Vec::new();
        if level == self.level() {
            lines.push(format!("{level}: {message}"));
        }
        if let Some(next) = self.next() {
            lines.extend(next.log(message, level));
        }
        lines
    }
}

macro_rules! level_logger {
    ($name:ident, $level:expr) => {
        #[derive(Default)]
        pub struct $name {
            next: Option<Box<dyn Logger>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Builder-style `set_next`.
            pub fn with_next(mut self, next: impl Logger + 'static) -> Self {
                self.set_next(Box::new(next));
                self
            }
        }

        impl Logger for $name {
            fn level(&self) -> LogLevel {
                $level
            }

            fn next(&self) -> Option<&dyn Logger> {
                self.next.as_deref()
            }

            fn set_next(&mut self, next: Box<dyn Logger>) {
                self.next = Some(next);
            }
        }
    };
}

level_logger!(InfoLogger, LogLevel::Info);
level_logger!(DebugLogger, LogLevel::Debug);
level_logger!(ErrorLogger, LogLevel::Error);

pub fn demo() -> Transcript {
    let chain = InfoLogger::new().with_next(DebugLogger::new().with_next(ErrorLogger::new()));

    let messages = [
        ("This is an informational message.", LogLevel::Info),
        ("This is a debug message.", LogLevel::Debug),
        ("This is an error message.", LogLevel::Error),
        ("This is a debug message.", LogLevel::Debug),
    ];
    let mut out = Transcript::new();
    for (message, level) in messages {
        out.extend(chain.log(message, level));
    }
    out
}
