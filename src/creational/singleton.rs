// Singleton: one lazily created, process-wide Database handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::transcript::Transcript;

static INSTANCE: OnceLock<Database> = OnceLock::new();

#[derive(Debug)]
pub struct Database {
    connection: DateTime<Utc>,
    closed: AtomicBool,
}

impl Database {
    // Only reachable through `instance`.
    fn create() -> Self {
        tracing::debug!("Database connection created.");
        Self {
            connection: Utc::now(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn instance() -> &'static Database {
        INSTANCE.get_or_init(Database::create)
    }

    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// Moment the shared connection was opened.
    pub fn connection(&self) -> &DateTime<Utc> {
        &self.connection
    }

    pub fn close_connection(&self) -> String {
        self.closed.store(true, Ordering::SeqCst);
        "Database connection closed.".to_string()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    if !Database::is_initialized() {
        out.push("Database connection created.");
    }
    let db1 = Database::instance();
    let db2 = Database::instance();
    out.push(format!(
        "Are both database instances the same? {}",
        std::ptr::eq(db1, db2)
    ));

    let connection1 = db1.connection();
    let connection2 = db2.connection();
    out.push(format!(
        "Are both database connections are same? {}",
        std::ptr::eq(connection1, connection2) && connection1 == connection2
    ));

    out.push(db1.close_connection());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let a = Database::instance();
        let b = Database::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.connection(), b.connection());
    }

    #[test]
    fn test_same_instance_across_threads() {
        let addr = Database::instance() as *const Database as usize;
        let other = thread::spawn(|| Database::instance() as *const Database as usize)
            .join()
            .unwrap();
        assert_eq!(addr, other);
    }

    #[test]
    fn test_demo_output() {
        let out = demo();
        let lines = out.lines();
        // The creation line only appears if no other test created the instance first.
        let tail = &lines[lines.len() - 3..];
        assert_eq!(
            tail,
            [
                "Are both database instances the same? true",
                "Are both database connections are same? true",
                "Database connection closed.",
            ]
        );
        assert!(Database::instance().is_closed());
    }
}
