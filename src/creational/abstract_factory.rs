// Abstract Factory: a factory produces a whole family of related products
// (connection + query) without the client naming any concrete type.

use serde_json::{json, Value};

use crate::transcript::Transcript;

pub trait DatabaseConnection {
    fn connect(&self) -> String;
    fn disconnect(&self) -> String;
}

/// Result of a query: the line the driver logs, and the returned rows.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub log: String,
    pub result: Value,
}

pub trait DatabaseQuery {
    fn execute(&self, query: &str) -> QueryOutcome;
}

pub trait DatabaseFactory {
    fn name(&self) -> &'static str;
    fn create_connection(&self) -> Box<dyn DatabaseConnection>;
    fn create_query(&self) -> Box<dyn DatabaseQuery>;
}

// ============================================================================
// MySQL family
// ============================================================================

pub struct MySqlConnection;

impl DatabaseConnection for MySqlConnection {
    fn connect(&self) -> String {
        "Connecting to MySQL database.".to_string()
    }

    fn disconnect(&self) -> String {
        "Disconnecting from MySQL database.".to_string()
    }
}

pub struct MySqlQuery;

impl DatabaseQuery for MySqlQuery {
    fn execute(&self, query: &str) -> QueryOutcome {
        QueryOutcome {
            log: format!("Executing MySQL query: {query}"),
            result: json!({}),
        }
    }
}

pub struct MySqlFactory;

impl DatabaseFactory for MySqlFactory {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn create_connection(&self) -> Box<dyn DatabaseConnection> {
        Box::new(MySqlConnection)
    }

    fn create_query(&self) -> Box<dyn DatabaseQuery> {
        Box::new(MySqlQuery)
    }
}

// ============================================================================
// MongoDB family
// ============================================================================

pub struct MongoDbConnection;

impl DatabaseConnection for MongoDbConnection {
    fn connect(&self) -> String {
        "Connecting to MongoDB database.".to_string()
    }

    fn disconnect(&self) -> String {
        "Disconnecting from MongoDB database.".to_string()
    }
}

pub struct MongoDbQuery;

impl DatabaseQuery for MongoDbQuery {
    fn execute(&self, query: &str) -> QueryOutcome {
        QueryOutcome {
            log: format!("Executing MongoDB query: {query}"),
            result: json!({}),
        }
    }
}

pub struct MongoDbFactory;

impl DatabaseFactory for MongoDbFactory {
    fn name(&self) -> &'static str {
        "MongoDB"
    }

    fn create_connection(&self) -> Box<dyn DatabaseConnection> {
        Box::new(MongoDbConnection)
    }

    fn create_query(&self) -> Box<dyn DatabaseQuery> {
        Box::new(MongoDbQuery)
    }
}

pub fn client_code(factory: &dyn DatabaseFactory) -> Vec<String> {
    let connection = factory.create_connection();
    let query = factory.create_query();

    let mut lines = vec![connection.connect()];
    let outcome = query.execute("SELECT * FROM users");
    lines.push(outcome.log);
    lines.push(outcome.result.to_string());
    lines.push(connection.disconnect());
    lines
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let factories: [&dyn DatabaseFactory; 2] = [&MySqlFactory, &MongoDbFactory];
    for factory in factories {
        out.push(format!("Client: Using {} factory...", factory.name()));
        out.extend(client_code(factory));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_products_match() {
        let factory = MongoDbFactory;
        assert!(factory.create_connection().connect().contains("MongoDB"));
        let outcome = factory.create_query().execute("db.users.find()");
        assert_eq!(outcome.log, "Executing MongoDB query: db.users.find()");
        assert_eq!(outcome.result, json!({}));
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Client: Using MySQL factory...",
                "Connecting to MySQL database.",
                "Executing MySQL query: SELECT * FROM users",
                "{}",
                "Disconnecting from MySQL database.",
                "Client: Using MongoDB factory...",
                "Connecting to MongoDB database.",
                "Executing MongoDB query: SELECT * FROM users",
                "{}",
                "Disconnecting from MongoDB database.",
            ]
        );
    }
}
