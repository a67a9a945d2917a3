use std::env;
use std::fmt;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

/// Where author records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorSource {
    MongoDb,
    File,
}

impl AuthorSource {
    /// Parse the source name, falling back to MongoDB for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => AuthorSource::File,
            _ => AuthorSource::MongoDb,
        }
    }
}

impl fmt::Display for AuthorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorSource::MongoDb => write!(f, "mongodb"),
            AuthorSource::File => write!(f, "file"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub author_source: AuthorSource,
    pub mongodb_uri: String,
    pub database_name: String,
    pub authors_file: String,
    pub page_title: String,
    /// Page body; shortcodes in it are expanded on every render.
    pub page_content: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            author_source: AuthorSource::from_str(
                &env::var("AUTHOR_SOURCE").unwrap_or_else(|_| "mongodb".to_string()),
            ),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "wordpress".to_string()),
            authors_file: env::var("AUTHORS_FILE")
                .unwrap_or_else(|_| "./authors.json".to_string()),
            page_title: env::var("PAGE_TITLE").unwrap_or_else(|_| "Authors".to_string()),
            page_content: env::var("PAGE_CONTENT")
                .unwrap_or_else(|_| "[author_info_table]".to_string()),
        }
    }
}
