mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod validators;
mod views;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::Client;

use crate::config::{AuthorSource, CONFIG};
use crate::repositories::{AuthorRepository, AuthorStore, MemoryAuthorStore};
use crate::services::AuthorTableService;

/// Build the configured author store.
async fn connect_author_store() -> io::Result<Arc<dyn AuthorStore>> {
    match CONFIG.author_source {
        AuthorSource::File => {
            info!("Loading authors from {}", CONFIG.authors_file);
            let store = MemoryAuthorStore::from_json_file(&CONFIG.authors_file)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            Ok(Arc::new(store))
        }
        AuthorSource::MongoDb => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&CONFIG.mongodb_uri)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;
            let db = client.database(&CONFIG.database_name);

            // Test MongoDB connection
            db.run_command(mongodb::bson::doc! { "ping": 1 })
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;
            info!("Connected to MongoDB successfully!");

            let repository = AuthorRepository::new(&db);
            if let Err(e) = repository.create_indexes().await {
                error!("Failed to create indexes: {}", e);
            }
            Ok(Arc::new(repository))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Using {} author source", CONFIG.author_source);
    let store = connect_author_store().await?;

    // Initialize services
    let author_table = web::Data::new(AuthorTableService::new(store));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(author_table.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
