mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::io;

use crate::config::DbConfig;

const BIND_ADDR: &str = "0.0.0.0:8080";

#[actix_web::main]
async fn main() -> io::Result<()> {
    let dotenv_loaded = dotenv().is_ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if !dotenv_loaded {
        info!("No .env file found, proceeding with system environment variables");
    }

    let db_config = DbConfig::from_env().map_err(|err| {
        error!("Invalid database configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // Connect and auto-migrate; any failure here stops the process
    let store = db::connect(&db_config).await.map_err(|err| {
        error!("Failed to initialise the database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;
    let store = web::Data::from(store);

    info!("Starting server at {}", BIND_ADDR);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::employee::configure)
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}
