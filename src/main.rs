mod config;
mod db;
mod errors;
mod handlers;
mod models;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;

use crate::config::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // Initialize the database pool
    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    let (host, port) = config.bind_address();
    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(pool.clone()))
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
