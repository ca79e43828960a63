mod config;
mod error;
mod prompt;
mod routes;

use std::{process, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use lonchera_client::Client;

use crate::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Failed to initialize logging from log4rs.yml: {}", e);
        process::exit(1);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let client: Arc<dyn Client> = Arc::new(lonchera_client::create(
        config.gemini_url.clone(),
        config.api_key.clone(),
    ));
    let client = web::Data::from(client);

    info!("Listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(client.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
