use std::error::Error;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use log::info;

use bodycheck_api::{config::Config, routes};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = Config::from_env()?;
    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
