use actix_web::{middleware, web, App, HttpServer};

use homebuzz_backend::config::AppConfig;
use homebuzz_backend::{database, handlers, utils};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is a development convenience; release deployments set real variables.
    let release = std::env::var("RUN_MODE").map(|mode| mode == "release").unwrap_or(false);
    let dotenv_result = if release { None } else { Some(dotenv::dotenv()) };

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Some(Err(e)) = dotenv_result {
        log::warn!("Error loading .env file: {}", e);
    }

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;
    log::info!("running in {} mode", config.mode);
    log::debug!("{:?}", config);
    if config.uses_development_secret() {
        log::warn!("JWT_SECRET is not set, signing tokens with the development key");
    }

    let pool = database::connect(&config.database).await.map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;
    log::info!("Successfully connected to the database");

    let auth = web::Data::new(config.auth.clone());
    let cors_origins = config.cors_origins.clone();
    log::info!("allowed origins: {:?}", cors_origins);

    log::info!("Server is running on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(utils::cors::cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .app_data(handlers::json_config())
            .app_data(web::Data::new(pool.clone()))
            .app_data(auth.clone())
            .configure(handlers::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
