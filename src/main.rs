mod catalog;
mod config;
mod error;
mod logger;
mod services;

use {
    crate::{catalog::CatalogState, config::Config, logger::TracingLogger},
    actix_web::{web, App, HttpServer},
    tracing_log::LogTracer,
    tracing_subscriber::{fmt::Layer, layer::SubscriberExt as _, EnvFilter, Registry},
};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(
        Registry::default().with(filter).with(Layer::default()),
    )?;

    let config = Config::from_env()?;

    let state = web::Data::new(CatalogState::load(&config.data_path));

    tracing::info!(bind = %config.bind, "Starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(services::configure)
            .wrap(TracingLogger)
    })
    .bind(config.bind)?
    .run()
    .await?;

    Ok(())
}
