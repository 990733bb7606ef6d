use std::env;

use actix_cors::Cors;
use actix_web::{http, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use crs::{
    config,
    config::validation::ValidatorConfig,
    constants,
    models::customer::validators::CustomerValidator,
};

fn init_telemetry() {
    tracing_log::LogTracer::init().expect("Failed to initialise log bridge");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_telemetry();

    let database_url =
        env::var(constants::ENV_DATABASE_URL).unwrap_or_else(|_| "customer.db".to_string());
    let pool = config::db::init_db_pool(&database_url);
    {
        let mut conn = pool
            .get()
            .expect("Failed to get database connection for migrations");
        config::db::run_migration(&mut conn).expect("Failed to run database migrations");
    }

    // Misconfigured validation rules abort startup, never a request.
    let validator_config = ValidatorConfig::from_env().expect("Invalid validation configuration");
    let validator =
        CustomerValidator::new(validator_config).expect("Invalid validation configuration");

    let app_host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let app_port = env::var("APP_PORT").unwrap_or_else(|_| "8080".to_string());
    let app_url = format!("{}:{}", app_host, app_port);
    info!("Starting customer registration service at {}", app_url);

    let pool_data = web::Data::new(pool);
    let validator_data = web::Data::new(validator);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .send_wildcard()
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_header(http::header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .wrap(TracingLogger::default())
            .app_data(pool_data.clone())
            .app_data(validator_data.clone())
            .configure(config::app::config_services)
    })
    .workers(num_cpus::get())
    .bind(&app_url)?
    .run()
    .await
}
