use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use resume_screen::config::Settings;
use resume_screen::core::{Evaluator, Taxonomy};
use resume_screen::routes::{self, AppState};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // No logging settings yet; report with the defaults
            init_logging("info", "json");
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Resume Screen service...");

    // Build and validate the taxonomy before serving any request
    let taxonomy = match Taxonomy::builtin() {
        Ok(taxonomy) => Arc::new(taxonomy),
        Err(e) => {
            error!("Invalid skill taxonomy: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    info!("Taxonomy loaded with roles: {:?}", taxonomy.list_roles());

    let app_state = AppState {
        evaluator: Evaluator::new(taxonomy),
        max_resume_chars: settings.screening.max_resume_chars,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    let max_resume_chars = settings.screening.max_resume_chars;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config(max_resume_chars))
            .app_data(routes::path_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
