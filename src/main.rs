use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use bytefinder::config::{LoggingSettings, Settings};
use bytefinder::models::format_results;
use bytefinder::routes::{self, AppState};
use bytefinder::{CatalogLoader, SearchCriteria, SearchEngine};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting ByteFinder restaurant search service...");

    // Load the catalog; the engine is never built from a partial load
    let loader = CatalogLoader::new(&settings.data.restaurants_path, &settings.data.cuisines_path);
    let catalog = loader.load().await.map_err(|e| {
        error!("Failed to load restaurant catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let engine = SearchEngine::new(catalog.into_restaurants());

    info!("Search engine initialized with {} restaurants", engine.len());

    match engine.search(&SearchCriteria::default()) {
        Ok(best) => tracing::debug!("Best matched restaurants:\n{}", format_results(&best)),
        Err(e) => error!("Default search failed: {}", e),
    }

    // Build application state
    let app_state = AppState { engine };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .configure(routes::configure_app(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
