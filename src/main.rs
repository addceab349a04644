use std::process;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt::{writer::BoxMakeWriter, Layer}, layer::SubscriberExt, EnvFilter, Registry};

use stripe_transaction_api::services::stripe::StripeTransactionService;
use stripe_transaction_api::{app_router, DEFAULT_ROUTE_PREFIX};

#[tokio::main]
async fn main() {

    // optional fields
    let port = dotenv::var("PORT").unwrap_or("3000".to_string()).parse::<u16>().unwrap();
    let route_prefix = dotenv::var("STRIPE_ROUTE_PREFIX").unwrap_or(DEFAULT_ROUTE_PREFIX.to_string());
    let log_file = dotenv::var("LOG_FILE").unwrap_or("app.log".to_string());

    // add tracing layer
    let file_appender = tracing_appender::rolling::never(".", &log_file);
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
    let (stdout_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());

    // use tracer to log into files
    let file_layer = Layer::new().json().with_writer(BoxMakeWriter::new(move || file_writer.clone()));
    let stdout_layer = Layer::new().with_writer(BoxMakeWriter::new(move || stdout_writer.clone()));

    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(file_layer)
        .with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber).expect("Unable to set global subscriber");

    // mandatory field, nothing can be processed without the credential
    let secret_key = match dotenv::var("STRIPE_SECRET_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::error!("STRIPE_SECRET_KEY must be set");
            process::exit(1);
        }
    };

    let service = Arc::new(StripeTransactionService::new(secret_key));

    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => {
            tracing::info!("Listening on port: {}", listener.local_addr().unwrap().port());
            listener
        }
        Err(err) => {
            tracing::error!("Failed to bind to port: {}", err);
            process::exit(1);
        }
    };

    let router = app_router(&route_prefix, service);
    tracing::info!("Routes constructed successfully");

    //start the http service
    let http_service = axum::serve(listener, router);
    if let Err(err) = http_service.await {
        tracing::error!("Failed to start server: {}", err);
        process::exit(1);
    }
}
