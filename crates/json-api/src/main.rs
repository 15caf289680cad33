//! Storefront JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::{Any, Cors},
    http::Method,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    serve_static::StaticDir,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use storefront_app::{context::AppContext, janitor::CartJanitor};

use crate::{
    config::ServerConfig,
    observability::{Observability, metrics_handler, request_logging},
    state::State,
};

mod carts;
mod checkout;
mod config;
mod contact;
mod extensions;
mod healthcheck;
mod messages;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

fn cors(allowed_origin: &str) -> Cors {
    let cors = if allowed_origin == "*" {
        Cors::new().allow_origin(Any)
    } else {
        Cors::new().allow_origin(allowed_origin)
    };

    cors.allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Storefront JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = match Observability::init(&config) {
        Ok(observability) => observability,
        Err(init_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "subscriber failed to install, stderr is the only sink left"
            )]
            {
                eprintln!("Observability error: {init_error}");
            }

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_settings(config.app_settings()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let janitor = CartJanitor::new(app.carts.clone(), config.janitor.janitor_config()).spawn();

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("api").push(router::app_router()));

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("product-images/{**path}")
                .get(StaticDir::new([config.web.product_images_dir.clone()])),
        )
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).hoop(cors(&config.web.cors_allowed_origin).into_handler());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;

    janitor.shutdown().await;

    observability.shutdown();
}
