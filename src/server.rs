//! HTTP server: Leptos SSR routes, the hydration bundle under `/pkg`, static
//! assets and response compression on one axum router.

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, shell};
use crate::core::config::Config;
use crate::core::error::ServerError;

/// Liveness probe for load balancers and container orchestrators.
pub fn health_router() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Full application router.
pub fn app_router(config: &Config, leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let mut pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root));
    if config.precompressed_assets {
        // Serve .br (brotli) and .gz (gzip) siblings when they exist
        pkg_service = pkg_service.precompressed_br().precompressed_gzip();
    }

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new().merge(health_router()).merge(leptos_router);

    if config.compression {
        app.layer(
            CompressionLayer::new()
                .br(true) // Brotli - best compression ratio
                .gzip(true) // Gzip - wide support fallback
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    }
}

/// Bind the configured address and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = app_router(&config, leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(
        compression = config.compression,
        precompressed_assets = config.precompressed_assets,
        "listening on http://{}",
        addr
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_healthz_returns_ok() {
        let response = health_router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_health_path_is_not_found() {
        let response = health_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn test_router() -> Router {
        let site_root = std::env::temp_dir().to_string_lossy().into_owned();
        let options = LeptosOptions::builder()
            .output_name("pixelforge")
            .site_root(site_root)
            .build();
        app_router(&Config::default(), options)
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_root_renders_landing_page() {
        let (status, body) = get_page("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Get Started Free"));
        assert!(body.contains("application/ld+json"));
    }

    #[tokio::test]
    async fn test_unknown_path_renders_not_found_page() {
        let (status, body) = get_page("/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }
}
