use super::shutdown::shutdown_signal;
use crate::errors::{handle_panic, handlers::not_found};
use axum::{Router, response::Redirect, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates the application router around `apis`.
///
/// - `GET /` redirects to the Swagger UI at `/docs` (operations listed,
///   not expanded); ReDoc and Scalar render the same document at `/redoc`
///   and `/scalar`
/// - `apis` is nested under `/api`; a trailing slash is ignored there, so
///   `/api/items/` reaches the same handler as `/api/items`
/// - unmatched paths, and known paths with an unsupported method, get the
///   404 diagnostic from [`not_found`]
/// - middleware, innermost first: panic recovery, request tracing at INFO,
///   permissive CORS
///
/// `apis` must already have its state applied.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::{Config, SwaggerUi};

    let apis = apis
        .fallback(not_found)
        .method_not_allowed_fallback(not_found);

    let swagger = SwaggerUi::new("/docs")
        .url(OPENAPI_JSON_PATH, T::openapi())
        .config(Config::new([OPENAPI_JSON_PATH]).doc_expansion("list"));

    Router::new()
        .route("/", get(|| async { Redirect::to("/docs") }))
        .merge(swagger)
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest_service("/api", NormalizePath::trim_trailing_slash(apis))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

/// Bind to `server_config` and serve until SIGINT/SIGTERM.
///
/// See [`serve_until`] for the shutdown sequence.
pub async fn serve<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_until(listener, router, shutdown_signal(), cleanup_timeout, cleanup).await
}

/// Serve on `listener` until `shutdown` resolves.
///
/// New connections stop being accepted once `shutdown` resolves; in-flight
/// requests are drained, then `cleanup` (closing pools and the like) runs
/// for at most `cleanup_timeout`.
pub async fn serve_until<S, F>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    cleanup_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()>,
{
    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Server stopped, running cleanup (timeout: {:?})", cleanup_timeout);
    match tokio::time::timeout(cleanup_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, shutting down anyway",
            cleanup_timeout
        ),
    }

    served
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    fn app() -> Router {
        let apis = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route("/boom", get(boom));
        create_router::<TestDoc>(apis)
    }

    async fn get_uri(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_docs() {
        let response = get_uri("/").await;

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/docs");
    }

    #[tokio::test]
    async fn test_docs_are_served() {
        let response = get_uri("/docs/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_uri(OPENAPI_JSON_PATH).await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert_eq!(doc["info"]["title"], "Test API");
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = get_uri("/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_uri("/ping").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_trailing_slash_is_ignored() {
        let response = get_uri("/api/ping/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_uri("/api/missing/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("The route GET /api/missing/ is not implemented")
        );
    }

    #[tokio::test]
    async fn test_unsupported_method_gets_route_diagnostic() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("The route PATCH /api/ping is not implemented")
        );
    }

    #[tokio::test]
    async fn test_panic_renders_internal_error() {
        let response = get_uri("/api/boom").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Internal Server Error"})
        );
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/ping")
                    .header(header::ORIGIN, "https://somewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_serve_until_drains_then_cleans_up() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let cleaned = Arc::new(AtomicBool::new(false));

        let flag = cleaned.clone();
        let server = tokio::spawn(serve_until(
            listener,
            app(),
            async move {
                let _ = stop_rx.await;
            },
            Duration::from_secs(5),
            async move {
                flag.store(true, Ordering::SeqCst);
            },
        ));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /api/ping HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        assert!(raw.starts_with("HTTP/1.1 200"));
        assert!(raw.ends_with("pong"));
        assert!(!cleaned.load(Ordering::SeqCst));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
        assert!(cleaned.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_serve_until_bounds_cleanup() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve_until(
                listener,
                app(),
                async {},
                Duration::from_millis(50),
                std::future::pending::<()>(),
            ),
        )
        .await;

        assert!(result.expect("cleanup timeout not enforced").is_ok());
    }
}
