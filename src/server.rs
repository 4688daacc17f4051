use axum::{
    Router,
    extract::State,
    handler::Handler,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{Datelike, Local};
use std::sync::Arc;
use std::time::Instant;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, error, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::ui::{render_landing, render_not_found};

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let images_dir = state.config.server.images_dir();
    let static_dir = state.config.server.static_dir();
    let not_found = not_found_handler.with_state(state.clone());

    Router::new()
        // HTML pages
        .route("/", get(landing_handler))
        .route("/healthz", get(healthz))
        // Static assets; missing files get the same 404 page as unknown routes
        .nest_service("/static", ServeDir::new(static_dir).not_found_service(not_found.clone()))
        .nest_service("/images", ServeDir::new(images_dir).not_found_service(not_found))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<()> {
    info!(
        name: "config.loaded",
        assets_dir = %config.server.assets_dir.display(),
        chat_widget = config.chat_widget.is_active(),
        "Configuration loaded"
    );

    let addr = config.server.bind_address();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Wait for SIGTERM or Ctrl+C.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Turn a render result into a page, logging failures as a 500.
fn into_page(
    page: &'static str,
    rendered: askama::Result<String>,
) -> Result<Html<String>, StatusCode> {
    rendered.map(Html).map_err(|err| {
        error!(name: "page.render_failed", page, error = %err, "Failed to render page");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET / - Landing page.
async fn landing_handler(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let started = Instant::now();
    let year = Local::now().year();

    let html = into_page(
        "landing",
        render_landing(
            &state.config.site,
            &state.config.chat_widget,
            &state.content,
            &mut rand::thread_rng(),
            year,
        ),
    )?;

    debug!(
        name: "page.rendered",
        page = "landing",
        bytes = html.0.len(),
        elapsed = ?started.elapsed(),
        "Page rendered"
    );

    Ok(html)
}

/// GET /healthz - Liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

/// Fallback - HTML 404 page.
async fn not_found_handler(State(state): State<AppState>) -> Response {
    let rendered = render_not_found(
        &state.config.site,
        &state.config.chat_widget,
        &state.content,
    );
    match into_page("not_found", rendered) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(status) => status.into_response(),
    }
}
