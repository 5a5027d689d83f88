//! HTTP front end.
//!
//! Three routes: the credential form, the scan endpoint, and an advisory
//! progress endpoint. Every scan request builds its own orchestrator and
//! probe registry; the watch channel feeding `/progress` is the only state
//! shared across requests and carries nothing but the latest step counter.

use crate::app::config::{AppConfig, DeliveryMode};
use crate::app::report::{html, pdf, REPORT_FILENAME};
use crate::app::scanner::sweep::SweepSettings;
use crate::app::scanner::{default_registry, ScanCredentials, ScanOrchestrator, ScanProgress};
use anyhow::Context;
use axum::extract::{Form, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    progress: Arc<watch::Sender<ScanProgress>>,
}

/// Form fields accepted by `POST /scan`.
#[derive(Debug, Deserialize)]
pub struct ScanForm {
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

/// Build the application router.
pub fn router(config: AppConfig) -> Router {
    let (progress_tx, _) = watch::channel(ScanProgress::default());
    let state = AppState {
        config: Arc::new(config),
        progress: Arc::new(progress_tx),
    };
    Router::new()
        .route("/", get(index))
        .route("/scan", post(scan))
        .route("/progress", get(progress))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(config)).await?;
    Ok(())
}

async fn index() -> Response {
    match html::index_page() {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            error!("form page rendering failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn scan(State(state): State<AppState>, Form(form): Form<ScanForm>) -> Response {
    let credentials = ScanCredentials::new(form.access_key, form.secret_key, form.session_token);
    let settings = SweepSettings {
        regions: state.config.regions.clone(),
        retry: state.config.retry.clone(),
        failure_policy: state.config.scan.failure_policy,
    };
    let mut orchestrator = ScanOrchestrator::new(settings, default_registry());

    let progress = state.progress.clone();
    let report = match orchestrator
        .run(&credentials, move |snapshot| {
            progress.send_replace(snapshot);
        })
        .await
    {
        Ok(report) => report,
        Err(validation) => {
            return message_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Scan request rejected",
                &[validation.to_string()],
            );
        }
    };

    let failure_notes: Vec<String> = report
        .failures
        .iter()
        .map(|failure| failure.to_string())
        .collect();

    if report.rows.is_empty() {
        let mut notes = vec!["No resources found across the configured regions.".to_string()];
        notes.extend(failure_notes);
        return message_response(StatusCode::OK, "Scan complete", &notes);
    }

    let bytes = match pdf::render_pdf(&report.rows, &report.failures) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("report rendering failed: {err}");
            return message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Report generation failed",
                &[err.to_string()],
            );
        }
    };

    // File delivery persists the same bytes before they are streamed back;
    // the response itself is identical in both modes.
    if state.config.delivery.mode == DeliveryMode::File {
        let path = &state.config.delivery.path;
        if let Err(err) = tokio::fs::write(path, &bytes).await {
            error!(path = %path.display(), "failed to persist report: {err}");
            return message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Report generation failed",
                &[format!("failed to persist report: {err}")],
            );
        }
        info!(path = %path.display(), "report persisted");
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

async fn progress(State(state): State<AppState>) -> Json<serde_json::Value> {
    let snapshot = *state.progress.borrow();
    Json(serde_json::json!({
        "completed": snapshot.completed,
        "total": snapshot.total,
        "percent": snapshot.percent(),
    }))
}

fn message_response(status: StatusCode, title: &str, notes: &[String]) -> Response {
    match html::message_page(title, notes) {
        Ok(page) => (status, Html(page)).into_response(),
        Err(err) => {
            error!("message page rendering failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, title.to_string()).into_response()
        }
    }
}
