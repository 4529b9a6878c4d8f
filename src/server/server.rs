use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};
use crate::dataset::{DatasetError, DatasetProvider};
use crate::view::{resolve, Page, TopN, ViewError};
use anyhow::Result;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub dataset_generated_at: Option<DateTime<Utc>>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Every view failure maps to a status the shell can act on; nothing
/// here takes the process down or leaves the dashboard un-navigable.
fn view_error_response(err: ViewError) -> Response {
    let status = match &err {
        ViewError::UnknownPage(_) => StatusCode::NOT_FOUND,
        ViewError::Dataset(DatasetError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    warn!("View resolution failed: {}", err);
    error_response(status, err)
}

#[derive(Serialize)]
struct PageInfo {
    slug: &'static str,
    label: &'static str,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        dataset_generated_at: state.provider.get().ok().map(|d| d.generated_at),
    };
    Json(stats)
}

/// Sidebar contents: the five navigable pages.
async fn get_pages() -> impl IntoResponse {
    let pages: Vec<PageInfo> = Page::ALL
        .iter()
        .map(|p| PageInfo {
            slug: p.slug(),
            label: p.label(),
        })
        .collect();
    Json(pages)
}

#[derive(Deserialize, Debug)]
struct ViewQuery {
    pub top_n: Option<usize>,
}

async fn get_view(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Response {
    let page = match Page::from_slug(&slug) {
        Ok(page) => page,
        Err(err) => return view_error_response(err),
    };

    let top_n = match query.top_n {
        Some(n) => match TopN::new(n) {
            Ok(top_n) => top_n,
            Err(err) => return view_error_response(err),
        },
        None => state.config.default_top_n,
    };

    let dataset = match state.provider.get() {
        Ok(dataset) => dataset,
        Err(err) => return view_error_response(err.into()),
    };

    match resolve(page, top_n, &dataset) {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => view_error_response(err),
    }
}

#[derive(Serialize)]
struct RefreshResponse {
    dataset_generated_at: DateTime<Utc>,
}

/// Cache-clear trigger: drops the cached dataset and synchronously
/// rebuilds it, correlation sample included.
async fn post_refresh(State(provider): State<GuardedProvider>) -> Response {
    provider.invalidate();
    match provider.get() {
        Ok(dataset) => Json(RefreshResponse {
            dataset_generated_at: dataset.generated_at,
        })
        .into_response(),
        Err(err) => view_error_response(err.into()),
    }
}

pub fn make_app(config: ServerConfig, provider: Arc<DatasetProvider>) -> Router {
    let state = ServerState::new(config, provider);

    let api_routes: Router = Router::new()
        .route("/pages", get(get_pages))
        .route("/view/{slug}", get(get_view))
        .route("/refresh", post(post_refresh))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .route("/health", get(home))
        .with_state(state.clone())
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    provider: Arc<DatasetProvider>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    default_top_n: TopN,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
        default_top_n,
    };
    let app = make_app(config, provider);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetSource};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        make_app(ServerConfig::default(), Arc::new(DatasetProvider::synthetic()))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn lists_the_five_pages() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/pages")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let slugs: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert_eq!(
            slugs,
            vec![
                "overview",
                "top-tracks",
                "revenue",
                "correlations",
                "content-analysis"
            ]
        );
    }

    #[tokio::test]
    async fn resolves_a_view_with_an_explicit_filter() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/view/top-tracks?top_n=5")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["page"], "top_tracks");
        let rows = json["slice"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["name"], "Blinding Lights - The Weeknd");
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/view/settings")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn out_of_range_filter_is_unprocessable() {
        let app = test_app();
        for uri in ["/api/view/top-tracks?top_n=4", "/api/view/top-tracks?top_n=21"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[tokio::test]
    async fn refresh_rebuilds_and_navigation_keeps_working() {
        let app = test_app();

        let refresh = Request::builder()
            .method("POST")
            .uri("/api/refresh")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(refresh).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["dataset_generated_at"].is_string());

        let view = Request::builder()
            .uri("/api/view/correlations")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(view).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    struct FailingSource;

    impl DatasetSource for FailingSource {
        fn build(&self) -> Result<Dataset, DatasetError> {
            Err(DatasetError::Unavailable("backing store offline".to_owned()))
        }
    }

    #[tokio::test]
    async fn unavailable_dataset_maps_to_service_unavailable() {
        let app = make_app(
            ServerConfig::default(),
            Arc::new(DatasetProvider::new(Box::new(FailingSource))),
        );
        let request = Request::builder()
            .uri("/api/view/overview")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("unavailable"));
    }
}
