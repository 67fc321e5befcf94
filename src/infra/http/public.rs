use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::any,
};
use metrics::counter;
use tracing::error;

use crate::{
    application::{content::ContentSource, error::AppError, render::RenderPipeline},
    infra::assets::StaticAssets,
};

use super::middleware::{log_requests, set_request_context};

const METRIC_PAGE_REQUESTS_TOTAL: &str = "folio_page_requests_total";

/// Paths that render the page for any method; everything else is looked up as a static asset.
pub const PAGE_PATHS: [&str; 3] = ["/", "/index", "/index.html"];

#[derive(Clone)]
pub struct HttpState {
    pub content: Arc<dyn ContentSource>,
    pub renderer: Arc<RenderPipeline>,
    pub assets: StaticAssets,
}

pub fn build_router(state: HttpState) -> Router {
    let mut router: Router<HttpState> = Router::new();
    for path in PAGE_PATHS {
        router = router.route(path, any(page));
    }

    router
        .fallback(static_asset)
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn(set_request_context))
}

/// Reload, render and execute the page for a single request.
///
/// Every failure is scoped to this request: the listener keeps serving.
async fn page(State(state): State<HttpState>) -> Response {
    match render_page(&state).await {
        Ok(html) => {
            counter!(METRIC_PAGE_REQUESTS_TOTAL, "outcome" => "ok").increment(1);
            Html(html).into_response()
        }
        Err(err) => {
            counter!(METRIC_PAGE_REQUESTS_TOTAL, "outcome" => "error").increment(1);
            err.into_response()
        }
    }
}

async fn render_page(state: &HttpState) -> Result<String, AppError> {
    let content = state.content.load().await?;
    let page = state.renderer.render_content(&content)?;
    page.execute().map_err(|err| {
        error!(
            target = "folio::http::page",
            error = %err,
            "error writing template"
        );
        AppError::from(err)
    })
}

async fn static_asset(State(state): State<HttpState>, request: Request) -> Response {
    state.assets.serve(request).await
}
