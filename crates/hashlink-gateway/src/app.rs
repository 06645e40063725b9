use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, fallback_handler, method_not_allowed_handler, post_not_root_handler,
    redirect_handler, usage_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let body_limit = DefaultBodyLimit::max(state.max_body_bytes());

        Router::new()
            .route(
                "/",
                get(usage_handler)
                    .head(method_not_allowed_handler)
                    .post(create_url_handler)
                    .fallback(method_not_allowed_handler),
            )
            .route(
                "/{short_id}",
                get(redirect_handler)
                    .head(method_not_allowed_handler)
                    .post(post_not_root_handler)
                    .fallback(method_not_allowed_handler),
            )
            .fallback(fallback_handler)
            .layer(body_limit)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
