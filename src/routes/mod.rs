use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::{error::AppError, state::SharedState};

pub mod analysis;
pub mod assets;
pub mod columns;
pub mod data;
pub mod docs;
pub mod game;
pub mod health;
pub mod players;
pub mod settings;

/// Compose all API route trees, wiring in shared state and documentation routes.
///
/// A handler that panics answers 500 with an `{error}` body instead of dropping the
/// connection.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(data::router())
        .merge(players::router())
        .merge(columns::router())
        .merge(game::router())
        .merge(settings::router())
        .merge(analysis::router());

    catch_panics(api_router.merge(docs::router()).with_state(state))
}

fn catch_panics(router: Router<()>) -> Router<()> {
    router.layer(CatchPanicLayer::custom(panic_response))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unexpected server error");
    error!(panic = message, "request handler panicked");
    AppError::Internal(message.to_string()).into_response()
}
