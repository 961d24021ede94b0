use crate::state::AppState;
use axum::Router;

pub mod data;
pub mod handlers;
pub mod model;
pub mod normalize;
pub mod repo;

pub fn router() -> Router<AppState> {
    handlers::router()
}
