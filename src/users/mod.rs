use crate::state::AppState;
use axum::{routing::get, Router};

pub mod form;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub(crate) mod views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/inscription",
            get(handlers::register_form).post(handlers::register),
        )
        .route("/connexion", get(handlers::login_form))
}
