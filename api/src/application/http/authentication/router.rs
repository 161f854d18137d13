use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::login::{__path_login, login};
use super::handlers::logout::{__path_logout, logout};
use super::handlers::register::{__path_register, register};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register, login, get_me, logout))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/auth/register", state.args.server.root_path),
            post(register),
        )
        .route(
            &format!("{}/auth/login", state.args.server.root_path),
            post(login),
        )
        .route(
            &format!("{}/auth/me", state.args.server.root_path),
            get(get_me),
        )
        .route(
            &format!("{}/auth/logout", state.args.server.root_path),
            post(logout),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
