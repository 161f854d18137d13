use super::handlers::create_new_launch::{__path_create_new_launch, create_new_launch};
use super::handlers::delete_new_launch::{__path_delete_new_launch, delete_new_launch};
use super::handlers::get_new_launch::{__path_get_new_launch, get_new_launch};
use super::handlers::get_new_launch_stats::{__path_get_new_launch_stats, get_new_launch_stats};
use super::handlers::get_new_launches::{__path_get_new_launches, get_new_launches};
use super::handlers::get_upcoming_launches::{
    __path_get_upcoming_launches, get_upcoming_launches,
};
use super::handlers::search_new_launches::{__path_search_new_launches, search_new_launches};
use super::handlers::update_new_launch::{__path_update_new_launch, update_new_launch};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_new_launches,
    get_new_launch,
    search_new_launches,
    get_upcoming_launches,
    get_new_launch_stats,
    create_new_launch,
    update_new_launch,
    delete_new_launch
))]
pub struct NewLaunchApiDoc;

pub fn new_launch_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/newlaunch", state.args.server.root_path),
            get(get_new_launches),
        )
        .route(
            &format!("{}/newlaunch/search", state.args.server.root_path),
            get(search_new_launches),
        )
        .route(
            &format!("{}/newlaunch/upcoming", state.args.server.root_path),
            get(get_upcoming_launches),
        )
        .route(
            &format!("{}/newlaunch/admin/stats", state.args.server.root_path),
            get(get_new_launch_stats),
        )
        .route(
            &format!("{}/newlaunch/{{id}}", state.args.server.root_path),
            get(get_new_launch),
        )
        .route(
            &format!("{}/newlaunch", state.args.server.root_path),
            post(create_new_launch),
        )
        .route(
            &format!("{}/newlaunch/{{id}}", state.args.server.root_path),
            put(update_new_launch),
        )
        .route(
            &format!("{}/newlaunch/{{id}}", state.args.server.root_path),
            delete(delete_new_launch),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
