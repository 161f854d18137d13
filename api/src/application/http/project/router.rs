use super::handlers::create_project::{__path_create_project, create_project};
use super::handlers::delete_project::{__path_delete_project, delete_project};
use super::handlers::get_project::{__path_get_project, get_project};
use super::handlers::get_project_stats::{__path_get_project_stats, get_project_stats};
use super::handlers::get_projects::{__path_get_projects, get_projects};
use super::handlers::search_projects::{__path_search_projects, search_projects};
use super::handlers::update_project::{__path_update_project, update_project};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_projects,
    get_project,
    search_projects,
    get_project_stats,
    create_project,
    update_project,
    delete_project
))]
pub struct ProjectApiDoc;

pub fn project_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/projects", state.args.server.root_path),
            get(get_projects),
        )
        .route(
            &format!("{}/projects/search", state.args.server.root_path),
            get(search_projects),
        )
        .route(
            &format!("{}/projects/admin/stats", state.args.server.root_path),
            get(get_project_stats),
        )
        .route(
            &format!("{}/projects/{{id}}", state.args.server.root_path),
            get(get_project),
        )
        .route(
            &format!("{}/projects", state.args.server.root_path),
            post(create_project),
        )
        .route(
            &format!("{}/projects/{{id}}", state.args.server.root_path),
            put(update_project),
        )
        .route(
            &format!("{}/projects/{{id}}", state.args.server.root_path),
            delete(delete_project),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
