use crate::application::http::{
    authentication::router::AuthenticationApiDoc, new_launch::router::NewLaunchApiDoc,
    project::router::ProjectApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aadhar Homes API"
    ),
    nest(
        (path = "/projects", api = ProjectApiDoc),
        (path = "/newlaunch", api = NewLaunchApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
    )
)]
pub struct ApiDoc;
