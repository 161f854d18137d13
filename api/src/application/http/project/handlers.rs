pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod get_project_stats;
pub mod get_projects;
pub mod search_projects;
pub mod update_project;
