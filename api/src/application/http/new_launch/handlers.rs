pub mod create_new_launch;
pub mod delete_new_launch;
pub mod get_new_launch;
pub mod get_new_launch_stats;
pub mod get_new_launches;
pub mod get_upcoming_launches;
pub mod search_new_launches;
pub mod update_new_launch;
