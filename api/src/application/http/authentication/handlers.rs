pub mod get_me;
pub mod login;
pub mod logout;
pub mod register;
