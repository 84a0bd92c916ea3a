pub mod auth_url;
pub mod callback;
pub mod login;
