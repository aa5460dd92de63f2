pub mod auth;
pub mod config;
pub mod error;
pub mod grant;
pub mod routes;
pub mod session;
