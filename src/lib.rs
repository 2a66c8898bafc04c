pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;
pub mod store;
