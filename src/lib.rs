pub mod component;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;
