pub mod config;
pub mod form;
pub mod render;
pub mod routes;
