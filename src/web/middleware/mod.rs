//! Middleware for the Noticeboard web API.

pub mod cors;

pub use cors::create_cors_layer;
