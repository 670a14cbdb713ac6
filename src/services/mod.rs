pub mod api;
pub mod resolver;
