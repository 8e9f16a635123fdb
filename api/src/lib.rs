pub mod handler;
pub mod model;
pub mod openapi;
pub mod route;
