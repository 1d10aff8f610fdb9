pub mod dtos;
pub mod openapi;
pub mod query;
pub mod routes;
