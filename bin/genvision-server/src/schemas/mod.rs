//! Request / response DTO (Data Transfer Object) types for the `/api` routes.
//!
//! Field names match the JSON wire format the web client expects. Types are
//! annotated with [`utoipa`] attributes to generate the OpenAPI document.

pub mod generate;
pub mod history;
pub mod like;
pub mod models;
