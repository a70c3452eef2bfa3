/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod gateway;
pub mod locations;
pub mod operators;
pub mod stores;

pub use error::{
    GENERIC_ERROR_MESSAGE, NormalizedError, Result, StocktakeError, TIMEOUT_MESSAGE,
};

pub use client::{ClientConfig, StocktakeClient};
