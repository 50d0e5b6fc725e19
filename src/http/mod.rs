/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod currencies;
pub mod emails;
pub mod error;
pub mod invoices;
pub mod status;

pub use error::{LockstepError, Result};

pub use client::{ClientConfig, LockstepClient, LockstepEnv};
