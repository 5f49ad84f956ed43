//! HTTP boundary: router, endpoint handlers, error mapping, server
//! lifecycle. The single-page UI consumes this layer; everything here
//! is transport glue over `service`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::clinic_api_router;
