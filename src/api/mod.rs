//! HTTP API module for the salary engine.
//!
//! This module exposes the calculator over HTTP so that a display layer can
//! request a fresh breakdown on every input change. The router is returned
//! without a server; the embedding binary owns the listener and the tracing
//! subscriber.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, CalculationWarning, RatesResponse,
};
pub use state::AppState;
