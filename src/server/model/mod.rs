//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are produced by
//! validating request DTOs, so the service layer only ever sees complete input.

pub mod business;
pub mod review;
