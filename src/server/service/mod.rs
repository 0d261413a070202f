//! Service layer.
//!
//! Services hold the rules that sit between controllers and repositories: existence
//! checks before mutations, duplicate detection, and mapping of absent rows to
//! `AppError::NotFound`. Each service borrows the pooled connection for its lifetime.

pub mod business;
pub mod review;
