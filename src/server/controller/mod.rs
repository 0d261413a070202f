//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call into the service layer, and
//! convert domain models to DTOs, synthesizing the `self` and related-resource links
//! from the request URL.

pub mod business;
pub mod index;
pub mod review;

#[cfg(test)]
mod test;
