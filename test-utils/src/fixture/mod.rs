//! Test fixtures providing request payloads without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They return the JSON
//! bodies that clients send to the API, for use in HTTP-level tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let body = fixture::business::payload();
//! let partial = fixture::business::payload_without("zip_code");
//! ```

pub mod business;
pub mod review;
