//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod business;
pub mod review;
