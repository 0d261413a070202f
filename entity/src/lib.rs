//! SeaORM entities for the reviewboard schema.

pub mod prelude;

pub mod business;
pub mod review;
