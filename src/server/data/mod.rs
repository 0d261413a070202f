//! Database repository layer.
//!
//! Repository structs handle the database operations (CRUD) for businesses and reviews.
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! service layer independent of the persistence representation. Every call runs on a
//! connection checked out from the pool for that statement only.

pub mod business;
pub mod review;

#[cfg(test)]
mod test;
