//! Reviewboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the reviewboard
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for inserting businesses and reviews, and request payload
//! fixtures.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **fixture**: In-memory JSON payloads, nothing is persisted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_review_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_review_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
