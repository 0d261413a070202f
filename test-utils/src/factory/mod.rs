//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key dependencies so tests only
//! spell out the fields they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let business = factory::business::create_business(&db).await?;
//!
//!     // Create with all dependencies
//!     let (business, review) = factory::helpers::create_review_with_business(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let business = factory::business::BusinessFactory::new(&db)
//!     .owner_id(7)
//!     .name("Corner Cafe")
//!     .build()
//!     .await?;
//!
//! let review = factory::review::ReviewFactory::new(&db, business.business_id)
//!     .user_id(3)
//!     .stars(5)
//!     .review_text("Great coffee")
//!     .build()
//!     .await?;
//! ```

pub mod business;
pub mod helpers;
pub mod review;

pub use business::{create_business, create_business_for_owner};
pub use review::{create_review, create_review_for_user};
