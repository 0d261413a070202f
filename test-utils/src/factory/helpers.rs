//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a business with a single review attached.
///
/// Both entities use default values. Use the individual factories to customize.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((business, review))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_business(
    db: &DatabaseConnection,
) -> Result<(entity::business::Model, entity::review::Model), DbErr> {
    let business = crate::factory::business::create_business(db).await?;
    let review = crate::factory::review::create_review(db, business.business_id).await?;

    Ok((business, review))
}
