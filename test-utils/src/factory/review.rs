//! Review factory for creating test review entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews attached to an existing business.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, business.business_id)
///     .user_id(3)
///     .stars(2)
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    business_id: i32,
    stars: i32,
    review_text: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `1`
    /// - stars: `4`
    /// - review_text: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `business_id` - Business the review belongs to, must already exist
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        Self {
            db,
            user_id: 1,
            business_id,
            stars: 4,
            review_text: None,
        }
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    pub fn review_text(mut self, review_text: impl Into<String>) -> Self {
        self.review_text = Some(review_text.into());
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown business_id)
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            business_id: ActiveValue::Set(self.business_id),
            stars: ActiveValue::Set(self.stars),
            review_text: ActiveValue::Set(self.review_text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given business.
pub async fn create_review(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, business_id).build().await
}

/// Creates a review written by a specific user for the given business.
pub async fn create_review_for_user(
    db: &DatabaseConnection,
    business_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, business_id)
        .user_id(user_id)
        .build()
        .await
}
