use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{business::BusinessRepository, review::ReviewRepository},
    error::{AppError, Resource, DUPLICATE_REVIEW},
    model::review::{CreateReviewParams, CreatedReview, Review, UpdateReviewParams},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for an existing business
    ///
    /// Fails with `NotFound(Business)` when the business does not exist and with
    /// `Conflict` when the user already reviewed it. The checks and the insert run as
    /// separate statements, so two concurrent creates may both pass the duplicate check.
    pub async fn create(&self, params: CreateReviewParams) -> Result<CreatedReview, AppError> {
        let business_repo = BusinessRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if !business_repo.exists(params.business_id).await? {
            return Err(AppError::NotFound(Resource::Business));
        }

        if review_repo
            .exists_for_user(params.business_id, params.user_id)
            .await?
        {
            return Err(AppError::Conflict(DUPLICATE_REVIEW.to_string()));
        }

        let text_supplied = params.review_text.is_some();
        let review = review_repo.create(params).await?;

        tracing::debug!(
            "Created review {} for business {}",
            review.id,
            review.business_id
        );

        Ok(CreatedReview {
            review,
            text_supplied,
        })
    }

    /// Gets a review by id, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Review))
    }

    /// Fails with `NotFound` unless the review exists
    pub async fn ensure_exists(&self, id: i32) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::Review));
        }

        Ok(())
    }

    /// Updates the stars and optionally the text of a review
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        repo.update(params).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => AppError::NotFound(Resource::Review),
            e => e.into(),
        })
    }

    /// Deletes a review
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::Review));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Gets every review written by a user
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        let reviews = repo.get_by_user(user_id).await?;

        Ok(reviews)
    }
}
