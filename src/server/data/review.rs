use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review, UpdateReviewParams};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review and returns it with its assigned id
    ///
    /// `review_text` is written only when supplied; otherwise the column keeps its default.
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            business_id: ActiveValue::Set(params.business_id),
            stars: ActiveValue::Set(params.stars),
            review_text: match params.review_text {
                Some(text) => ActiveValue::Set(text),
                None => ActiveValue::NotSet,
            },
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let review = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(review.map(Review::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::ReviewId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the user already reviewed the business
    pub async fn exists_for_user(&self, business_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::BusinessId.eq(business_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the stars and, when supplied, the text of an existing review
    pub async fn update(&self, params: UpdateReviewParams) -> Result<Review, DbErr> {
        let review = entity::prelude::Review::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Review with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::review::ActiveModel = review.into();
        active_model.stars = ActiveValue::Set(params.stars);
        if let Some(text) = params.review_text {
            active_model.review_text = ActiveValue::Set(text);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Review::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Review>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .order_by_asc(entity::review::Column::ReviewId)
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }
}
