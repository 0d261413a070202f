use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::business::BusinessRepository,
    error::{AppError, Resource},
    model::business::{Business, BusinessParams, UpdateBusinessParams},
    util::pagination::PaginationParams,
};

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new business
    pub async fn create(&self, params: BusinessParams) -> Result<Business, AppError> {
        let repo = BusinessRepository::new(self.db);

        let business = repo.create(params).await?;

        tracing::debug!("Created business {}", business.id);

        Ok(business)
    }

    /// Gets a business by id, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Business, AppError> {
        let repo = BusinessRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Business))
    }

    /// Gets one window of businesses ordered by id
    pub async fn get_paginated(
        &self,
        pagination: PaginationParams,
    ) -> Result<Vec<Business>, AppError> {
        let repo = BusinessRepository::new(self.db);

        let businesses = repo
            .get_paginated(pagination.offset, pagination.limit)
            .await?;

        Ok(businesses)
    }

    /// Fails with `NotFound` unless the business exists
    pub async fn ensure_exists(&self, id: i32) -> Result<(), AppError> {
        let repo = BusinessRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::Business));
        }

        Ok(())
    }

    /// Replaces every attribute of a business
    pub async fn update(&self, params: UpdateBusinessParams) -> Result<Business, AppError> {
        let repo = BusinessRepository::new(self.db);

        repo.update(params).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) => AppError::NotFound(Resource::Business),
            e => e.into(),
        })
    }

    /// Deletes a business together with its reviews
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BusinessRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(Resource::Business));
        }

        repo.delete(id).await?;

        tracing::debug!("Deleted business {}", id);

        Ok(())
    }

    /// Gets every business belonging to an owner
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Business>, AppError> {
        let repo = BusinessRepository::new(self.db);

        let businesses = repo.get_by_owner(owner_id).await?;

        Ok(businesses)
    }
}
