use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::business::{Business, BusinessParams, UpdateBusinessParams};

pub struct BusinessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a business and returns it with its assigned id
    pub async fn create(&self, params: BusinessParams) -> Result<Business, DbErr> {
        let business = entity::business::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            street_address: ActiveValue::Set(params.street_address),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            zip_code: ActiveValue::Set(params.zip_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Business::from_entity(business))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Business>, DbErr> {
        let business = entity::prelude::Business::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(business.map(Business::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Business::find()
            .filter(entity::business::Column::BusinessId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one window of businesses ordered by id
    pub async fn get_paginated(&self, offset: u64, limit: u64) -> Result<Vec<Business>, DbErr> {
        let businesses = entity::prelude::Business::find()
            .order_by_asc(entity::business::Column::BusinessId)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(businesses.into_iter().map(Business::from_entity).collect())
    }

    /// Overwrites every attribute of an existing business
    pub async fn update(&self, params: UpdateBusinessParams) -> Result<Business, DbErr> {
        let business = entity::prelude::Business::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Business with id {} not found",
                params.id
            )))?;

        let attributes = params.attributes;
        let mut active_model: entity::business::ActiveModel = business.into();
        active_model.owner_id = ActiveValue::Set(attributes.owner_id);
        active_model.name = ActiveValue::Set(attributes.name);
        active_model.street_address = ActiveValue::Set(attributes.street_address);
        active_model.city = ActiveValue::Set(attributes.city);
        active_model.state = ActiveValue::Set(attributes.state);
        active_model.zip_code = ActiveValue::Set(attributes.zip_code);

        let updated = active_model.update(self.db).await?;

        Ok(Business::from_entity(updated))
    }

    /// Deletes a business; its reviews are removed by the foreign key cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Business::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Business>, DbErr> {
        let businesses = entity::prelude::Business::find()
            .filter(entity::business::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::business::Column::BusinessId)
            .all(self.db)
            .await?;

        Ok(businesses.into_iter().map(Business::from_entity).collect())
    }
}
