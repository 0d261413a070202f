//! Business factory for creating test business entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test businesses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::business::BusinessFactory;
///
/// let business = BusinessFactory::new(&db)
///     .owner_id(12)
///     .city("Portland")
///     .build()
///     .await?;
/// ```
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    street_address: String,
    city: String,
    state: String,
    zip_code: i32,
}

impl<'a> BusinessFactory<'a> {
    /// Creates a new BusinessFactory with default values.
    ///
    /// Defaults:
    /// - owner_id: `1`
    /// - name: `"Business {n}"` where n is auto-incremented
    /// - street_address: `"{n} Main St"`
    /// - city: `"Springfield"`
    /// - state: `"OR"`
    /// - zip_code: `97477`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: 1,
            name: format!("Business {}", id),
            street_address: format!("{} Main St", id),
            city: "Springfield".to_string(),
            state: "OR".to_string(),
            zip_code: 97477,
        }
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn street_address(mut self, street_address: impl Into<String>) -> Self {
        self.street_address = street_address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn zip_code(mut self, zip_code: i32) -> Self {
        self.zip_code = zip_code;
        self
    }

    /// Builds and inserts the business entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::business::Model)` - Created business entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        entity::business::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            street_address: ActiveValue::Set(self.street_address),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            zip_code: ActiveValue::Set(self.zip_code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a business with default values.
///
/// Shorthand for `BusinessFactory::new(db).build().await`.
pub async fn create_business(db: &DatabaseConnection) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db).build().await
}

/// Creates a business belonging to a specific owner.
///
/// Shorthand for `BusinessFactory::new(db).owner_id(owner_id).build().await`.
pub async fn create_business_for_owner(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db).owner_id(owner_id).build().await
}
