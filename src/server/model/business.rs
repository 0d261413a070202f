//! Business domain models and parameters.

use crate::{
    model::business::{BusinessDto, BusinessEntryDto, BusinessPayloadDto},
    server::error::AppError,
};

/// A business as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
}

impl Business {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::business::Model) -> Self {
        Self {
            id: entity.business_id,
            owner_id: entity.owner_id,
            name: entity.name,
            street_address: entity.street_address,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
        }
    }

    /// Converts to the single-resource DTO with the given `self` link.
    pub fn into_dto(self, self_link: String) -> BusinessDto {
        BusinessDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            street_address: self.street_address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            self_link,
        }
    }

    /// Converts to the listing DTO with the given `self` link.
    pub fn into_entry_dto(self, self_link: String) -> BusinessEntryDto {
        BusinessEntryDto {
            business_id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            street_address: self.street_address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            self_link,
        }
    }
}

/// Complete set of business attributes, used for both create and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessParams {
    pub owner_id: i32,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
}

impl BusinessParams {
    /// Validates that every attribute is present in the payload.
    ///
    /// # Returns
    /// - `Ok(BusinessParams)` - All six attributes present
    /// - `Err(AppError::Validation)` - At least one attribute missing
    pub fn from_dto(dto: BusinessPayloadDto) -> Result<Self, AppError> {
        match dto {
            BusinessPayloadDto {
                owner_id: Some(owner_id),
                name: Some(name),
                street_address: Some(street_address),
                city: Some(city),
                state: Some(state),
                zip_code: Some(zip_code),
            } => Ok(Self {
                owner_id,
                name,
                street_address,
                city,
                state,
                zip_code,
            }),
            _ => Err(AppError::Validation),
        }
    }
}

/// Parameters for replacing a business wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBusinessParams {
    pub id: i32,
    pub attributes: BusinessParams,
}
