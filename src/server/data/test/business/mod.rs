use crate::server::{
    data::business::BusinessRepository,
    model::business::{BusinessParams, UpdateBusinessParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod exists;
mod get_by_id;
mod get_by_owner;
mod update;

fn params(owner_id: i32, name: &str) -> BusinessParams {
    BusinessParams {
        owner_id,
        name: name.to_string(),
        street_address: "1 Main".to_string(),
        city: "X".to_string(),
        state: "CA".to_string(),
        zip_code: 90001,
    }
}
