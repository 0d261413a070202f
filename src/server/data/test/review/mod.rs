use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParams, UpdateReviewParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_for_user;
mod get_by_id;
mod get_by_user;
mod update;
