use super::*;
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

/// Tests deleting a business by id.
///
/// Expected: Ok with the business removed
#[tokio::test]
async fn deletes_business_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    repo.delete(business.business_id).await?;

    let stored = entity::prelude::Business::find_by_id(business.business_id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a business cascades to its reviews.
///
/// Verifies that reviews of the deleted business are removed while reviews of other
/// businesses survive.
///
/// Expected: Ok with only the other business's review remaining
#[tokio::test]
async fn deletes_business_cascades_to_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, review) = factory::helpers::create_review_with_business(db).await?;
    factory::create_review_for_user(db, business.business_id, 2).await?;
    let (_, other_review) = factory::helpers::create_review_with_business(db).await?;

    let repo = BusinessRepository::new(db);
    repo.delete(business.business_id).await?;

    let remaining = entity::prelude::Review::find()
        .filter(entity::review::Column::BusinessId.eq(business.business_id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let deleted = entity::prelude::Review::find_by_id(review.review_id)
        .one(db)
        .await?;
    assert!(deleted.is_none());

    let survivor = entity::prelude::Review::find_by_id(other_review.review_id)
        .one(db)
        .await?;
    assert!(survivor.is_some());

    Ok(())
}
