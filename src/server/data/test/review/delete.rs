use super::*;

/// Tests deleting a review leaves its business in place.
///
/// Expected: Ok with review removed and business kept
#[tokio::test]
async fn deletes_review_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, review) = factory::helpers::create_review_with_business(db).await?;

    let repo = ReviewRepository::new(db);
    repo.delete(review.review_id).await?;

    let stored = entity::prelude::Review::find_by_id(review.review_id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    let business = entity::prelude::Business::find_by_id(business.business_id)
        .one(db)
        .await?;
    assert!(business.is_some());

    Ok(())
}
