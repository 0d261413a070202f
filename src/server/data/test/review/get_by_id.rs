use super::*;

/// Tests getting an existing review by id.
///
/// Expected: Ok(Some(Review))
#[tokio::test]
async fn gets_existing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, review) = factory::helpers::create_review_with_business(db).await?;

    let repo = ReviewRepository::new(db);
    let found = repo.get_by_id(review.review_id).await?.unwrap();

    assert_eq!(found.id, review.review_id);
    assert_eq!(found.business_id, business.business_id);
    assert_eq!(found.stars, review.stars);

    Ok(())
}

/// Tests getting a review that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);

    assert!(repo.get_by_id(1).await?.is_none());
    assert!(!repo.exists(1).await?);

    Ok(())
}
