use super::*;

/// Tests listing reviews written by a user across businesses.
///
/// Expected: Ok with that user's reviews in id order
#[tokio::test]
async fn returns_reviews_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first_business = factory::create_business(db).await?;
    let second_business = factory::create_business(db).await?;

    let first = factory::create_review_for_user(db, first_business.business_id, 6).await?;
    factory::create_review_for_user(db, first_business.business_id, 7).await?;
    let second = factory::create_review_for_user(db, second_business.business_id, 6).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_user(6).await?;

    assert_eq!(
        reviews.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![first.review_id, second.review_id]
    );
    assert_eq!(reviews[1].business_id, second_business.business_id);

    Ok(())
}

/// Tests listing reviews for a user who has written none.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_user_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_review_with_business(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.get_by_user(99).await?.is_empty());

    Ok(())
}
