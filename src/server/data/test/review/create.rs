use super::*;

/// Tests creating a review without text.
///
/// Expected: Ok(Review) with `review_text` NULL
#[tokio::test]
async fn creates_review_without_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            user_id: 1,
            business_id: business.business_id,
            stars: 4,
            review_text: None,
        })
        .await?;

    assert!(review.id > 0);
    assert_eq!(review.user_id, 1);
    assert_eq!(review.business_id, business.business_id);
    assert_eq!(review.stars, 4);
    assert!(review.review_text.is_none());

    Ok(())
}

/// Tests creating a review with text.
///
/// Expected: Ok(Review) with the text persisted
#[tokio::test]
async fn creates_review_with_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            user_id: 2,
            business_id: business.business_id,
            stars: 5,
            review_text: Some(Some("Excellent".to_string())),
        })
        .await?;

    let stored = entity::prelude::Review::find_by_id(review.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.review_text.as_deref(), Some("Excellent"));

    Ok(())
}

/// Tests that the foreign key rejects a review for an unknown business.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            user_id: 1,
            business_id: 12345,
            stars: 3,
            review_text: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
