use super::*;
use test_utils::factory::review::ReviewFactory;

/// Tests updating only the stars of a review.
///
/// Expected: Ok(Review) with new stars and untouched text
#[tokio::test]
async fn updates_stars_and_keeps_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let review = ReviewFactory::new(db, business.business_id)
        .stars(2)
        .review_text("Slow service")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(UpdateReviewParams {
            id: review.review_id,
            stars: 5,
            review_text: None,
        })
        .await?;

    assert_eq!(updated.stars, 5);
    assert_eq!(updated.review_text.as_deref(), Some("Slow service"));
    assert_eq!(updated.business_id, business.business_id);

    Ok(())
}

/// Tests replacing and clearing the review text.
///
/// Expected: Ok with the text replaced, then NULL
#[tokio::test]
async fn replaces_and_clears_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, review) = factory::helpers::create_review_with_business(db).await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(UpdateReviewParams {
            id: review.review_id,
            stars: 3,
            review_text: Some(Some("Better now".to_string())),
        })
        .await?;
    assert_eq!(updated.review_text.as_deref(), Some("Better now"));

    let cleared = repo
        .update(UpdateReviewParams {
            id: review.review_id,
            stars: 3,
            review_text: Some(None),
        })
        .await?;
    assert!(cleared.review_text.is_none());

    let stored = entity::prelude::Review::find_by_id(review.review_id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.review_text.is_none());

    Ok(())
}

/// Tests updating a review that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let result = repo
        .update(UpdateReviewParams {
            id: 31,
            stars: 1,
            review_text: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
