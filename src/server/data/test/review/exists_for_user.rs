use super::*;

/// Tests duplicate detection when the user's review is the only one.
///
/// Expected: true for the reviewer, false for another user
#[tokio::test]
async fn detects_existing_review_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    factory::create_review_for_user(db, business.business_id, 1).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists_for_user(business.business_id, 1).await?);
    assert!(!repo.exists_for_user(business.business_id, 2).await?);

    Ok(())
}

/// Tests duplicate detection when the user's review is not the first for the business.
///
/// Verifies that every review of the business is considered, not just the first row.
///
/// Expected: true for the later reviewer
#[tokio::test]
async fn detects_review_behind_other_reviewers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    factory::create_review_for_user(db, business.business_id, 1).await?;
    factory::create_review_for_user(db, business.business_id, 2).await?;
    factory::create_review_for_user(db, business.business_id, 3).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists_for_user(business.business_id, 3).await?);

    Ok(())
}

/// Tests that a review for another business does not count.
///
/// Expected: false
#[tokio::test]
async fn ignores_reviews_of_other_businesses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewed = factory::create_business(db).await?;
    let other = factory::create_business(db).await?;
    factory::create_review_for_user(db, reviewed.business_id, 1).await?;

    let repo = ReviewRepository::new(db);

    assert!(!repo.exists_for_user(other.business_id, 1).await?);

    Ok(())
}
