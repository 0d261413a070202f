use super::*;

/// Tests the existence check for present and absent ids.
///
/// Expected: true for a created business, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);

    assert!(repo.exists(business.business_id).await?);
    assert!(!repo.exists(business.business_id + 1).await?);

    Ok(())
}
