use super::*;

/// Tests getting an existing business by id.
///
/// Expected: Ok(Some(Business))
#[tokio::test]
async fn gets_existing_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    let found = repo.get_by_id(business.business_id).await?.unwrap();

    assert_eq!(found.id, business.business_id);
    assert_eq!(found.name, business.name);
    assert_eq!(found.owner_id, business.owner_id);

    Ok(())
}

/// Tests getting a business that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BusinessRepository::new(db);
    let found = repo.get_by_id(404).await?;

    assert!(found.is_none());

    Ok(())
}
