use super::*;

/// Tests listing businesses for an owner.
///
/// Expected: Ok with only that owner's businesses
#[tokio::test]
async fn returns_only_owned_businesses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_business_for_owner(db, 3).await?;
    factory::create_business_for_owner(db, 4).await?;
    let second = factory::create_business_for_owner(db, 3).await?;

    let repo = BusinessRepository::new(db);
    let owned = repo.get_by_owner(3).await?;

    assert_eq!(
        owned.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![first.business_id, second.business_id]
    );
    assert!(owned.iter().all(|b| b.owner_id == 3));

    Ok(())
}

/// Tests listing businesses for an owner without any.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_business_for_owner(db, 3).await?;

    let repo = BusinessRepository::new(db);
    let owned = repo.get_by_owner(8).await?;

    assert!(owned.is_empty());

    Ok(())
}
