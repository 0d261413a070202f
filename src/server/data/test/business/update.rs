use super::*;

/// Tests replacing every attribute of a business.
///
/// Expected: Ok(Business) with the new attributes and unchanged id
#[tokio::test]
async fn overwrites_all_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    let updated = repo
        .update(UpdateBusinessParams {
            id: business.business_id,
            attributes: BusinessParams {
                owner_id: 9,
                name: "Renamed".to_string(),
                street_address: "2 Side St".to_string(),
                city: "Y".to_string(),
                state: "WA".to_string(),
                zip_code: 98101,
            },
        })
        .await?;

    assert_eq!(updated.id, business.business_id);
    assert_eq!(updated.owner_id, 9);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.street_address, "2 Side St");
    assert_eq!(updated.city, "Y");
    assert_eq!(updated.state, "WA");
    assert_eq!(updated.zip_code, 98101);

    let stored = entity::prelude::Business::find_by_id(business.business_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed");

    Ok(())
}

/// Tests updating a business that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BusinessRepository::new(db);
    let result = repo
        .update(UpdateBusinessParams {
            id: 77,
            attributes: params(1, "Ghost"),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
