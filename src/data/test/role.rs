use super::*;
use crate::data::role::RoleRepository;

/// Tests creating a role that does not exist yet.
///
/// Expected: Ok(true) with the role stored under its slug and title
#[tokio::test]
async fn creates_missing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let created = repo
        .create_if_absent("fleet-commander", "Fleet Commander")
        .await?;

    assert!(created);
    let role = repo.find_by_slug("fleet-commander").await?.unwrap();
    assert_eq!(role.title, "Fleet Commander");

    Ok(())
}

/// Tests that registering an existing slug is a no-op.
///
/// Expected: Ok(false), a single row, original title kept
#[tokio::test]
async fn skips_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db, "recruit", "Recruit").await?;

    let repo = RoleRepository::new(db);
    let created = repo.create_if_absent("recruit", "Recruits").await?;

    assert!(!created);
    assert_eq!(entity::prelude::Role::find().count(db).await?, 1);
    assert_eq!(repo.find_by_slug("recruit").await?.unwrap().title, "Recruit");

    Ok(())
}

/// Tests listing roles sorted by slug.
#[tokio::test]
async fn gets_all_roles_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db, "recruit", "Recruit").await?;
    factory::create_role(db, "director", "Director").await?;

    let roles = RoleRepository::new(db).get_all().await?;
    let slugs: Vec<_> = roles.iter().map(|r| r.slug.as_str()).collect();

    assert_eq!(slugs, vec!["director", "recruit"]);

    Ok(())
}
