use super::*;
use crate::data::user::UserRepository;

/// Tests finding an existing user.
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let user = UserRepository::new(db).find_by_id(admin.id).await?.unwrap();

    assert_eq!(user.login, admin.login);
    assert!(user.admin);

    Ok(())
}

/// Tests looking up a user that does not exist.
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).find_by_id(42).await?.is_none());

    Ok(())
}
