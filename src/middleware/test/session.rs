use super::*;

/// Tests reading the user ID of an anonymous session.
#[tokio::test]
async fn anonymous_session_has_no_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Tests storing the logged-in user.
#[tokio::test]
async fn stores_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(42).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(42));

    Ok(())
}
