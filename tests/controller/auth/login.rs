use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use rune_ledger::{
    model::form::CredentialsForm,
    server::{
        controller::auth::login, model::session::user::SessionUserId,
        service::auth::password::hash_password,
    },
};

use super::*;

fn credentials(username: &str, password: &str) -> Form<CredentialsForm> {
    Form(CredentialsForm {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 303 redirect to the dashboard and the user ID in session for valid credentials
async fn redirects_to_dashboard_on_success() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let hash = hash_password("pw123").unwrap();
    let user = test
        .user()
        .insert_user_with_hash("Baal_Slayer", &hash)
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("Baal_Slayer", "pw123"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/dashboard");
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 with the login form re-rendered and no session for a wrong password
async fn rerenders_form_for_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let hash = hash_password("pw123").unwrap();
    test.user()
        .insert_user_with_hash("Baal_Slayer", &hash)
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("Baal_Slayer", "wrong"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect the same 401 response for an unknown username
async fn rerenders_form_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("Nobody", "pw123"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables don't exist
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials("Baal_Slayer", "pw123"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
