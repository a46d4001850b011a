use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use rune_ledger::{model::form::CredentialsForm, server::controller::auth::register};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn credentials(username: &str, password: &str) -> Form<CredentialsForm> {
    Form(CredentialsForm {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 303 redirect to the login page after creating the account
async fn redirects_to_login_on_success() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = register(State(test.state()), credentials("Baal_Slayer", "pw123")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/login");
    let count = entity::prelude::User::find().count(&test.db).await?;
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 with the form re-rendered for empty fields
async fn rerenders_form_for_empty_fields() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = register(State(test.state()), credentials("", "")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 409 and no second user row for a taken username
async fn rerenders_form_for_taken_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    test.user().insert_user("Baal_Slayer").await?;

    let result = register(State(test.state()), credentials("Baal_Slayer", "pw123")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let count = entity::prelude::User::find().count(&test.db).await?;
    assert_eq!(count, 1);

    Ok(())
}
