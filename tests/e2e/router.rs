//! Requests through the full router: authentication gate, redirects & session cookies.

use axum::http::StatusCode;
use rune_ledger_test_utils::prelude::*;

use sea_orm::EntityTrait;

use crate::util::{get, location, post_form, register_and_login, send, session_cookie, test_router};

#[tokio::test]
/// Expect the root path to redirect to the login page
async fn redirects_root_to_login() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());

    let response = send(&router, get("/", None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));

    Ok(())
}

#[tokio::test]
/// Expect every protected route to redirect to the login page without a session
async fn gates_protected_routes() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());

    for uri in ["/dashboard", "/leaderboard", "/my-stats"] {
        let response = send(&router, get(uri, None)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), Some("/login"), "{uri}");
    }

    let response = send(&router, post_form("/log-run", "area=Mephisto", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
/// Expect the public forms to render without a session
async fn renders_public_forms() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());

    for uri in ["/login", "/register"] {
        let response = send(&router, get(uri, None)).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    Ok(())
}

#[tokio::test]
/// Expect a session cookie from login that opens the dashboard
async fn login_cookie_opens_dashboard() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());

    let cookie = register_and_login(&router, "Baal_Slayer", "pw123").await;
    let response = send(&router, get("/dashboard", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect the session to stop working after logout
async fn logout_ends_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());
    let cookie = register_and_login(&router, "Baal_Slayer", "pw123").await;

    let response = send(&router, get("/logout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));

    let response = send(&router, get("/dashboard", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
/// Expect no session cookie to be issued for a failed login
async fn failed_login_sets_no_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());
    send(
        &router,
        post_form("/register", "username=Baal_Slayer&password=pw123", None),
    )
    .await;

    let response = send(
        &router,
        post_form("/login", "username=Baal_Slayer&password=wrong", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&response).is_none());

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to be served
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let router = test_router(test.state());

    let response = send(&router, get("/api/docs/openapi.json", None)).await;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect a username containing form delimiters to register and log in intact
async fn encodes_reserved_characters_in_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());

    let cookie = register_and_login(&router, "Cow King & Co=1", "p@ss+word").await;
    let response = send(&router, get("/dashboard", Some(&cookie))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let user = entity::prelude::User::find().one(&test.db).await?.unwrap();
    assert_eq!(user.username, "Cow King & Co=1");

    Ok(())
}
