use axum::{extract::State, http::StatusCode, response::IntoResponse};
use rune_ledger::server::controller::{
    dashboard::dashboard,
    stats::{leaderboard, my_stats},
    util::gate::AuthenticatedUser,
};

use super::*;

async fn authenticated(test: &TestContext) -> Result<AuthenticatedUser, TestError> {
    let user = test.user().insert_user("Baal_Slayer").await?;
    let run = test.run().insert_run(user.id, 2).await?;
    test.run().insert_drop(run.id, "Ber", 1).await?;
    test.run().insert_drop(run.id, "Jah", 1).await?;

    Ok(AuthenticatedUser {
        id: user.id,
        username: user.username,
    })
}

#[tokio::test]
/// Expect 200 with the username and rune grid rendered
async fn renders_dashboard() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = authenticated(&test).await?;

    let result = dashboard(State(test.state()), user).await;

    assert!(result.is_ok());
    let html = result.unwrap().0;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Baal_Slayer"));
    assert!(html.contains("data-rune=\"Zod\""));

    Ok(())
}

#[tokio::test]
/// Expect 200 with every ranked user listed
async fn renders_leaderboard() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = authenticated(&test).await?;
    let other = test.user().insert_user("Cow_King").await?;
    test.run().insert_run(other.id, 7).await?;

    let result = leaderboard(State(test.state()), user).await;

    assert!(result.is_ok());
    let html = result.unwrap().0;
    let cow_king = html.find("Cow_King").unwrap();
    let baal_slayer = html.find("Baal_Slayer").unwrap();
    assert!(cow_king < baal_slayer);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the rune tally and chart data rendered
async fn renders_my_stats() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = authenticated(&test).await?;

    let result = my_stats(State(test.state()), user).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables don't exist
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let user = AuthenticatedUser {
        id: 1,
        username: "Baal_Slayer".to_string(),
    };

    let result = my_stats(State(test.state()), user).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
