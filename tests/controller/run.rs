use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use rune_ledger::{
    model::form::LogRunForm,
    server::controller::{run::log_run, util::gate::AuthenticatedUser},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn form(runes: &str) -> Form<LogRunForm> {
    Form(LogRunForm {
        area: "Mephisto".to_string(),
        difficulty: "Hell".to_string(),
        uniques: "2".to_string(),
        sets: "1".to_string(),
        runes: runes.to_string(),
        session_secs: "120".to_string(),
    })
}

#[tokio::test]
/// Expect `{"status":"ok","hr":1}` when only Jah of Jah & El counts
async fn returns_high_rune_count_of_run() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("Baal_Slayer").await?;
    let authenticated = AuthenticatedUser {
        id: user.id,
        username: user.username.clone(),
    };

    let result = log_run(
        State(test.state()),
        authenticated,
        form(r#"[{"rune":"Jah","qty":1},{"rune":"El","qty":5}]"#),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().0;
    assert_eq!(response.status, "ok");
    assert_eq!(response.hr, 1);

    Ok(())
}

#[tokio::test]
/// Expect malformed rune JSON to store the run without drops
async fn treats_malformed_runes_as_no_drops() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("Baal_Slayer").await?;
    let authenticated = AuthenticatedUser {
        id: user.id,
        username: user.username.clone(),
    };

    let result = log_run(State(test.state()), authenticated, form("[{\"rune\":")).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.hr, 0);
    let run_count = entity::prelude::Run::find().count(&test.db).await?;
    assert_eq!(run_count, 1);
    let drop_count = entity::prelude::RuneDrop::find().count(&test.db).await?;
    assert_eq!(drop_count, 0);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an unknown difficulty
async fn fails_for_unknown_difficulty() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("Baal_Slayer").await?;
    let authenticated = AuthenticatedUser {
        id: user.id,
        username: user.username.clone(),
    };
    let Form(mut submitted) = form("[]");
    submitted.difficulty = "Inferno".to_string();

    let result = log_run(State(test.state()), authenticated, Form(submitted)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
