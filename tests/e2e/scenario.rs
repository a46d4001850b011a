//! End-to-end scenarios: register, log in, log runs and read back the aggregates.

use axum::http::StatusCode;
use rune_ledger::{
    model::api::LogRunResponseDto,
    server::{reference::ReferenceData, service::stats::StatsService},
};
use rune_ledger_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{body_string, form_body, post_form, register_and_login, send, test_router};

async fn log_run(router: &axum::Router, cookie: &str, runes: &str) -> LogRunResponseDto {
    let body = form_body(&[
        ("area", "Mephisto"),
        ("difficulty", "Hell"),
        ("uniques", "2"),
        ("sets", "1"),
        ("runes", runes),
    ]);
    let response = send(router, post_form("/log-run", &body, Some(cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
/// Expect hr=1 then hr=3 and a summary of 2 runs, 4 high runes, 2.0 average
async fn logs_runs_and_summarizes() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());
    let cookie = register_and_login(&router, "Baal_Slayer", "pw123").await;
    let reference = ReferenceData::new();
    let stats_service = StatsService::new(&test.db, &reference);
    let user_id = entity::prelude::User::find()
        .one(&test.db)
        .await?
        .unwrap()
        .id;

    let first = log_run(&router, &cookie, r#"[{"rune":"Jah","qty":1},{"rune":"El","qty":5}]"#).await;
    assert_eq!(
        first,
        LogRunResponseDto {
            status: "ok".to_string(),
            hr: 1
        }
    );
    let summary = stats_service.user_summary(user_id).await.unwrap();
    assert_eq!(summary.runs, 1);
    assert_eq!(summary.total_high_runes, 1);

    let second = log_run(&router, &cookie, r#"[{"rune":"Ber","qty":2},{"rune":"Zod","qty":1}]"#).await;
    assert_eq!(second.hr, 3);
    let summary = stats_service.user_summary(user_id).await.unwrap();
    assert_eq!(summary.runs, 2);
    assert_eq!(summary.total_high_runes, 4);
    assert_eq!(summary.average_high_runes, 2.0);

    Ok(())
}

#[tokio::test]
/// Expect the 25 high rune user ahead of the 10 high rune user
async fn ranks_users_on_leaderboard() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());
    let ten = register_and_login(&router, "Ten", "pw123").await;
    let twenty_five = register_and_login(&router, "TwentyFive", "pw123").await;

    log_run(&router, &ten, r#"[{"rune":"Ist","qty":10}]"#).await;
    log_run(&router, &twenty_five, r#"[{"rune":"Zod","qty":20}]"#).await;
    log_run(&router, &twenty_five, r#"[{"rune":"Lo","qty":5},{"rune":"Pul","qty":9}]"#).await;

    let reference = ReferenceData::new();
    let stats_service = StatsService::new(&test.db, &reference);
    let entries = stats_service.leaderboard(10).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].username, "TwentyFive");
    assert_eq!(entries[0].total_high_runes, 25);
    assert_eq!(entries[1].username, "Ten");
    assert_eq!(entries[1].total_high_runes, 10);

    Ok(())
}

#[tokio::test]
/// Expect an empty drop list to store a run with zero high runes and no drops
async fn logs_run_without_drops() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());
    let cookie = register_and_login(&router, "Baal_Slayer", "pw123").await;

    let response = log_run(&router, &cookie, "[]").await;

    assert_eq!(response.hr, 0);
    let run_count = entity::prelude::Run::find().count(&test.db).await?;
    assert_eq!(run_count, 1);
    let drop_count = entity::prelude::RuneDrop::find().count(&test.db).await?;
    assert_eq!(drop_count, 0);

    Ok(())
}

#[tokio::test]
/// Expect a second registration of the same username to fail without a second row
async fn rejects_duplicate_registration() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let router = test_router(test.state());
    let body = "username=Baal_Slayer&password=pw123";

    let first = send(&router, post_form("/register", body, None)).await;
    let second = send(&router, post_form("/register", body, None)).await;

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert!(body_string(second).await.contains("username already taken"));
    let count = entity::prelude::User::find().count(&test.db).await?;
    assert_eq!(count, 1);

    Ok(())
}
