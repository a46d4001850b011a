use dioxus::prelude::*;

use crate::{
    model::{
        run::RunDto,
        stats::{DailyHighRunesDto, RuneTallyDto, UserSummaryDto},
    },
    server::view::{dashboard::SummaryPanel, layout::Layout},
};

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

/// Chart.js bootstrap for the daily high rune chart, data is injected as JSON
fn chart_script(daily: &[DailyHighRunesDto]) -> String {
    let labels: Vec<String> = daily.iter().map(|day| day.day.to_string()).collect();
    let values: Vec<i64> = daily.iter().map(|day| day.high_runes).collect();

    let labels = serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string());
    let values = serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"new Chart(document.getElementById("daily-chart"), {{
  type: "bar",
  data: {{ labels: {labels}, datasets: [{{ label: "High runes", data: {values} }}] }},
  options: {{ scales: {{ y: {{ beginAtZero: true, ticks: {{ precision: 0 }} }} }} }}
}});"#
    )
}

#[component]
pub fn StatsPage(
    username: String,
    summary: UserSummaryDto,
    daily: Vec<DailyHighRunesDto>,
    tally: Vec<RuneTallyDto>,
    recent: Vec<RunDto>,
) -> Element {
    let chart = chart_script(&daily);
    let days = daily.len();

    rsx! {
        Layout {
            title: "My Stats",
            nav: true,
            h1 { class: "text-2xl", "Stats for {username}" }
            SummaryPanel { summary: summary }
            div {
                class: "card shadow-sm w-full max-w-196 bg-base-200",
                div { class: "card-body",
                    h2 { class: "card-title", "High runes, last {days} days" }
                    canvas { id: "daily-chart" }
                }
            }
            RuneTally { tally: tally }
            RecentRuns { runs: recent }
            script { src: CHART_JS }
            script { dangerous_inner_html: chart }
        }
    }
}

#[component]
fn RuneTally(tally: Vec<RuneTallyDto>) -> Element {
    rsx! {
        div {
            class: "card shadow-sm w-full max-w-196 bg-base-200",
            div { class: "card-body",
                h2 { class: "card-title", "Runes found" }
                if tally.is_empty() {
                    p { "No runes found yet" }
                }
                div { class: "flex flex-wrap gap-2",
                    for entry in tally.iter() {
                        span {
                            class: if entry.high { "badge badge-warning" } else { "badge" },
                            "{entry.rune} x{entry.quantity}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentRuns(runs: Vec<RunDto>) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto w-full max-w-196",
            table {
                class: "table table-sm",
                thead {
                    tr {
                        th { "When (UTC)" }
                        th { "Area" }
                        th { "Difficulty" }
                        th { "Uniques" }
                        th { "Sets" }
                        th { "HR" }
                        th { "Time" }
                        th { "Runes" }
                    }
                }
                tbody {
                    for run in runs.iter() {
                        RecentRunRow { run: run.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentRunRow(run: RunDto) -> Element {
    let created_at = run.created_at.format("%Y-%m-%d %H:%M").to_string();
    let duration = format!("{}:{:02}", run.session_secs / 60, run.session_secs % 60);
    let drops = run
        .drops
        .iter()
        .map(|drop| format!("{} x{}", drop.rune, drop.quantity))
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        tr {
            td { "{created_at}" }
            td { "{run.area}" }
            td { "{run.difficulty}" }
            td { "{run.unique_count}" }
            td { "{run.set_count}" }
            td { "{run.high_rune_count}" }
            td { "{duration}" }
            td { "{drops}" }
        }
    }
}
