use dioxus::prelude::*;

use crate::{model::stats::LeaderboardEntryDto, server::view::layout::Layout};

#[component]
pub fn LeaderboardPage(entries: Vec<LeaderboardEntryDto>) -> Element {
    rsx! {
        Layout {
            title: "Leaderboard",
            nav: true,
            h1 { class: "text-2xl", "Leaderboard" }
            LeaderboardTable { entries: entries }
        }
    }
}

#[component]
pub fn LeaderboardTable(entries: Vec<LeaderboardEntryDto>) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto w-full max-w-196",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "#" }
                        th { "Farmer" }
                        th { "High runes" }
                        th { "Runs" }
                        th { "HR per run" }
                    }
                }
                tbody {
                    if entries.is_empty() {
                        tr {
                            td { colspan: "5", "No runs logged yet" }
                        }
                    }
                    for entry in entries.iter() {
                        LeaderboardRow { entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LeaderboardRow(entry: LeaderboardEntryDto) -> Element {
    let average = format!("{:.2}", entry.average_high_runes);

    rsx! {
        tr {
            td { "{entry.rank}" }
            td { "{entry.username}" }
            td { "{entry.total_high_runes}" }
            td { "{entry.runs}" }
            td { "{average}" }
        }
    }
}
