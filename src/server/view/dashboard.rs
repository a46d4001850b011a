use dioxus::prelude::*;

use crate::{model::stats::UserSummaryDto, server::view::layout::Layout};

/// A rune button of the drop grid
#[derive(Debug, Clone, PartialEq)]
pub struct RuneOption {
    pub name: String,
    pub high: bool,
}

const RUN_LOG_SCRIPT: &str = r#"
(() => {
  const form = document.getElementById("run-log-form");
  const dropList = document.getElementById("drop-list");
  const result = document.getElementById("run-log-result");
  const timerLabel = document.getElementById("timer-label");
  const drops = {};
  let startedAt = null;
  let ticker = null;

  const renderDrops = () => {
    const entries = Object.entries(drops);
    dropList.textContent = entries.length === 0
      ? "No runes selected"
      : entries.map(([rune, qty]) => `${rune} x${qty}`).join(", ");
  };

  document.querySelectorAll("[data-rune]").forEach((button) => {
    button.addEventListener("click", () => {
      const rune = button.dataset.rune;
      drops[rune] = (drops[rune] || 0) + 1;
      renderDrops();
    });
  });

  document.getElementById("clear-drops").addEventListener("click", () => {
    Object.keys(drops).forEach((rune) => delete drops[rune]);
    renderDrops();
  });

  const elapsed = () => startedAt === null ? 0 : Math.floor((Date.now() - startedAt) / 1000);

  document.getElementById("timer-toggle").addEventListener("click", (event) => {
    if (startedAt === null) {
      startedAt = Date.now();
      event.target.textContent = "Reset timer";
      ticker = setInterval(() => { timerLabel.textContent = `${elapsed()}s`; }, 1000);
    } else {
      startedAt = null;
      clearInterval(ticker);
      timerLabel.textContent = "0s";
      event.target.textContent = "Start timer";
    }
  });

  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    form.elements.runes.value = JSON.stringify(
      Object.entries(drops).map(([rune, qty]) => ({ rune, qty }))
    );
    form.elements.session_secs.value = elapsed();

    const response = await fetch("/log-run", {
      method: "POST",
      body: new URLSearchParams(new FormData(form)),
    });
    if (response.redirected) {
      window.location.href = response.url;
      return;
    }
    const data = await response.json();
    if (data.status === "ok") {
      result.textContent = `Run logged with ${data.hr} high rune(s)`;
      setTimeout(() => window.location.reload(), 800);
    } else {
      result.textContent = data.error;
    }
  });

  renderDrops();
})();
"#;

#[component]
pub fn DashboardPage(
    username: String,
    summary: UserSummaryDto,
    areas: Vec<String>,
    difficulties: Vec<&'static str>,
    runes: Vec<RuneOption>,
) -> Element {
    rsx! {
        Layout {
            title: "Dashboard",
            nav: true,
            h1 { class: "text-2xl", "Welcome back, {username}" }
            SummaryPanel { summary: summary }
            RunLogForm { areas: areas, difficulties: difficulties, runes: runes }
        }
    }
}

#[component]
pub fn SummaryPanel(summary: UserSummaryDto) -> Element {
    let average = format!("{:.2}", summary.average_high_runes);

    rsx! {
        div {
            class: "stats shadow w-full max-w-196",
            Stat { label: "Runs", value: summary.runs.to_string() }
            Stat { label: "High runes", value: summary.total_high_runes.to_string() }
            Stat { label: "Uniques", value: summary.total_uniques.to_string() }
            Stat { label: "Sets", value: summary.total_sets.to_string() }
            Stat { label: "HR per run", value: average }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value text-2xl", "{value}" }
        }
    }
}

#[component]
fn RunLogForm(
    areas: Vec<String>,
    difficulties: Vec<&'static str>,
    runes: Vec<RuneOption>,
) -> Element {
    rsx! {
        div {
            class: "card shadow-sm w-full max-w-196 bg-base-200",
            form {
                id: "run-log-form",
                class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Log a run" }
                div { class: "flex flex-wrap gap-2",
                    select {
                        class: "select",
                        name: "area",
                        for area in areas.iter() {
                            option { value: "{area}", "{area}" }
                        }
                    }
                    select {
                        class: "select",
                        name: "difficulty",
                        for difficulty in difficulties.iter() {
                            option {
                                value: "{difficulty}",
                                selected: *difficulty == "Hell",
                                "{difficulty}"
                            }
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    input {
                        class: "input w-32",
                        r#type: "number",
                        min: "0",
                        name: "uniques",
                        placeholder: "Uniques",
                    }
                    input {
                        class: "input w-32",
                        r#type: "number",
                        min: "0",
                        name: "sets",
                        placeholder: "Sets",
                    }
                    div { class: "flex items-center gap-2",
                        button { id: "timer-toggle", class: "btn btn-outline", r#type: "button", "Start timer" }
                        span { id: "timer-label", "0s" }
                    }
                }
                div { class: "grid grid-cols-6 sm:grid-cols-11 gap-1",
                    for rune in runes.iter() {
                        button {
                            class: if rune.high { "btn btn-sm btn-warning" } else { "btn btn-sm" },
                            r#type: "button",
                            "data-rune": "{rune.name}",
                            "{rune.name}"
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    span { id: "drop-list", class: "text-sm" }
                    button { id: "clear-drops", class: "btn btn-xs btn-ghost", r#type: "button", "Clear" }
                }
                input { r#type: "hidden", name: "runes", value: "[]" }
                input { r#type: "hidden", name: "session_secs", value: "0" }
                button { class: "btn btn-primary", r#type: "submit", "Log run" }
                p { id: "run-log-result", class: "text-sm" }
            }
            script { dangerous_inner_html: RUN_LOG_SCRIPT }
        }
    }
}
