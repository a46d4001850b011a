//! Server-rendered pages.
//!
//! Pages are Dioxus components rendered to a string per request. They consume plain DTOs
//! and never query the database themselves.

pub mod auth;
pub mod dashboard;
pub mod layout;
pub mod leaderboard;
pub mod stats;

use axum::response::Html;
use dioxus::prelude::*;

/// Renders an element as a complete HTML document
pub fn render(element: Element) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html><html lang="en" data-theme="dark">{}</html>"#,
        dioxus_ssr::render_element(element)
    ))
}
