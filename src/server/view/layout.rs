use dioxus::prelude::*;

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Page head and body, wrapped in the `html` element by [`render`](super::render)
#[component]
pub fn Layout(title: &'static str, nav: bool, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | Rune Ledger" }
            link { rel: "stylesheet", href: DAISYUI_CSS, r#type: "text/css" }
            script { src: TAILWIND_JS }
        }
        body {
            class: "min-h-screen bg-base-100",
            if nav {
                Navbar {}
            }
            main {
                class: "p-4 flex flex-col items-center gap-4",
                {children}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl", "Rune Ledger" }
                    p { class: "text-xs", "v0.1.0" }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal px-1",
                    li { a { href: "/dashboard", "Dashboard" } }
                    li { a { href: "/my-stats", "My Stats" } }
                    li { a { href: "/leaderboard", "Leaderboard" } }
                    li { a { href: "/logout", "Logout" } }
                }
            }
        }
    }
}

/// Inline error banner shown above a form
#[component]
pub fn FormError(message: String) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "alert alert-error w-full",
            span { "{message}" }
        }
    }
}
