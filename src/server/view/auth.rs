use dioxus::prelude::*;

use crate::server::view::layout::{FormError, Layout};

#[component]
pub fn LoginPage(#[props(default)] error: String) -> Element {
    rsx! {
        Layout {
            title: "Login",
            nav: false,
            AuthForm {
                heading: "Login",
                action: "/login",
                submit_label: "Login",
                alternative_href: "/register",
                alternative_label: "No account yet? Register",
                error: error,
            }
        }
    }
}

#[component]
pub fn RegisterPage(#[props(default)] error: String) -> Element {
    rsx! {
        Layout {
            title: "Register",
            nav: false,
            AuthForm {
                heading: "Register",
                action: "/register",
                submit_label: "Create account",
                alternative_href: "/login",
                alternative_label: "Already registered? Login",
                error: error,
            }
        }
    }
}

#[component]
fn AuthForm(
    heading: &'static str,
    action: &'static str,
    submit_label: &'static str,
    alternative_href: &'static str,
    alternative_label: &'static str,
    error: String,
) -> Element {
    rsx! {
        div {
            class: "card shadow-sm w-full max-w-96 mt-16 bg-base-200",
            form {
                class: "card-body flex flex-col gap-3",
                method: "post",
                action: action,
                h2 { class: "card-title", "{heading}" }
                if !error.is_empty() {
                    FormError { message: error.clone() }
                }
                input {
                    class: "input w-full",
                    r#type: "text",
                    name: "username",
                    placeholder: "Username",
                    autocomplete: "username",
                }
                input {
                    class: "input w-full",
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                }
                button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
                a { class: "link text-sm", href: alternative_href, "{alternative_label}" }
            }
        }
    }
}
