#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::navbar::NavBar;
use dioxus::prelude::*;
use pages::{
    admin::Admin, dashboard::Dashboard, home::Home, login::Login, masterclass::Masterclass,
    register::Register, superadmin::Superadmin,
};
use utils::locale::{Lang, LocaleStore};

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[layout(NavBar)]
    #[route("/")]
    Home {},
    #[route("/masterclass")]
    Masterclass {},
    #[route("/login")]
    Login {},
    #[route("/register?:msg")]
    Register { msg: String },
    #[route("/superadmin")]
    Superadmin {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    // Restore the persisted language and its text direction before anything
    // renders, then share it app-wide.
    let lang: Lang = use_hook(|| LocaleStore::browser().init());
    use_context_provider(|| Signal::new(lang));

    rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "The page you requested doesn't exist." }
        pre { color: "red", "log:\nattempted to navigate to: {route:?}" }
    }
}
