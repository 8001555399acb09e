#![allow(non_snake_case)]

use dioxus::{logger::tracing::warn, prelude::*};

use crate::utils::{
  i18n,
  locale::{use_lang, LocaleStore},
  server,
  session::SessionStore,
};
use crate::Route;

#[component]
pub fn NavBar() -> Element {
  static CSS: Asset = asset!("assets/main.css");

  let mut lang = use_lang();
  let t = i18n::t(lang());
  let nav = use_navigator();
  // Subscribing to the route makes the bar re-read the session snapshot on
  // every navigation, exactly when login/logout become visible.
  let route = use_route::<Route>();

  let store = SessionStore::browser();
  let session = store.get_session();
  let is_logged_in = store.is_authenticated();
  let stored_name = store.username();
  let mut username = use_signal(|| stored_name);

  // Resolve a missing display name from the user directory.
  if is_logged_in && username().is_empty() {
    let user_id = session.user_id.clone();
    spawn(async move {
      match server::fetch_users().await {
        Ok(users) => {
          let name = users
            .iter()
            .find(|u| u.id.to_string() == user_id)
            .and_then(|u| u.name.clone())
            .unwrap_or_default();
          if !name.is_empty() {
            SessionStore::browser().set_username(&name);
            username.set(name);
          }
        }
        Err(e) => warn!("display name lookup failed: {}", e),
      }
    });
  }

  let on_services = move |_| {
    if route == (Route::Home {}) {
      document::eval(
        r#"
        const el = document.getElementById('services');
        if (el) el.scrollIntoView({ behavior: 'smooth', block: 'start' });
        "#,
      );
    } else {
      nav.push(Route::Home {});
    }
  };

  let logout = move |_| {
    SessionStore::browser().clear_session();
    username.set(String::new());
    nav.push(Route::Home {});
  };

  rsx! {
    document::Stylesheet { href: CSS },
    nav {
      class: "navbar",
      div {
        class: "nav-container",
        Link {
          class: "brand",
          to: Route::Home { },
          "{t.brand}"
        }
        div {
          class: "nav-links",
          button {
            class: "nav-link",
            onclick: on_services,
            "{t.nav_services}"
          }
          Link {
            class: "nav-link",
            active_class: "nav-active",
            to: Route::Masterclass { },
            "{t.nav_masterclass}"
          }
          select {
            class: "lang-select",
            value: lang().as_str(),
            onchange: move |evt| {
              let selected = LocaleStore::browser().set(&evt.value());
              lang.set(selected);
            },
            option { value: "fr", "FR" }
            option { value: "en", "EN" }
            option { value: "ar", "AR" }
          }
          if is_logged_in {
            span {
              class: "nav-user",
              if username().is_empty() {
                "{t.nav_user_prefix}{session.user_id}"
              } else {
                "{username}"
              }
            }
            button {
              class: "nav-button nav-button-outline",
              onclick: logout,
              "{t.nav_logout}"
            }
          } else {
            button {
              class: "nav-button nav-button-primary",
              onclick: move |_| { nav.push(Route::Login {}); },
              "{t.nav_login}"
            }
            button {
              class: "nav-button nav-button-outline",
              onclick: move |_| { nav.push(Route::Register { msg: String::new() }); },
              "{t.nav_register}"
            }
          }
        }
      }
    }
    Outlet::<Route> {}
    Footer { }
  }
}

#[component]
fn Footer() -> Element {
  rsx! {
    footer {
      div {
        class: "footer-container",
        p { class: "copyright", "© 2025 TradeSense AI" }
        div {
          class: "social-links",
          a {
            href: "https://twitter.com/tradesense",
            target: "_blank",
            class: "social-link",
            title: "Twitter",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"
              }
            }
          }
          a {
            href: "https://www.linkedin.com/company/tradesense",
            target: "_blank",
            class: "social-link",
            title: "LinkedIn",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"
              }
              rect {
                x: "2",
                y: "9",
                width: "4",
                height: "12"
              }
              circle {
                cx: "4",
                cy: "4",
                r: "2"
              }
            }
          }
          a {
            href: "https://www.instagram.com/tradesense",
            target: "_blank",
            class: "social-link",
            title: "Instagram",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              rect { x: "2", y: "2", width: "20", height: "20", rx: "5", ry: "5" }
              path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
              line { x1: "17.5", y1: "6.5", x2: "17.51", y2: "6.5" }
            }
          }
        }
      }
    }
  }
}
