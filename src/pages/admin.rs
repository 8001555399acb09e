#![allow(non_snake_case)]

use dioxus::{logger::tracing::error, prelude::*};

use crate::components::guard::RequireRole;
use crate::utils::{
  i18n,
  locale::use_lang,
  server,
  session::{Role, SessionStore},
};

#[component]
pub fn Admin() -> Element {
  rsx! {
    RequireRole {
      roles: vec![Role::Admin, Role::Superadmin],
      AdminPanel { }
    }
  }
}

#[component]
fn AdminPanel() -> Element {
  static CSS: Asset = asset!("assets/admin.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let users = use_resource(move || async move { server::fetch_users().await });
  let is_superadmin = SessionStore::browser().has_role(&[Role::Superadmin]);
  let mut show_paypal = use_signal(|| false);
  let mut paypal_client_id = use_signal(String::new);
  let mut paypal_secret = use_signal(String::new);
  let mut saved_msg = use_signal(String::new);

  // Directory fetch state is explicit: loading, loaded or unavailable.
  // An unreachable API shows a warning instead of fabricated rows.
  let (unavailable, table_body) = match &*users.read() {
    None => (
      false,
      rsx! {
        tr { td { class: "table-note", colspan: "5", "{t.admin_loading}" } }
      },
    ),
    Some(Ok(list)) if list.is_empty() => (
      false,
      rsx! {
        tr { td { class: "table-note", colspan: "5", "{t.admin_empty}" } }
      },
    ),
    Some(Ok(list)) => {
      let rows = list.iter().map(|user| {
        let id = user.id;
        let name = user.name.clone().unwrap_or_else(|| "-".to_string());
        let email = user.email.clone().unwrap_or_else(|| "-".to_string());
        let role = user.role.clone().unwrap_or_default().to_lowercase();
        let status = user.status.clone().unwrap_or_default();
        let badge = if status.eq_ignore_ascii_case("failed") {
          "badge badge-failed"
        } else {
          "badge badge-active"
        };
        let label = status.to_uppercase();
        rsx! {
          tr {
            key: "user-row-{id}",
            td { "{id}" }
            td { "{name}" }
            td { "{email}" }
            td { "{role}" }
            td { span { class: "{badge}", "{label}" } }
          }
        }
      });
      (false, rsx! { {rows} })
    }
    Some(Err(e)) => {
      error!("user directory fetch failed: {}", e);
      (true, rsx! {})
    }
  };

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "admin-page",
      div {
        class: "admin-header",
        h1 { "{t.admin_title}" }
        if is_superadmin {
          button {
            class: "button button-primary",
            onclick: move |_| show_paypal.set(true),
            "{t.admin_paypal_button}"
          }
        }
      }
      if unavailable {
        div { class: "banner banner-warning", "{t.admin_unavailable}" }
      }
      if !saved_msg().is_empty() {
        div { class: "banner banner-success", "{saved_msg}" }
      }
      div {
        class: "table-wrapper",
        table {
          class: "users-table",
          thead {
            tr {
              th { scope: "col", "{t.admin_th_id}" }
              th { scope: "col", "{t.admin_th_name}" }
              th { scope: "col", "{t.admin_th_email}" }
              th { scope: "col", "{t.admin_th_role}" }
              th { scope: "col", "{t.admin_th_status}" }
            }
          }
          tbody {
            {table_body}
          }
        }
      }
      if show_paypal() {
        div {
          class: "dialog-overlay",
          div {
            class: "dialog",
            h2 { class: "dialog-title", "{t.admin_paypal_title}" }
            p { class: "dialog-subtitle", "{t.admin_paypal_hint}" }
            div {
              class: "form-group",
              label { class: "form-label", "{t.admin_client_id}" }
              input {
                class: "form-input",
                r#type: "text",
                value: "{paypal_client_id}",
                oninput: move |evt| paypal_client_id.set(evt.value()),
              }
            }
            div {
              class: "form-group",
              label { class: "form-label", "{t.admin_secret}" }
              input {
                class: "form-input",
                r#type: "password",
                value: "{paypal_secret}",
                oninput: move |evt| paypal_secret.set(evt.value()),
              }
            }
            div {
              class: "dialog-actions",
              button {
                class: "button",
                onclick: move |_| show_paypal.set(false),
                "{t.admin_cancel}"
              }
              button {
                class: "button button-primary",
                onclick: move |_| {
                  saved_msg.set(i18n::t(*lang.peek()).admin_saved.to_string());
                  show_paypal.set(false);
                  paypal_client_id.set(String::new());
                  paypal_secret.set(String::new());
                },
                "{t.admin_save}"
              }
            }
          }
        }
      }
    }
  }
}
