#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{
  i18n,
  locale::use_lang,
  server::{self, LoginRequest, LoginResponse},
  session::SessionStore,
};
use crate::Route;

#[component]
pub fn Login() -> Element {
  static CSS: Asset = asset!("assets/auth.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let nav = use_navigator();
  let mut email = use_signal(String::new);
  let mut password = use_signal(String::new);
  let mut error = use_signal(String::new);
  let mut loading = use_signal(|| false);

  let handle_submit = move |evt: FormEvent| {
    evt.prevent_default();
    spawn(async move {
      error.set(String::new());
      loading.set(true);
      let payload = LoginRequest { email: email.peek().clone(), password: password.peek().clone() };
      match server::login(&payload).await {
        // A response without a user id is invalid credentials, same as any
        // failed call.
        Ok(LoginResponse { user_id: Some(id), role }) => {
          SessionStore::browser().set_session(&id.to_string(), role.as_deref().unwrap_or(""));
          nav.push(Route::Dashboard {});
        }
        Ok(_) | Err(_) => {
          error.set(i18n::t(*lang.peek()).login_error.to_string());
        }
      }
      loading.set(false);
    });
  };

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "auth-page",
      div {
        class: "auth-card",
        h1 { class: "auth-title", "{t.login_title}" }
        p { class: "auth-subtitle", "{t.login_subtitle}" }
        form {
          class: "auth-form",
          onsubmit: handle_submit,
          div {
            class: "form-group",
            label { class: "form-label", "{t.login_email}" }
            input {
              class: "form-input",
              r#type: "email",
              placeholder: "votre@email.com",
              required: true,
              value: "{email}",
              oninput: move |evt| email.set(evt.value()),
            }
          }
          div {
            class: "form-group",
            label { class: "form-label", "{t.login_password}" }
            input {
              class: "form-input",
              r#type: "password",
              placeholder: "••••••••",
              required: true,
              value: "{password}",
              oninput: move |evt| password.set(evt.value()),
            }
          }
          if !error().is_empty() {
            div { class: "banner banner-warning", "{error}" }
          }
          button {
            class: "button button-primary button-full",
            r#type: "submit",
            disabled: loading(),
            if loading() { "{t.login_loading}" } else { "{t.login_submit}" }
          }
        }
        button {
          class: "auth-switch",
          onclick: move |_| { nav.push(Route::Register { msg: String::new() }); },
          "{t.login_no_account}"
        }
      }
    }
  }
}
