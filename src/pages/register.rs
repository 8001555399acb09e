#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{
  i18n,
  locale::use_lang,
  server::{self, RegisterRequest},
  session::SessionStore,
};
use crate::Route;

#[component]
pub fn Register(msg: String) -> Element {
  static CSS: Asset = asset!("assets/auth.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let nav = use_navigator();
  let mut name = use_signal(String::new);
  let mut email = use_signal(String::new);
  let mut password = use_signal(String::new);
  let mut error = use_signal(String::new);
  let mut loading = use_signal(|| false);

  let handle_submit = move |evt: FormEvent| {
    evt.prevent_default();
    spawn(async move {
      error.set(String::new());
      loading.set(true);
      let t = i18n::t(*lang.peek());

      let username = name.peek().trim().to_string();
      let mail = email.peek().trim().to_string();
      let pass = password.peek().trim().to_string();
      if username.is_empty() || mail.is_empty() || pass.is_empty() {
        error.set(t.register_missing.to_string());
        loading.set(false);
        return;
      }

      let payload = RegisterRequest { username: username.clone(), email: mail, password: pass };
      match server::register(&payload).await {
        Ok(()) => {
          SessionStore::browser().set_username(&username);
          nav.push(Route::Login {});
        }
        Err(e) => {
          let message = match e.status() {
            Some(409) => e.server_message().unwrap_or(t.register_email_taken).to_string(),
            Some(400) => e.server_message().unwrap_or(t.register_missing).to_string(),
            Some(status) => e
              .server_message()
              .map(str::to_string)
              .unwrap_or_else(|| format!("{} (code {})", t.register_failed, status)),
            None => t.register_failed.to_string(),
          };
          error.set(message);
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
        h1 { class: "auth-title", "{t.register_title}" }
        p { class: "auth-subtitle", "{t.register_subtitle}" }
        form {
          class: "auth-form",
          onsubmit: handle_submit,
          div {
            class: "form-group",
            label { class: "form-label", "{t.register_name}" }
            input {
              class: "form-input",
              r#type: "text",
              placeholder: "Votre nom",
              required: true,
              value: "{name}",
              oninput: move |evt| name.set(evt.value()),
            }
          }
          div {
            class: "form-group",
            label { class: "form-label", "{t.register_email}" }
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
            label { class: "form-label", "{t.register_password}" }
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
          if error().is_empty() && !msg.is_empty() {
            div { class: "banner banner-info", "{msg}" }
          }
          button {
            class: "button button-primary button-full",
            r#type: "submit",
            disabled: loading(),
            if loading() { "{t.register_loading}" } else { "{t.register_submit}" }
          }
        }
        button {
          class: "auth-switch",
          onclick: move |_| { nav.push(Route::Login {}); },
          "{t.register_have_account}"
        }
      }
    }
  }
}
