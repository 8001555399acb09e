#![allow(non_snake_case)]

use std::time::Duration;

use dioxus::{logger::tracing::warn, prelude::*};

use crate::utils::{
  i18n,
  locale::use_lang,
  server::{self, BuyChallengeRequest},
  session::SessionStore,
};
use crate::Route;

pub fn plan_price(code: &str) -> &'static str {
  match code {
    "pro" => "500 DH",
    "enterprise" => "1000 DH",
    _ => "200 DH",
  }
}

/// Challenge purchase modal. The payment itself is simulated with a fixed
/// delay; only the purchase record goes to the backend. A failed purchase
/// call keeps the previously stored challenge id.
#[component]
pub fn PayDialog(show: Signal<bool>, plan_type: Signal<String>) -> Element {
  let lang = use_lang();
  let t = i18n::t(lang());
  let nav = use_navigator();
  let mut method = use_signal(|| "CMI".to_string());
  let mut processing = use_signal(|| false);
  let mut success = use_signal(String::new);
  let mut paypal_email = use_signal(String::new);

  // The platform PayPal address is looked up whenever the dialog opens.
  use_effect(move || {
    if show() {
      spawn(async move {
        match server::fetch_platform_settings().await {
          Ok(settings) => paypal_email.set(settings.paypal_email.unwrap_or_default()),
          Err(_) => paypal_email.set(String::new()),
        }
      });
    }
  });

  if !show() {
    return rsx! {};
  }

  let price = plan_price(&plan_type());

  let confirm = move |_| {
    processing.set(true);
    success.set(String::new());
    spawn(async move {
      // Simulated payment processor round trip.
      async_std::task::sleep(Duration::from_secs(3)).await;
      processing.set(false);
      success.set(i18n::t(*lang.peek()).pay_success.to_string());

      let store = SessionStore::browser();
      let session = store.get_session();
      let Ok(user_id) = session.user_id.parse::<i64>() else {
        show.set(false);
        nav.push(Route::Register { msg: String::new() });
        return;
      };
      let payload = BuyChallengeRequest { user_id, plan_type: plan_type.peek().clone() };
      match server::buy_challenge(&payload).await {
        Ok(response) => {
          if let Some(id) = response.challenge_id {
            store.set_challenge_id(id);
          }
        }
        // The stored id stays as-is; the dashboard still works on it.
        Err(e) => warn!("challenge purchase not recorded: {}", e),
      }

      async_std::task::sleep(Duration::from_millis(800)).await;
      show.set(false);
      nav.push(Route::Dashboard {});
    });
  };

  rsx! {
    div {
      class: "dialog-overlay",
      div {
        class: "dialog",
        h2 { class: "dialog-title", "{t.pay_title}" }
        p { class: "dialog-subtitle", "{plan_type} - {price}" }
        div {
          class: "form-group",
          label { class: "form-label", "{t.pay_method}" }
          select {
            class: "form-input",
            value: "{method}",
            onchange: move |evt| method.set(evt.value()),
            option { value: "CMI", "CMI" }
            option { value: "Virement", "Virement" }
            option { value: "PayPal", "PayPal" }
          }
        }
        if method() == "PayPal" && !paypal_email().is_empty() {
          p { class: "dialog-note", "{t.pay_platform_account}: {paypal_email}" }
        }
        if !success().is_empty() {
          div { class: "banner banner-success", "{success}" }
        }
        div {
          class: "dialog-actions",
          button {
            class: "button",
            disabled: processing(),
            onclick: move |_| show.set(false),
            "{t.pay_cancel}"
          }
          button {
            class: "button button-primary",
            disabled: processing(),
            onclick: confirm,
            if processing() { "{t.pay_processing}" } else { "{t.pay_confirm}" }
          }
        }
      }
    }
  }
}
