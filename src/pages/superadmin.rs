#![allow(non_snake_case)]

use dioxus::{logger::tracing::{error, warn}, prelude::*};

use crate::utils::{
  i18n,
  locale::use_lang,
  server::{self, PlatformSettings},
};

#[component]
pub fn Superadmin() -> Element {
  static CSS: Asset = asset!("assets/admin.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let mut email = use_signal(String::new);
  let mut saving = use_signal(|| false);
  let mut msg = use_signal(String::new);

  // Seed the form with the stored address; leave the field blank on failure.
  use_future(move || async move {
    match server::fetch_platform_settings().await {
      Ok(settings) => email.set(settings.paypal_email.unwrap_or_default()),
      Err(e) => warn!("platform settings unavailable: {}", e),
    }
  });

  let save = move |_| {
    spawn(async move {
      saving.set(true);
      msg.set(String::new());
      let payload = PlatformSettings { paypal_email: Some(email.peek().clone()) };
      match server::save_platform_settings(&payload).await {
        Ok(()) => msg.set(i18n::t(*lang.peek()).superadmin_saved.to_string()),
        Err(e) => {
          error!("platform settings save failed: {}", e);
          msg.set(i18n::t(*lang.peek()).superadmin_error.to_string());
        }
      }
      saving.set(false);
    });
  };

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "admin-page",
      h1 { "{t.superadmin_title}" }
      div {
        class: "settings-card",
        div {
          class: "form-group",
          label { class: "form-label", "{t.superadmin_email_label}" }
          input {
            class: "form-input",
            r#type: "email",
            placeholder: "paypal@exemple.com",
            value: "{email}",
            oninput: move |evt| email.set(evt.value()),
          }
        }
        button {
          class: "button button-primary",
          disabled: saving(),
          onclick: save,
          if saving() { "{t.superadmin_saving}" } else { "{t.superadmin_save}" }
        }
        if !msg().is_empty() {
          div { class: "banner banner-success", "{msg}" }
        }
      }
    }
  }
}
