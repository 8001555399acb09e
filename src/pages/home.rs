#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::{chat::AIChat, paydialog::{plan_price, PayDialog}};
use crate::utils::{i18n, locale::use_lang, session::SessionStore};
use crate::Route;

const PLANS: [&str; 3] = ["starter", "pro", "enterprise"];

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let nav = use_navigator();
  let mut chat_open = use_signal(|| false);
  let mut show_pay = use_signal(|| false);
  let mut plan_type = use_signal(|| "starter".to_string());

  // Buying requires an account; signed-out visitors are sent to sign up.
  let mut start_challenge = move |plan: &str| {
    if !SessionStore::browser().is_authenticated() {
      nav.push(Route::Register { msg: t.pay_login_required.to_string() });
      return;
    }
    plan_type.set(plan.to_string());
    show_pay.set(true);
  };

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "home-page",
      section {
        class: "hero",
        h1 { "{t.home_title}" }
        p { "{t.home_subtitle}" }
        button {
          class: "button button-primary button-large",
          onclick: move |_| start_challenge("starter"),
          "{t.home_start}"
        }
      }
      section {
        class: "reassurance",
        h2 { "{t.reassurance_title}" }
        div {
          class: "feature-grid",
          div {
            class: "feature-card",
            h3 {
              class: "feature-card-title",
              span { "🛡️" }
              "{t.reassurance_secure_title}"
            }
            p { "{t.reassurance_secure_desc}" }
          }
          div {
            class: "feature-card",
            h3 {
              class: "feature-card-title",
              span { "⚡" }
              "{t.reassurance_fast_title}"
            }
            p { "{t.reassurance_fast_desc}" }
          }
          div {
            class: "feature-card",
            h3 {
              class: "feature-card-title",
              span { "💳" }
              "{t.reassurance_payment_title}"
            }
            p { "{t.reassurance_payment_desc}" }
          }
        }
      }
      section {
        id: "services",
        class: "plans",
        h2 { "{t.plans_title}" }
        div {
          class: "plan-grid",
          for plan in PLANS {
            div {
              key: "plan-{plan}",
              class: "plan-card",
              h3 { class: "plan-name", "{plan}" }
              div { class: "plan-price", "{plan_price(plan)}" }
              button {
                class: "button button-primary",
                onclick: move |_| start_challenge(plan),
                "{t.plan_buy}"
              }
            }
          }
        }
      }
      button {
        class: "chat-toggle",
        onclick: move |_| chat_open.set(!chat_open()),
        "💬"
      }
      AIChat { open: chat_open }
      PayDialog { show: show_pay, plan_type }
    }
  }
}
