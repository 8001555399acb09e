#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{i18n, locale::use_lang};
use crate::Route;

const MODULE_TITLES: [&str; 20] = [
  "Module 1 : Introduction",
  "Module 2 : Analyse",
  "Module 3 : Gestion du Risque",
  "Module 4 : Tendances",
  "Module 5 : Supports & Résistances",
  "Module 6 : Figures Chartistes",
  "Module 7 : Indicateurs de Momentum",
  "Module 8 : Stratégies de Breakout",
  "Module 9 : Stratégies de Rebond",
  "Module 10 : Volatilité",
  "Module 11 : Psychologie",
  "Module 12 : Money Management",
  "Module 13 : Backtesting",
  "Module 14 : Journaling",
  "Module 15 : Optimisation",
  "Module 16 : Scalping",
  "Module 17 : Day Trading",
  "Module 18 : Swing Trading",
  "Module 19 : Analyse Multi-timeframes",
  "Module 20 : Plan de Trading",
];

const VIDEO_ID: &str = "95Z_z9nS-O8";

#[component]
pub fn Masterclass() -> Element {
  static CSS: Asset = asset!("assets/master.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let nav = use_navigator();
  let mut current = use_signal(|| 0usize);

  let current_title = MODULE_TITLES[current()];

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "master-page",
      div {
        class: "master-header",
        h1 { "{current_title}" }
        button {
          class: "button button-primary",
          onclick: move |_| { nav.push(Route::Dashboard {}); },
          "{t.back_to_dashboard}"
        }
      }
      div {
        class: "master-grid",
        div {
          class: "video-panel",
          iframe {
            class: "video-frame",
            src: "https://www.youtube.com/embed/{VIDEO_ID}",
            title: "{current_title}",
            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
            allowfullscreen: true,
          }
        }
        div {
          class: "module-list",
          for (idx, title) in MODULE_TITLES.iter().enumerate() {
            button {
              key: "module-{idx}",
              class: if idx == current() { "module-item module-active" } else { "module-item" },
              onclick: move |_| current.set(idx),
              "{title}"
            }
          }
        }
      }
    }
  }
}
