#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::{i18n, locale::use_lang, server};

#[derive(Debug, Clone, PartialEq)]
struct ChatMsg {
  from_ai: bool,
  text: String,
}

/// Floating assistant widget. Replies come from the chat endpoint; any
/// failure falls back to a canned assistant line.
#[component]
pub fn AIChat(open: Signal<bool>) -> Element {
  let lang = use_lang();
  let t = i18n::t(lang());
  let mut messages = use_signal(|| {
    vec![ChatMsg { from_ai: true, text: i18n::t(*lang.peek()).chat_greeting.to_string() }]
  });
  let mut input = use_signal(String::new);

  if !open() {
    return rsx! {};
  }

  let mut send = move || {
    let text = input().trim().to_string();
    if text.is_empty() {
      return;
    }
    messages.write().push(ChatMsg { from_ai: false, text: text.clone() });
    input.set(String::new());
    spawn(async move {
      let fallback = i18n::t(*lang.peek()).chat_fallback.to_string();
      let reply = match server::send_chat(&server::ChatRequest { message: text }).await {
        Ok(response) => response.reply.filter(|r| !r.is_empty()).unwrap_or(fallback),
        Err(_) => fallback,
      };
      messages.write().push(ChatMsg { from_ai: true, text: reply });
    });
  };

  rsx! {
    div {
      class: "chat-box",
      div {
        class: "chat-header",
        span { class: "chat-title", "{t.chat_title}" }
        button {
          class: "chat-close",
          onclick: move |_| open.set(false),
          "×"
        }
      }
      div {
        class: "chat-messages",
        for (idx, msg) in messages.read().iter().enumerate() {
          div {
            key: "chat-msg-{idx}",
            class: if msg.from_ai { "chat-msg chat-msg-ai" } else { "chat-msg chat-msg-user" },
            "{msg.text}"
          }
        }
      }
      div {
        class: "chat-input-row",
        input {
          class: "chat-input",
          r#type: "text",
          placeholder: "{t.chat_placeholder}",
          value: "{input}",
          oninput: move |evt| input.set(evt.value()),
          onkeydown: move |evt| {
            if evt.key() == Key::Enter {
              send();
            }
          }
        }
        button {
          class: "chat-send",
          onclick: move |_| send(),
          "➤"
        }
      }
    }
  }
}
