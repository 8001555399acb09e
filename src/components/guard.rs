#![allow(non_snake_case)]

use dioxus::{logger::tracing::warn, prelude::*};

use crate::utils::session::{Role, SessionStore};
use crate::Route;

/// Renders its children only when a session exists, otherwise replaces the
/// navigation with the login page. The session is re-read on every render;
/// a login or logout shows up at the next navigation, not mid-render.
#[component]
pub fn RequireAuth(children: Element) -> Element {
  if !SessionStore::browser().is_authenticated() {
    warn!("unauthenticated access to a protected page, redirecting to login");
    navigator().replace(Route::Login {});
    return rsx! {};
  }
  rsx! { {children} }
}

/// Role-gated variant. Callers must pass the allowed roles explicitly;
/// denied sessions are sent back to the landing page.
#[component]
pub fn RequireRole(roles: Vec<Role>, children: Element) -> Element {
  if !SessionStore::browser().has_role(&roles) {
    warn!("session lacks a required role, redirecting home");
    navigator().replace(Route::Home {});
    return rsx! {};
  }
  rsx! { {children} }
}
