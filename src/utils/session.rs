use serde::{Deserialize, Serialize};

use super::storage::{BrowserStorage, StorageBackend};

const AUTH_KEY: &str = "auth";
const USER_ID_KEY: &str = "user_id";
const ROLE_KEY: &str = "role";
const USERNAME_KEY: &str = "username";
const CHALLENGE_ID_KEY: &str = "challengeId";

/// Account roles recognized by the client. Anything else never matches an
/// allowed set, so unknown values deny access instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  User,
  Admin,
  Superadmin,
}

impl Role {
  pub fn parse(value: &str) -> Option<Role> {
    match value.to_lowercase().as_str() {
      "user" => Some(Role::User),
      "admin" => Some(Role::Admin),
      "superadmin" => Some(Role::Superadmin),
      _ => None,
    }
  }
}

/// Snapshot of the persisted identity. Both fields are empty strings when no
/// session has ever been stored; an empty `user_id` means unauthenticated
/// regardless of any stale role value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
  pub user_id: String,
  pub role: String,
}

/// The atomic record written on login. Mirrored into flat `user_id`/`role`
/// entries so guards only need single-key reads.
#[derive(Debug, Serialize, Deserialize)]
struct AuthRecord {
  user_id: String,
  role: String,
  logged_in: bool,
}

/// Single source of truth for "is a user logged in, and with what role".
/// All mutations persist synchronously; absence of a session is a normal
/// state, never an error.
pub struct SessionStore<S: StorageBackend> {
  backend: S,
}

impl SessionStore<BrowserStorage> {
  pub fn browser() -> Self {
    Self::new(BrowserStorage)
  }
}

impl<S: StorageBackend> SessionStore<S> {
  pub fn new(backend: S) -> Self {
    Self { backend }
  }

  /// Stores the session record and its flat mirrors, replacing any previous
  /// session. A login response without a user id is not a session; empty ids
  /// are ignored.
  pub fn set_session(&self, user_id: &str, role: &str) {
    if user_id.is_empty() {
      return;
    }
    let role = role.to_lowercase();
    let record = AuthRecord {
      user_id: user_id.to_string(),
      role: role.clone(),
      logged_in: true,
    };
    if let Ok(json) = serde_json::to_string(&record) {
      self.backend.set(AUTH_KEY, &json);
    }
    self.backend.set(USER_ID_KEY, user_id);
    self.backend.set(ROLE_KEY, &role);
  }

  pub fn get_session(&self) -> Session {
    Session {
      user_id: self.backend.get(USER_ID_KEY).unwrap_or_default(),
      role: self.backend.get(ROLE_KEY).unwrap_or_default(),
    }
  }

  /// Removes every session-related entry. Safe to call repeatedly.
  pub fn clear_session(&self) {
    self.backend.remove(AUTH_KEY);
    self.backend.remove(USER_ID_KEY);
    self.backend.remove(ROLE_KEY);
    self.backend.remove(USERNAME_KEY);
  }

  pub fn is_authenticated(&self) -> bool {
    !self.get_session().user_id.is_empty()
  }

  /// True iff authenticated and the stored role, lower-cased, is one of
  /// `allowed`.
  pub fn has_role(&self, allowed: &[Role]) -> bool {
    let session = self.get_session();
    if session.user_id.is_empty() {
      return false;
    }
    match Role::parse(&session.role) {
      Some(role) => allowed.contains(&role),
      None => false,
    }
  }

  pub fn username(&self) -> String {
    self.backend.get(USERNAME_KEY).unwrap_or_default()
  }

  pub fn set_username(&self, name: &str) {
    if !name.is_empty() {
      self.backend.set(USERNAME_KEY, name);
    }
  }

  /// Active challenge id, defaulting to 1 until a purchase stores one.
  pub fn challenge_id(&self) -> i64 {
    self
      .backend
      .get(CHALLENGE_ID_KEY)
      .and_then(|v| v.parse::<i64>().ok())
      .unwrap_or(1)
  }

  pub fn set_challenge_id(&self, id: i64) {
    self.backend.set(CHALLENGE_ID_KEY, &id.to_string());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::storage::MemoryStorage;

  fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
  }

  #[test]
  fn empty_store_yields_empty_session() {
    let store = store();
    assert_eq!(store.get_session(), Session::default());
    assert!(!store.is_authenticated());
  }

  #[test]
  fn set_session_lowercases_role_and_mirrors_fields() {
    let store = store();
    store.set_session("7", "Admin");
    let session = store.get_session();
    assert_eq!(session.user_id, "7");
    assert_eq!(session.role, "admin");
    assert!(store.is_authenticated());
  }

  #[test]
  fn set_session_writes_the_atomic_record() {
    let backend = MemoryStorage::new();
    backend.set("auth", "stale");
    let store = SessionStore::new(backend);
    store.set_session("42", "user");
    let raw = store.backend.get("auth").unwrap();
    let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(record["user_id"], "42");
    assert_eq!(record["role"], "user");
    assert_eq!(record["logged_in"], true);
  }

  #[test]
  fn empty_user_id_is_rejected() {
    let store = store();
    store.set_session("", "admin");
    assert!(!store.is_authenticated());
    assert_eq!(store.get_session(), Session::default());
  }

  #[test]
  fn clear_session_removes_everything_and_is_idempotent() {
    let store = store();
    store.set_session("7", "admin");
    store.set_username("Alice");
    store.clear_session();
    store.clear_session();
    assert_eq!(store.get_session(), Session::default());
    assert_eq!(store.username(), "");
  }

  #[test]
  fn has_role_checks_membership_case_insensitively() {
    let allowed = [Role::Admin, Role::Superadmin];
    let store = store();

    store.set_session("7", "Admin");
    assert!(store.has_role(&allowed));

    store.set_session("7", "SUPERADMIN");
    assert!(store.has_role(&allowed));

    store.set_session("7", "user");
    assert!(!store.has_role(&allowed));
  }

  #[test]
  fn unknown_roles_never_match() {
    let store = store();
    store.set_session("7", "root");
    assert!(!store.has_role(&[Role::Admin, Role::Superadmin]));
    assert!(!store.has_role(&[Role::User]));
  }

  #[test]
  fn has_role_requires_a_user_id() {
    let backend = MemoryStorage::new();
    // Stale role without an id must not grant anything.
    backend.set("role", "admin");
    let store = SessionStore::new(backend);
    assert!(!store.has_role(&[Role::Admin]));
  }

  #[test]
  fn challenge_id_defaults_to_one() {
    let store = store();
    assert_eq!(store.challenge_id(), 1);
    store.set_challenge_id(12);
    assert_eq!(store.challenge_id(), 12);
  }

  #[test]
  fn malformed_challenge_id_falls_back_to_default() {
    let backend = MemoryStorage::new();
    backend.set("challengeId", "not-a-number");
    let store = SessionStore::new(backend);
    assert_eq!(store.challenge_id(), 1);
  }
}
