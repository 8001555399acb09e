pub mod chat;
pub mod guard;
pub mod navbar;
pub mod paydialog;
