pub mod i18n;
pub mod locale;
pub mod server;
pub mod session;
pub mod storage;
