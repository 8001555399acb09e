pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod masterclass;
pub mod register;
pub mod superadmin;
