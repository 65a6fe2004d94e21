pub mod auth;
pub mod home;
pub mod images;
pub mod projects;
pub mod skills;
pub mod system;
