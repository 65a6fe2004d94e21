pub mod auth;
pub mod db;
pub mod encoder;
pub mod utils;
