pub mod catalog_check;
pub mod config;
pub mod request_log;
