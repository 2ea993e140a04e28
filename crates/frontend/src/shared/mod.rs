pub mod components;
pub mod config;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod print;
pub mod url_state;
