pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod disposal;
pub mod entity;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod pagination;
