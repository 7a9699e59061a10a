pub mod api_utils;
pub mod config;
pub mod dom;
pub mod fragment;
pub mod icons;
pub mod notifier;
pub mod number_format;
