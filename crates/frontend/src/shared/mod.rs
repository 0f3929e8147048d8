pub mod api;
pub mod api_utils;
pub mod config;
pub mod file_reader;
pub mod icons;
pub mod notice;
pub mod page_frame;
pub mod page_standard;
