pub mod app_events;
pub mod backend;
pub mod demo;
pub mod identity;
pub mod notification;
pub mod page;
pub mod peer;
pub mod settings;
pub mod upload;
pub mod ui_events;
