// Service module exports

pub mod api;
pub mod calendar_export;
pub mod calendar_grid;
pub mod refresh;
pub mod session;
pub mod settings;
pub mod store;
pub mod view_filter;
