//! Loading of the TOML configuration file.

mod service;

pub use service::{ConfigService, API_URL_ENV, CONFIG_PATH_ENV};
