//! Local sign-in gate.
//!
//! The board only loads once an access token has been stored locally by the
//! sign-in flow. The token is checked for presence only and is never sent to
//! the events API.

use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Token supplied directly through the environment
pub const ACCESS_TOKEN_ENV: &str = "EVENT_BOARD_ACCESS_TOKEN";

const TOKEN_FILE_NAME: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    SignedIn,
    SignInRequired { token_path: PathBuf },
}

pub struct SessionGate {
    token_path: PathBuf,
}

impl SessionGate {
    /// Gate reading the token from `override_path` or the platform data directory
    pub fn new(override_path: Option<&Path>) -> Self {
        let token_path = override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_token_path);
        Self { token_path }
    }

    pub fn check(&self) -> SessionStatus {
        if env::var(ACCESS_TOKEN_ENV).is_ok_and(|token| !token.trim().is_empty()) {
            return SessionStatus::SignedIn;
        }

        match fs::read_to_string(&self.token_path) {
            Ok(token) if !token.trim().is_empty() => SessionStatus::SignedIn,
            Ok(_) => {
                log::warn!("Access token file {:?} is empty", self.token_path);
                self.sign_in_required()
            }
            Err(err) => {
                log::info!("No access token at {:?}: {}", self.token_path, err);
                self.sign_in_required()
            }
        }
    }

    fn sign_in_required(&self) -> SessionStatus {
        SessionStatus::SignInRequired {
            token_path: self.token_path.clone(),
        }
    }

    fn default_token_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "EventBoard", "EventBoard") {
            dirs.data_dir().join(TOKEN_FILE_NAME)
        } else {
            PathBuf::from(TOKEN_FILE_NAME)
        }
    }
}
