//! Background API requests.
//!
//! Each request runs on its own short-lived thread with a clone of the
//! blocking client and reports back over a channel that the app drains once
//! per frame. Requests are never cancelled or deduplicated.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::models::event::Event;
use crate::services::api::{ApiClient, ApiError, NewEvent};

/// Result of a finished background request
#[derive(Debug)]
pub enum LoaderMessage {
    Listed(Result<Vec<Event>, ApiError>),
    Deleted {
        event_id: String,
        event_title: String,
        result: Result<(), ApiError>,
    },
    Created {
        title: String,
        result: Result<String, ApiError>,
    },
}

pub struct Loader {
    api: ApiClient,
    tx: Sender<LoaderMessage>,
    rx: Receiver<LoaderMessage>,
}

impl Loader {
    pub fn new(api: ApiClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    pub fn request_list(&self) {
        log::debug!("Requesting event list");
        self.spawn(|api| LoaderMessage::Listed(api.list_events()));
    }

    pub fn request_delete(&self, event_id: String, event_title: String) {
        log::debug!("Requesting delete of event {}", event_id);
        self.spawn(move |api| {
            let result = api.delete_event(&event_id);
            LoaderMessage::Deleted {
                event_id,
                event_title,
                result,
            }
        });
    }

    pub fn request_create(&self, event: NewEvent) {
        log::debug!("Requesting creation of '{}'", event.title);
        self.spawn(move |api| {
            let result = api.create_event(&event);
            LoaderMessage::Created {
                title: event.title,
                result,
            }
        });
    }

    /// Drain every message that has arrived since the last frame
    pub fn drain(&self) -> Vec<LoaderMessage> {
        let mut messages = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(message) => messages.push(message),
                Err(TryRecvError::Empty) => break,
                // The loader keeps its own sender alive, so this cannot happen
                Err(TryRecvError::Disconnected) => break,
            }
        }
        messages
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(&ApiClient) -> LoaderMessage + Send + 'static,
    {
        let api = self.api.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let message = job(&api);
            if tx.send(message).is_err() {
                log::warn!("Request finished after the app closed; result dropped");
            }
        });
    }
}
