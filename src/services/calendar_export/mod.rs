//! Sharing a single event: Google Calendar links, RFC 5545 (.ics) files and
//! map links for its address.

mod google;
mod ics;
mod maps;
mod service;
mod utils;

pub use google::google_calendar_link;
pub use ics::{ics_file_name, to_ics, to_ics_at};
pub use maps::map_link;
pub use service::CalendarExportService;
