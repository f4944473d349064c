use super::{google_calendar_link, map_link, to_ics};
use crate::models::event::Event;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Hands events to the desktop: the browser for links, the disk for .ics
pub struct CalendarExportService;

impl CalendarExportService {
    pub fn new() -> Self {
        Self
    }

    /// Open the Google Calendar template link in the default browser
    pub fn open_in_google_calendar(&self, event: &Event) -> Result<()> {
        let link = google_calendar_link(event)?;
        webbrowser::open(&link).context("Failed to open browser for Google Calendar")?;
        log::info!("Opened Google Calendar link for event {}", event.id);
        Ok(())
    }

    /// Open the event's address in Google Maps
    pub fn open_map(&self, event: &Event) -> Result<()> {
        let link = map_link(event).ok_or_else(|| anyhow!("Event has no address"))?;
        webbrowser::open(&link).context("Failed to open browser for Google Maps")?;
        log::info!("Opened map for event {}", event.id);
        Ok(())
    }

    /// Write the event's .ics payload to `path`
    pub fn export_to_file(&self, event: &Event, path: &Path) -> Result<()> {
        let content = to_ics(event)?;
        fs::write(path, content).context(format!("Failed to write .ics file: {:?}", path))?;
        log::info!("Exported event {} to {:?}", event.id, path);
        Ok(())
    }
}

impl Default for CalendarExportService {
    fn default() -> Self {
        Self::new()
    }
}
