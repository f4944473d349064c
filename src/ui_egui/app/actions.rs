use super::confirm::ConfirmAction;
use super::loader::LoaderMessage;
use super::EventBoardApp;
use crate::services::calendar_export::ics_file_name;
use crate::services::calendar_grid::MonthCursor;
use crate::ui_egui::views::{CardAction, MonthViewAction};

impl EventBoardApp {
    /// Apply every finished background request
    pub(super) fn poll_loader(&mut self) {
        let Some(loader) = &self.loader else {
            return;
        };

        for message in loader.drain() {
            match message {
                LoaderMessage::Listed(result) => {
                    if let Some(error) = self.state.list_finished(&mut self.store, result) {
                        log::error!("Failed to load events: {}", error);
                    }
                }
                LoaderMessage::Deleted {
                    event_id,
                    event_title,
                    result,
                } => {
                    self.state.delete_finished(&event_id);
                    match result {
                        Ok(()) => {
                            if !self.store.remove(&event_id) {
                                log::warn!("Deleted event {} was no longer in the store", event_id);
                            }
                            self.toast_manager
                                .success(format!("Deleted \"{}\"", event_title));
                        }
                        Err(err) => {
                            log::error!("Failed to delete event {}: {}", event_id, err);
                            self.toast_manager
                                .error(format!("Failed to delete event: {}", err.user_message()));
                        }
                    }
                }
                LoaderMessage::Created { title, result } => {
                    self.state.create_finished();
                    match result {
                        Ok(id) => {
                            log::info!("Event '{}' created with id {}", title, id);
                            self.toast_manager.success(format!("Created \"{}\"", title));
                            self.request_list();
                        }
                        Err(err) => {
                            log::error!("Failed to create event '{}': {}", title, err);
                            self.toast_manager
                                .error(format!("Failed to create event: {}", err.user_message()));
                        }
                    }
                }
            }
        }
    }

    pub(super) fn handle_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Delete { event_id } => {
                let Some(event) = self.store.find_by_id(&event_id) else {
                    return;
                };
                self.confirm_dialog.request(ConfirmAction::DeleteEvent {
                    event_title: event.title.clone(),
                    event_id,
                });
            }
            CardAction::GoogleCalendar { event_id } => {
                let Some(event) = self.store.find_by_id(&event_id) else {
                    return;
                };
                if let Err(err) = self.export.open_in_google_calendar(event) {
                    log::error!("Failed to open Google Calendar: {:#}", err);
                    self.toast_manager
                        .error(format!("Failed to open Google Calendar: {}", err));
                }
            }
            CardAction::OpenMap { event_id } => {
                let Some(event) = self.store.find_by_id(&event_id) else {
                    return;
                };
                if let Err(err) = self.export.open_map(event) {
                    log::error!("Failed to open map: {:#}", err);
                    self.toast_manager.error(format!("Failed to open map: {}", err));
                }
            }
            CardAction::ExportIcs { event_id } => {
                let Some(event) = self.store.find_by_id(&event_id) else {
                    return;
                };
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(ics_file_name(event))
                    .add_filter("iCalendar", &["ics"])
                    .save_file()
                {
                    match self.export.export_to_file(event, &path) {
                        Ok(()) => self
                            .toast_manager
                            .success(format!("Saved \"{}\" to {}", event.title, path.display())),
                        Err(err) => {
                            log::error!("Failed to export event: {:#}", err);
                            self.toast_manager.error(format!("Failed to export: {}", err));
                        }
                    }
                }
            }
        }
    }

    /// Month navigation only moves the cursor; the store is untouched
    pub(super) fn handle_month_action(&mut self, action: MonthViewAction) {
        match action {
            MonthViewAction::None => {}
            MonthViewAction::PreviousMonth => self.state.month.change_month(-1),
            MonthViewAction::NextMonth => self.state.month.change_month(1),
            MonthViewAction::Today => self.state.month = MonthCursor::current(),
        }
    }
}
