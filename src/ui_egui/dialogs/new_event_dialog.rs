//! Dialog for announcing a new event.

use chrono::{Duration, NaiveDate, NaiveTime};
use egui::{Color32, RichText};

use crate::services::api::NewEvent;
use crate::utils::date::today;

const FORM_LABEL_WIDTH: f32 = 100.0;

/// Form contents kept while the dialog is open
#[derive(Debug, Clone)]
pub struct NewEventDialogState {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub description: String,
    pub address: String,
    pub error_message: Option<String>,
}

impl Default for NewEventDialogState {
    fn default() -> Self {
        let tomorrow = today() + Duration::days(1);
        Self {
            title: String::new(),
            date: tomorrow.format("%Y-%m-%d").to_string(),
            time: "18:00".to_string(),
            description: String::new(),
            address: String::new(),
            error_message: None,
        }
    }
}

impl NewEventDialogState {
    /// Build the request payload. The date is sent as a zone-less local
    /// date-time, the same shape a browser date-time input produces.
    pub fn to_new_event(&self) -> Result<NewEvent, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| format!("'{}' is not a date (use YYYY-MM-DD)", self.date.trim()))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| format!("'{}' is not a time (use HH:MM)", self.time.trim()))?;

        let address = self.address.trim();
        let event = NewEvent {
            title: self.title.trim().to_string(),
            date: date.and_time(time).format("%Y-%m-%dT%H:%M").to_string(),
            description: self.description.trim().to_string(),
            address: (!address.is_empty()).then(|| address.to_string()),
        };
        event.validate().map_err(|err| err.to_string())?;
        Ok(event)
    }
}

/// Outcome of one frame of the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEventDialogAction {
    None,
    Submit(NewEvent),
    Cancel,
}

pub fn render_new_event_dialog(
    ctx: &egui::Context,
    state: &mut NewEventDialogState,
) -> NewEventDialogAction {
    let mut action = NewEventDialogAction::None;
    let mut open = true;

    egui::Window::new("New Event")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(460.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(message) = &state.error_message {
                ui.colored_label(Color32::LIGHT_RED, message);
                ui.add_space(6.0);
            }

            egui::Grid::new("new_event_form")
                .num_columns(2)
                .spacing([8.0, 8.0])
                .min_col_width(FORM_LABEL_WIDTH)
                .show(ui, |ui| {
                    ui.label("Title:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.title)
                            .desired_width(300.0)
                            .hint_text("Spring Gala"),
                    );
                    ui.end_row();

                    ui.label("Date:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.date)
                                .desired_width(100.0)
                                .hint_text("YYYY-MM-DD"),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut state.time)
                                .desired_width(60.0)
                                .hint_text("HH:MM"),
                        );
                    });
                    ui.end_row();

                    ui.label("Location:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.address)
                            .desired_width(300.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();

                    ui.label("Description:");
                    ui.add(
                        egui::TextEdit::multiline(&mut state.description)
                            .desired_width(300.0)
                            .desired_rows(4),
                    );
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("Create").strong()).clicked() {
                    match state.to_new_event() {
                        Ok(event) => action = NewEventDialogAction::Submit(event),
                        Err(message) => state.error_message = Some(message),
                    }
                }
                if ui.button("Cancel").clicked() {
                    action = NewEventDialogAction::Cancel;
                }
            });
        });

    if !open {
        action = NewEventDialogAction::Cancel;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NewEventDialogState {
        NewEventDialogState {
            title: " Spring Gala ".to_string(),
            date: "2024-04-20".to_string(),
            time: "19:30".to_string(),
            description: "Dinner and dancing".to_string(),
            address: String::new(),
            error_message: None,
        }
    }

    #[test]
    fn test_to_new_event() {
        let event = filled().to_new_event().unwrap();
        assert_eq!(event.title, "Spring Gala");
        assert_eq!(event.date, "2024-04-20T19:30");
        assert_eq!(event.address, None);
    }

    #[test]
    fn test_address_kept_when_given() {
        let mut state = filled();
        state.address = "12 Main St".to_string();
        assert_eq!(
            state.to_new_event().unwrap().address.as_deref(),
            Some("12 Main St")
        );
    }

    #[test]
    fn test_bad_time_rejected() {
        let mut state = filled();
        state.time = "7pm".to_string();
        assert!(state.to_new_event().unwrap_err().contains("not a time"));
    }

    #[test]
    fn test_missing_description_rejected() {
        let mut state = filled();
        state.description.clear();
        assert!(state
            .to_new_event()
            .unwrap_err()
            .contains("missing required fields: description"));
    }

    #[test]
    fn test_default_is_tomorrow_evening() {
        let state = NewEventDialogState::default();
        let tomorrow = today() + Duration::days(1);
        assert_eq!(state.date, tomorrow.format("%Y-%m-%d").to_string());
        assert_eq!(state.time, "18:00");
    }
}
