//! Confirmation dialog for deleting events.
//!
//! Deletion is confirm-then-fire: nothing is sent to the API until the user
//! accepts the dialog.

use egui::{Context, RichText};

use super::EventBoardApp;

/// Action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteEvent { event_id: String, event_title: String },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { event_title, .. } => {
                format!(
                    "Are you sure you want to delete \"{}\"?\n\nThis action cannot be undone.",
                    event_title
                )
            }
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open, or nothing is pending
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Render the dialog. On confirmation the action is handed back to the caller.
    pub fn render(&mut self, ctx: &Context) -> (ConfirmResult, Option<ConfirmAction>) {
        let Some(action) = &self.pending_action else {
            return (ConfirmResult::Pending, None);
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_button = egui::Button::new(
                        RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 60, 60));

                    if ui.add(confirm_button).clicked() {
                        result = ConfirmResult::Confirmed;
                    }

                    ui.add_space(10.0);

                    if ui.button("Cancel").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });

                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        match result {
            ConfirmResult::Pending => (result, None),
            _ => (result, self.pending_action.take()),
        }
    }
}

impl EventBoardApp {
    /// Render the confirmation dialog and fire confirmed actions
    pub(super) fn handle_confirm_dialog(&mut self, ctx: &Context) {
        let (result, action) = self.confirm_dialog.render(ctx);

        match (result, action) {
            (ConfirmResult::Confirmed, Some(action)) => self.execute_confirmed_action(action),
            (ConfirmResult::Cancelled, Some(action)) => {
                log::debug!("User cancelled '{}'", action.title());
            }
            _ => {}
        }
    }

    fn execute_confirmed_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteEvent {
                event_id,
                event_title,
            } => {
                let Some(loader) = &self.loader else {
                    return;
                };
                log::info!("Deleting event: {} (ID: {})", event_title, event_id);
                self.state.delete_started(&event_id);
                loader.request_delete(event_id, event_title);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message_names_event() {
        let action = ConfirmAction::DeleteEvent {
            event_id: "a1".to_string(),
            event_title: "Spring Gala".to_string(),
        };
        assert_eq!(action.title(), "Delete Event");
        assert!(action.message().contains("\"Spring Gala\""));
        assert_eq!(action.confirm_text(), "Delete");
    }

    #[test]
    fn test_request_opens_dialog() {
        let mut dialog = ConfirmDialogState::new();
        assert!(!dialog.is_open());

        dialog.request(ConfirmAction::DeleteEvent {
            event_id: "a1".to_string(),
            event_title: "Gala".to_string(),
        });
        assert!(dialog.is_open());
    }
}
