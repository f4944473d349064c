use super::EventBoardApp;
use crate::models::view::{DateFilter, SortKey};
use crate::ui_egui::dialogs::NewEventDialogState;
use egui::RichText;

impl EventBoardApp {
    /// Search box, date filter, sort order and the refresh/create buttons
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Event Board").heading().strong());
                ui.add_space(16.0);

                ui.add(
                    egui::TextEdit::singleline(&mut self.state.params.search_term)
                        .desired_width(220.0)
                        .hint_text("Search title, description, location..."),
                );
                if !self.state.params.search_term.is_empty() && ui.button("Clear").clicked() {
                    self.state.params.search_term.clear();
                }

                ui.separator();

                for filter in DateFilter::ALL {
                    ui.selectable_value(&mut self.state.params.date_filter, filter, filter.label());
                }

                ui.separator();

                egui::ComboBox::from_id_source("sort_key")
                    .selected_text(self.state.params.sort_key.label())
                    .show_ui(ui, |ui| {
                        for key in SortKey::ALL {
                            ui.selectable_value(&mut self.state.params.sort_key, key, key.label());
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("➕ New Event").clicked() && self.new_event_dialog.is_none() {
                        self.new_event_dialog = Some(NewEventDialogState::default());
                    }
                    if ui.button("⟳ Refresh").clicked() {
                        self.toast_manager.info("Refreshing events...");
                        self.request_list();
                    }
                    if self.state.is_busy() {
                        ui.spinner();
                    }
                });
            });
            ui.add_space(6.0);
        });
    }
}
