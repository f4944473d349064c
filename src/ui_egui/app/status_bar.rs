//! Status bar showing how many events are visible and when the list was last refreshed.

use super::EventBoardApp;
use crate::models::view::FetchStatus;
use crate::services::view_filter;
use egui::{Color32, RichText};
use std::time::Instant;

/// Space between status bar sections
const SEPARATOR_WIDTH: f32 = 8.0;

fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

/// "4m 10s" style countdown
fn format_wait(secs: u64) -> String {
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

impl EventBoardApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let secondary = secondary_text_color(ctx.style().visuals.dark_mode);
        let visible = view_filter::derive(self.store.all(), &self.state.params).len();

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{} of {} events", visible, self.store.len()))
                            .small(),
                    );
                    ui.add_space(SEPARATOR_WIDTH);

                    let status = match &self.state.fetch_status {
                        FetchStatus::Pending => "Loading...".to_string(),
                        FetchStatus::Failed(_) => "Last refresh failed".to_string(),
                        FetchStatus::Loaded => match self.state.last_refreshed {
                            Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
                            None => "Loaded".to_string(),
                        },
                    };
                    ui.label(RichText::new(status).small().color(secondary));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let wait = self.refresh.time_until_due(Instant::now()).as_secs();
                        let every = self.refresh.interval().as_secs();
                        ui.label(
                            RichText::new(format!("Next refresh in {}", format_wait(wait)))
                                .small()
                                .color(secondary),
                        )
                        .on_hover_text(format!("Events reload every {}", format_wait(every)));
                        ui.add_space(SEPARATOR_WIDTH);
                        ui.label(
                            RichText::new(&self.config.api_base_url)
                                .small()
                                .color(secondary),
                        );
                    });
                });
            });
    }
}
