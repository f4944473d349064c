//! Event cards for the list panel.

use chrono::Local;
use egui::{Color32, Margin, RichText, Stroke};

use crate::models::event::Event;
use crate::models::view::DisplayState;

/// Button pressed on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Delete { event_id: String },
    GoogleCalendar { event_id: String },
    ExportIcs { event_id: String },
    OpenMap { event_id: String },
}

/// Text shown in place of a date that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Human-readable local date and time, or [`INVALID_DATE`]
pub fn format_event_date(event: &Event) -> String {
    match event.occurs_at {
        Some(at) => at
            .with_timezone(&Local)
            .format("%a, %b %-d, %Y at %-I:%M %p")
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

pub struct EventCards;

impl EventCards {
    /// Render the derived list, or the loading/empty/error placeholder.
    ///
    /// `is_deleting` greys out the delete button while a request is in flight.
    pub fn show(
        ui: &mut egui::Ui,
        display: &DisplayState,
        events: &[&Event],
        is_deleting: impl Fn(&str) -> bool,
    ) -> Option<CardAction> {
        match display {
            DisplayState::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.spinner();
                    ui.label("Loading events...");
                });
                None
            }
            DisplayState::Error(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.colored_label(Color32::LIGHT_RED, "Failed to load events");
                    ui.label(RichText::new(message).small());
                });
                None
            }
            DisplayState::Empty => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("No events found").heading());
                    ui.label("Try a different search or filter.");
                });
                None
            }
            DisplayState::Loaded => {
                let mut action = None;
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for event in events {
                            if let Some(clicked) =
                                Self::render_card(ui, event, is_deleting(event.id.as_str()))
                            {
                                action = Some(clicked);
                            }
                            ui.add_space(8.0);
                        }
                    });
                action
            }
        }
    }

    fn render_card(ui: &mut egui::Ui, event: &Event, deleting: bool) -> Option<CardAction> {
        let mut action = None;
        let visuals = ui.visuals().clone();
        let has_date = event.occurs_at.is_some();

        let border = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);

        egui::Frame::none()
            .fill(visuals.faint_bg_color)
            .rounding(egui::Rounding::same(6.0))
            .stroke(border)
            .inner_margin(Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(RichText::new(&event.title).heading().strong());

                let date_text = format_event_date(event);
                if has_date {
                    ui.label(RichText::new(format!("📅 {}", date_text)).small());
                } else {
                    ui.label(
                        RichText::new(format!("📅 {}", date_text))
                            .small()
                            .color(Color32::from_rgb(200, 120, 60)),
                    );
                }

                if let Some(address) = event.address() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("📍 {}", address)).small());
                        if ui
                            .small_button("Map")
                            .on_hover_text("Open in Google Maps")
                            .clicked()
                        {
                            action = Some(CardAction::OpenMap {
                                event_id: event.id.clone(),
                            });
                        }
                    });
                }

                if !event.description.trim().is_empty() {
                    ui.add_space(4.0);
                    ui.label(&event.description);
                }

                if let Some(creator) = event.display_creator() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Posted by {}", creator))
                            .small()
                            .italics(),
                    );
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let calendar_buttons = ui.add_enabled_ui(has_date, |ui| {
                        let google = ui.button("Add to Google Calendar");
                        let ics = ui.button("Download .ics");
                        (google.clicked(), ics.clicked())
                    });
                    let (google, ics) = calendar_buttons.inner;
                    if google {
                        action = Some(CardAction::GoogleCalendar {
                            event_id: event.id.clone(),
                        });
                    }
                    if ics {
                        action = Some(CardAction::ExportIcs {
                            event_id: event.id.clone(),
                        });
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if deleting { "Deleting..." } else { "Delete" };
                        let delete = egui::Button::new(
                            RichText::new(label).color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(180, 60, 60));
                        if ui.add_enabled(!deleting, delete).clicked() {
                            action = Some(CardAction::Delete {
                                event_id: event.id.clone(),
                            });
                        }
                    });
                });
            });

        action
    }
}
