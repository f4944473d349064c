use egui::{Color32, Margin, RichText, Sense, Stroke, Vec2};

use crate::services::calendar_grid::{CalendarCell, CalendarGrid, DAY_NAMES};

const CELL_HEIGHT: f32 = 56.0;
const HEADER_HEIGHT: f32 = 26.0;

/// Action returned from the month view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthViewAction {
    None,
    PreviousMonth,
    NextMonth,
    Today,
}

/// Colors for grid cells, derived from the active egui visuals
#[derive(Clone, Copy)]
struct CellPalette {
    regular_bg: Color32,
    outside_bg: Color32,
    today_bg: Color32,
    border: Color32,
    today_border: Color32,
    text: Color32,
    faded_text: Color32,
    badge_bg: Color32,
}

impl CellPalette {
    fn from_visuals(visuals: &egui::Visuals) -> Self {
        let accent = visuals.selection.bg_fill;
        Self {
            regular_bg: visuals.extreme_bg_color,
            outside_bg: visuals.faint_bg_color,
            today_bg: accent.gamma_multiply(0.35),
            border: visuals.widgets.noninteractive.bg_stroke.color,
            today_border: accent,
            text: visuals.text_color(),
            faded_text: visuals.weak_text_color(),
            badge_bg: accent,
        }
    }
}

pub struct MonthView;

impl MonthView {
    /// Render the month header with navigation and the 6x7 grid
    pub fn show(ui: &mut egui::Ui, grid: &CalendarGrid) -> MonthViewAction {
        let mut action = MonthViewAction::None;

        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous month").clicked() {
                action = MonthViewAction::PreviousMonth;
            }
            ui.label(RichText::new(grid.title()).heading().strong());
            if ui.button("▶").on_hover_text("Next month").clicked() {
                action = MonthViewAction::NextMonth;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Today").clicked() {
                    action = MonthViewAction::Today;
                }
            });
        });

        ui.add_space(6.0);

        let palette = CellPalette::from_visuals(ui.visuals());
        let spacing = 2.0;
        let col_width = ((ui.available_width() - spacing * 6.0) / 7.0).max(24.0);

        egui::Grid::new("month_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for day in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            ui.label(RichText::new(day).size(13.0).strong());
                        },
                    );
                }
                ui.end_row();

                for week in grid.weeks() {
                    for cell in week {
                        Self::render_day_cell(ui, cell, palette, col_width);
                    }
                    ui.end_row();
                }
            });

        action
    }

    fn render_day_cell(ui: &mut egui::Ui, cell: &CalendarCell, palette: CellPalette, width: f32) {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, CELL_HEIGHT), Sense::hover());

        let bg = if cell.is_today {
            palette.today_bg
        } else if cell.in_current_month {
            palette.regular_bg
        } else {
            palette.outside_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg);

        let border = if cell.is_today {
            Stroke::new(2.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        let text_color = if cell.in_current_month {
            palette.text
        } else {
            palette.faded_text
        };
        ui.painter().text(
            rect.left_top() + Vec2::new(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            cell.date.format("%-d").to_string(),
            egui::FontId::proportional(13.0),
            text_color,
        );

        if cell.event_count > 0 {
            let badge_center = rect.center() + Vec2::new(0.0, 8.0);
            ui.painter()
                .circle_filled(badge_center, 10.0, palette.badge_bg);
            ui.painter().text(
                badge_center,
                egui::Align2::CENTER_CENTER,
                cell.event_count.to_string(),
                egui::FontId::proportional(11.0),
                Color32::WHITE,
            );

            let noun = if cell.event_count == 1 { "event" } else { "events" };
            response.on_hover_ui(|ui| {
                egui::Frame::none()
                    .inner_margin(Margin::same(2.0))
                    .show(ui, |ui| {
                        ui.label(format!(
                            "{} {} on {}",
                            cell.event_count,
                            noun,
                            cell.date.format("%B %-d, %Y")
                        ));
                    });
            });
        }
    }
}
