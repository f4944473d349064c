//! Short-lived feedback messages for finished requests.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const TOAST_DURATION: Duration = Duration::from_secs(4);
const FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Error => "✗",
        }
    }

    fn colors(&self, dark: bool) -> (Color32, Color32) {
        match (self, dark) {
            (ToastLevel::Success, true) => {
                (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120))
            }
            (ToastLevel::Info, true) => {
                (Color32::from_rgb(30, 50, 80), Color32::from_rgb(100, 180, 255))
            }
            (ToastLevel::Error, true) => {
                (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120))
            }
            (ToastLevel::Success, false) => {
                (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50))
            }
            (ToastLevel::Info, false) => {
                (Color32::from_rgb(220, 235, 255), Color32::from_rgb(30, 80, 150))
            }
            (ToastLevel::Error, false) => {
                (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    /// 1.0 until the last half second, then fading to 0.0
    pub fn opacity(&self) -> f32 {
        let remaining = TOAST_DURATION.saturating_sub(self.created_at.elapsed());
        (remaining.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Error));
    }

    /// Render active toasts stacked upward from the bottom-right corner
    pub fn render(&mut self, ctx: &Context) {
        self.toasts.retain(|toast| !toast.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        ctx.request_repaint();

        let dark = ctx.style().visuals.dark_mode;
        let screen_rect = ctx.screen_rect();
        let toast_width = 320.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset - 30.0, // Above status bar
            );

            let (bg, fg) = toast.level.colors(dark);
            let bg = bg.gamma_multiply(0.9 * opacity);
            let fg = fg.gamma_multiply(opacity);

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}
