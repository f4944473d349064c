mod actions;
mod confirm;
mod loader;
mod state;
mod status_bar;
mod toast;
mod toolbar;

pub use self::state::UiState;

use self::confirm::ConfirmDialogState;
use self::loader::Loader;
use self::toast::ToastManager;
use crate::models::settings::AppConfig;
use crate::services::api::ApiClient;
use crate::services::calendar_export::CalendarExportService;
use crate::services::calendar_grid;
use crate::services::refresh::RefreshScheduler;
use crate::services::session::{SessionGate, SessionStatus};
use crate::services::store::EventStore;
use crate::services::view_filter;
use crate::ui_egui::dialogs::{render_new_event_dialog, NewEventDialogAction, NewEventDialogState};
use crate::ui_egui::views::{EventCards, MonthView};
use egui::{Color32, RichText};
use std::time::{Duration, Instant};

/// Poll interval for background results while requests are outstanding
const BUSY_REPAINT: Duration = Duration::from_millis(200);
const CALENDAR_PANEL_WIDTH: f32 = 420.0;

pub struct EventBoardApp {
    config: AppConfig,
    store: EventStore,
    state: UiState,
    /// `None` when the configuration could not produce an API client
    loader: Option<Loader>,
    setup_error: Option<String>,
    session: SessionGate,
    session_status: SessionStatus,
    refresh: RefreshScheduler,
    export: CalendarExportService,
    confirm_dialog: ConfirmDialogState,
    toast_manager: ToastManager,
    new_event_dialog: Option<NewEventDialogState>,
}

impl eframe::App for EventBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        if let Some(message) = &self.setup_error {
            Self::render_setup_error(ctx, message);
            return;
        }

        if let SessionStatus::SignInRequired { token_path } = &self.session_status {
            if Self::render_sign_in_required(ctx, token_path) {
                self.session_status = self.session.check();
            }
            return;
        }

        self.refresh_if_due();

        self.render_toolbar(ctx);
        self.render_status_bar(ctx);
        self.render_calendar_panel(ctx);
        self.render_event_list(ctx);

        self.handle_confirm_dialog(ctx);
        self.handle_new_event_dialog(ctx);
        self.toast_manager.render(ctx);

        let wait = if self.state.is_busy() {
            BUSY_REPAINT
        } else {
            self.refresh.time_until_due(Instant::now())
        };
        ctx.request_repaint_after(wait);
    }
}

impl EventBoardApp {
    /// Build the app from a loaded configuration, or show why it failed to load
    pub fn new(_cc: &eframe::CreationContext<'_>, config: anyhow::Result<AppConfig>) -> Self {
        let (config, setup_error) = match config {
            Ok(config) => (config, None),
            Err(err) => (AppConfig::default(), Some(format!("{:#}", err))),
        };

        let (loader, setup_error) = match setup_error {
            Some(message) => (None, Some(message)),
            None => match ApiClient::new(&config.api_base_url, config.request_timeout()) {
                Ok(api) => (Some(Loader::new(api)), None),
                Err(err) => {
                    log::error!("Failed to create API client: {}", err);
                    (None, Some(err.to_string()))
                }
            },
        };

        let session = SessionGate::new(config.access_token_path.as_deref());
        let session_status = session.check();

        Self {
            state: UiState::new(&config),
            refresh: RefreshScheduler::new(config.refresh_interval()),
            store: EventStore::new(),
            loader,
            setup_error,
            session,
            session_status,
            export: CalendarExportService::new(),
            confirm_dialog: ConfirmDialogState::new(),
            toast_manager: ToastManager::new(),
            new_event_dialog: None,
            config,
        }
    }

    /// Start a list request when the timer says so; the first frame always does
    fn refresh_if_due(&mut self) {
        let now = Instant::now();
        if self.refresh.is_due(now) {
            self.refresh.mark_started(now);
            self.request_list();
        }
    }

    fn request_list(&mut self) {
        if let Some(loader) = &self.loader {
            self.state.list_started();
            loader.request_list();
        }
    }

    fn render_calendar_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("calendar_panel")
            .resizable(true)
            .default_width(CALENDAR_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let month = self.state.month;
                match calendar_grid::build(month.year(), month.month(), self.store.all()) {
                    Ok(grid) => {
                        let action = MonthView::show(ui, &grid);
                        self.handle_month_action(action);
                    }
                    Err(err) => {
                        log::error!("Failed to build calendar grid: {:#}", err);
                        ui.colored_label(Color32::LIGHT_RED, format!("{:#}", err));
                    }
                }
            });
    }

    fn render_event_list(&mut self, ctx: &egui::Context) {
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let events = view_filter::derive(self.store.all(), &self.state.params);
                let display = self.state.display_state(events.len());
                let state = &self.state;
                // Cards stay inert while a delete confirmation is pending
                ui.add_enabled_ui(!self.confirm_dialog.is_open(), |ui| {
                    EventCards::show(ui, &display, &events, |id| state.is_deleting(id))
                })
                .inner
            })
            .inner;

        if let Some(action) = action {
            self.handle_card_action(action);
        }
    }

    fn handle_new_event_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.new_event_dialog else {
            return;
        };

        match render_new_event_dialog(ctx, dialog) {
            NewEventDialogAction::None => {}
            NewEventDialogAction::Cancel => self.new_event_dialog = None,
            NewEventDialogAction::Submit(event) => {
                if let Some(loader) = &self.loader {
                    self.state.create_started();
                    loader.request_create(event);
                }
                self.new_event_dialog = None;
            }
        }
    }

    fn render_setup_error(ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(RichText::new("Event Board is not configured").heading());
                ui.add_space(8.0);
                ui.colored_label(Color32::LIGHT_RED, message);
                ui.add_space(8.0);
                ui.label(format!(
                    "Set api_base_url in the config file or the {} environment variable.",
                    crate::services::settings::API_URL_ENV
                ));
            });
        });
    }

    /// Returns true when the user asks to check for a token again
    fn render_sign_in_required(ctx: &egui::Context, token_path: &std::path::Path) -> bool {
        let mut retry = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(RichText::new("Sign in required").heading());
                ui.add_space(8.0);
                ui.label("No access token was found for this device.");
                ui.label(format!("Expected a token at {}", token_path.display()));
                ui.label(format!(
                    "or in the {} environment variable.",
                    crate::services::session::ACCESS_TOKEN_ENV
                ));
                ui.add_space(12.0);
                if ui.button("Check again").clicked() {
                    retry = true;
                }
            });
        });
        retry
    }
}
