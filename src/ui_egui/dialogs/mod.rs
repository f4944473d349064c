pub mod new_event_dialog;

pub use new_event_dialog::{render_new_event_dialog, NewEventDialogAction, NewEventDialogState};
