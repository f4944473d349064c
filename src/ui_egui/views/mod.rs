pub mod event_cards;
pub mod month_view;

pub use event_cards::{CardAction, EventCards};
pub use month_view::{MonthView, MonthViewAction};
