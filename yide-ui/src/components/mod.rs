//! Reusable Dioxus RSX components for the Yide top bar.

mod passenger_field;
mod quick_search_bar;
mod share_ride_dialog;
mod text_field;
mod time_range_picker;

pub use passenger_field::PassengerField;
pub use quick_search_bar::QuickSearchBar;
pub use share_ride_dialog::ShareRideDialog;
pub use text_field::TextField;
pub use time_range_picker::TimeRangePicker;
