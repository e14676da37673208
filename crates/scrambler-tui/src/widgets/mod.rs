mod board;
mod status_bar;

pub use board::ScrambleBoardWidget;
pub use status_bar::StatusBarWidget;
