//! UI module - the win banner.

mod plugin;

pub use plugin::{show_win_banner, UiPlugin, WinBanner};
