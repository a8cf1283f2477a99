//! Desktop guide-line overlay: persistent horizontal and vertical guides drawn
//! above every other window, with a click-through display mode and an
//! interactive settings mode for placing, styling and removing them.

pub mod config;
pub mod guides;
pub mod gui;
pub mod icon;
pub mod logging;
pub mod settings;
pub mod settings_store;
pub mod shortcuts;
pub mod toast_log;
pub mod window_mode;
