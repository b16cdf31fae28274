pub mod prefs;
pub mod progress;
pub mod session;
