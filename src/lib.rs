pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use core::candidates;
pub use core::manifest;
pub use core::rank;
pub use core::score;
pub use core::session;

pub use error::{Error, Result};
pub use terminal::terminal_event;
