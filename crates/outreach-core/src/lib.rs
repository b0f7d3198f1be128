pub mod cadence;
pub mod calendar;
pub mod compose;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod import;
pub mod io;
pub mod paths;
pub mod settings;
pub mod store;
pub mod target;
pub mod template;
pub mod touch;
pub mod types;

pub use error::{OutreachError, Result};
