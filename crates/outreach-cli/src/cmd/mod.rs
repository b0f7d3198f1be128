pub mod cadence;
pub mod compose;
pub mod dashboard;
pub mod export;
pub mod import;
pub mod init;
pub mod settings;
pub mod target;
pub mod template;
pub mod touch;
