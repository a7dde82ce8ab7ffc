pub mod common;
pub mod compatibility;
pub mod dosha;
pub mod food;
pub mod profile;
pub mod scan_history;
