pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{ScanMethod, ScanRecord};
pub use ports::{ScanHistoryRepository, ScanHistoryService};
