pub mod get_scan_history;
pub mod record_scan;
