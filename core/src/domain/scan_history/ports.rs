use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan_history::{entities::ScanRecord, value_objects::RecordScanInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    fn insert(
        &self,
        record: ScanRecord,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;

    /// The user's scans, oldest first.
    fn list_by_user_id(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;
}

pub trait ScanHistoryService: Send + Sync {
    fn record_scan(
        &self,
        input: RecordScanInput,
    ) -> impl Future<Output = Result<ScanRecord, CoreError>> + Send;

    fn get_scan_history(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;
}
