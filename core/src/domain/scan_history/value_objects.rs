use crate::domain::scan_history::entities::ScanMethod;

#[derive(Debug, Clone)]
pub struct RecordScanInput {
    pub user_id: String,
    pub food_id: i64,
    pub method: ScanMethod,
    pub barcode: Option<String>,
}
