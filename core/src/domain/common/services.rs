use crate::domain::{
    food::ports::FoodRepository, profile::ports::ProfileRepository,
    scan_history::ports::ScanHistoryRepository,
};

/// Aggregates the repositories every domain service needs.
///
/// Each domain module implements its service trait on this struct, so the
/// api layer holds a single value and calls whichever trait it imports.
#[derive(Clone)]
pub struct Service<F, P, S>
where
    F: FoodRepository,
    P: ProfileRepository,
    S: ScanHistoryRepository,
{
    pub(crate) food_repository: F,
    pub(crate) profile_repository: P,
    pub(crate) scan_history_repository: S,
}

impl<F, P, S> Service<F, P, S>
where
    F: FoodRepository,
    P: ProfileRepository,
    S: ScanHistoryRepository,
{
    pub fn new(food_repository: F, profile_repository: P, scan_history_repository: S) -> Self {
        Self {
            food_repository,
            profile_repository,
            scan_history_repository,
        }
    }
}
