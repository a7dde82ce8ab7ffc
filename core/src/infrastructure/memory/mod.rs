pub mod food_repository;
pub mod profile_repository;
pub mod scan_history_repository;
pub mod seed;

pub use food_repository::InMemoryFoodRepository;
pub use profile_repository::InMemoryProfileRepository;
pub use scan_history_repository::InMemoryScanHistoryRepository;
