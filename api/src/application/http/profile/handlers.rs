pub mod get_profile;
pub mod upsert_profile;
