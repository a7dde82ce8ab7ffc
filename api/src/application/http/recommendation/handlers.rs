pub mod get_recommendations;
pub mod get_scored_recommendations;
