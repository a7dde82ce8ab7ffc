pub mod advisors;
pub mod classifier;
pub mod entities;
pub mod ports;
pub mod ranking;
pub mod services;
pub mod value_objects;

pub use advisors::{guidance, portion_size, recommended_time, thermic_description};
pub use classifier::{NO_DOSHA_MESSAGE, RULESET_VERSION, classify};
pub use entities::*;
pub use ranking::{RECOMMENDATION_LIMIT, rank, rank_scored, sort_by_dosha_affinity};
