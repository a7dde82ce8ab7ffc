pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::UserProfile;
pub use ports::{ProfileRepository, ProfileService};
