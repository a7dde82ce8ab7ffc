pub mod entities;

pub use entities::{Dosha, ParseDoshaError};
