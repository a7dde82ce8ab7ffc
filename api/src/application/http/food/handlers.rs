pub mod get_food;
pub mod get_food_guidance;
pub mod get_foods;
pub mod get_foods_by_dosha;
