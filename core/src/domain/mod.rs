pub mod common;
pub mod food_analysis;
