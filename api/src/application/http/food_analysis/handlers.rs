pub mod analyze_image;
pub mod method_not_allowed;
