pub mod food_analysis_result;
pub mod inline_image;
pub mod model_reply;

pub use food_analysis_result::*;
pub use inline_image::*;
pub use model_reply::*;
