pub mod admin;
pub mod prediction;

pub use admin::admin_router;
pub use prediction::{get_prediction, prediction_router, PredictionState};
