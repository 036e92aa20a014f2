mod app_error;
mod fleet_op;
mod price_op;
mod roadpricing_app;
mod speed_limit_op;
mod zone_op;

pub use app_error::RoadPricingAppError;
pub use fleet_op::run_fleet;
pub use price_op::run_price;
pub use roadpricing_app::{run, App, RoadPricingAppArguments};
pub use speed_limit_op::run_speed_limit;
pub use zone_op::run_zone;
