mod link_traversal;
mod toll_error;
mod toll_factor;
mod toll_pricing_policy;
mod toll_window;
mod toll_zone;

pub use link_traversal::{LinkTraversal, TollChargeRecord, TolledLinkRecord};
pub use toll_error::TollError;
pub use toll_factor::{TollFactor, TollFactorTable, VehicleTypeTollFactor};
pub use toll_pricing_policy::{TollPricing, TollPricingPolicy};
pub use toll_window::{TollScheme, TollWindow};
pub use toll_zone::{links_inside, TollZone};
