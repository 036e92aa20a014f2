mod link;
mod network;
mod network_error;

pub use link::{Link, LinkRecord};
pub use network::Network;
pub use network_error::NetworkError;
