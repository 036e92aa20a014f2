pub mod fleet;
pub mod network;
pub mod population;
pub mod speed_limit;
pub mod toll;
