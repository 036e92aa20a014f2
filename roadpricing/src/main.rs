use clap::Parser;
use roadpricing::app::{run, RoadPricingAppArguments};

fn main() {
    let args = RoadPricingAppArguments::parse();
    if let Err(e) = run(&args) {
        log::error!("roadpricing failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
