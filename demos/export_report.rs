//! Report export example for SetSim
//!
//! Replays an address trace through a simulation and saves the text report.
//! Usage: `cargo run --example export_report -- [output path]`

use anyhow::Context;
use setsim::report::{self, ReportOptions, DEFAULT_REPORT_FILE};
use setsim::{AccessTiming, Options, Simulation};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string());

    let options = Options::new()
        .words_per_block(4)
        .num_blocks(16)
        .timing(AccessTiming::new(5.0, 10.0));
    let mut sim = Simulation::new(&options).context("invalid cache configuration")?;

    // Walk an array of 64 words twice, then jump around a few hot words
    for address in (0..64).chain(0..64) {
        sim.access_address(address);
    }
    for address in [3, 130, 3, 258, 3, 130] {
        sim.access_address(address);
    }

    let text = sim.report(&ReportOptions::default());
    println!("{}", text);

    report::write_report(&path, &text).with_context(|| format!("failed to save report to {}", path))?;
    println!("Report saved to {}", path);

    Ok(())
}
