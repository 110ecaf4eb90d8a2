use crate::output::print_json;
use anyhow::Context;
use mowsim_core::config::SimConfig;
use mowsim_core::input::read_input;
use mowsim_engine::Simulator;
use std::path::Path;

pub fn run(input: &Path, config: SimConfig, json: bool) -> anyhow::Result<()> {
    let parsed = read_input(input)
        .with_context(|| format!("failed to read input '{}'", input.display()))?;
    let mut sim = Simulator::from_input(&parsed)
        .context("failed to set up simulation")?
        .with_config(config);

    tracing::info!(input = %input.display(), mowers = parsed.mowers.len(), "running simulation");
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(sim.run()).context("simulation failed")?;

    let report = sim.report();
    if json {
        return print_json(&report);
    }
    for (key, state) in &report.mowers {
        println!("{key}: {state}");
    }
    Ok(())
}
