use crate::output::{print_json, print_table};
use anyhow::Context;
use mowsim_core::input::read_input;
use mowsim_engine::Simulator;
use std::path::Path;

pub fn run(input: &Path, json: bool) -> anyhow::Result<()> {
    let parsed = read_input(input)
        .with_context(|| format!("failed to read input '{}'", input.display()))?;
    let sim = Simulator::from_input(&parsed).context("invalid mower placement")?;

    if json {
        #[derive(serde::Serialize)]
        struct MowerSummary {
            key: String,
            x: i32,
            y: i32,
            orientation: String,
            commands: usize,
        }

        #[derive(serde::Serialize)]
        struct CheckOutput {
            width: i32,
            height: i32,
            mowers: Vec<MowerSummary>,
        }

        let out = CheckOutput {
            width: sim.lawn().width(),
            height: sim.lawn().height(),
            mowers: sim
                .mowers()
                .map(|m| MowerSummary {
                    key: m.key().to_string(),
                    x: m.position().x,
                    y: m.position().y,
                    orientation: m.orientation().to_string(),
                    commands: m.commands().len(),
                })
                .collect(),
        };
        return print_json(&out);
    }

    println!(
        "Lawn {}x{} with {} mower(s): ok",
        sim.lawn().width(),
        sim.lawn().height(),
        sim.mowers().count()
    );
    if sim.mowers().next().is_some() {
        println!();
        let rows = sim
            .mowers()
            .map(|m| {
                vec![
                    m.key().to_string(),
                    m.position().x.to_string(),
                    m.position().y.to_string(),
                    m.orientation().to_string(),
                    m.commands().len().to_string(),
                ]
            })
            .collect();
        print_table(&["MOWER", "X", "Y", "HEADING", "COMMANDS"], rows);
    }
    Ok(())
}
