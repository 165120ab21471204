use trisim::{Preset, Scenario, ScenarioConfig, Snapshot};
use trisim::{bench_advance, bench_convergence_curve};

use anyhow::{Context, Result};
use clap::Parser;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Headless three-body driver: prints every tick as CSV for a renderer
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Built-in preset (classic, fast); overrides the scenario file
    #[arg(short, long)]
    preset: Option<String>,

    /// Number of ticks to emit
    #[arg(short, long, default_value_t = 300)]
    ticks: usize,

    /// Run the benchmark sweeps instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    if let Some(name) = &args.preset {
        let preset: Preset = name.parse()?;
        return Ok(Scenario::from_preset(preset)?);
    }

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(Scenario::build_scenario(cfg)?)
}

fn write_snapshot(out: &mut impl Write, tick: usize, snap: &Snapshot) -> io::Result<()> {
    for (i, (x, v)) in snap.positions.iter().zip(snap.velocities.iter()).enumerate() {
        writeln!(
            out,
            "{},{:.9},{},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
            tick, snap.t, i, x.x, x.y, x.z, v.x, v.y, v.z
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_advance()?;
        bench_convergence_curve()?;
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "tick,t,body,x,y,z,vx,vy,vz")?;

    // tick 0 is the initialized state
    write_snapshot(&mut out, 0, &scenario.system.snapshot())?;

    let initial_energy = scenario.total_energy();
    for (i, snap) in scenario.ticks().take(args.ticks).enumerate() {
        let snap = snap.context("simulation diverged")?;
        write_snapshot(&mut out, i + 1, &snap)?;
    }
    out.flush()?;

    log::info!(
        "energy drift after {} ticks: {:.3e}",
        args.ticks,
        scenario.total_energy() - initial_energy
    );

    Ok(())
}
