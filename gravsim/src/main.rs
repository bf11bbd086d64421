use gravsim::{bench_advance, shared, ChannelObserver, Driver, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Wall-clock seconds to run for
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Log every n-th step
    #[arg(long, default_value_t = 60)]
    every: u64,

    /// Time `advance` for growing N instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        bench_advance();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { simulation, mut viewport, policy } = Scenario::build_scenario(scenario_cfg)?;

    let (observer, snapshots) = ChannelObserver::bounded(256);
    let sim = shared(simulation.with_observer(observer));

    sim.lock().start();
    let driver = Driver::spawn(sim.clone(), policy).context("failed to spawn driver thread")?;

    let grid = viewport.update_grid_spacing();
    info!("running {} for {} s, grid spacing {}", args.file_name, args.seconds, grid);

    // Headless stand-in for a renderer: map each reported step into screen space
    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds.max(0.0));
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        let Ok(snapshot) = snapshots.recv_timeout(remaining) else {
            break;
        };
        if args.every == 0 || snapshot.step % args.every != 0 {
            continue;
        }
        let screen: Vec<String> = snapshot
            .positions
            .iter()
            .map(|p| {
                let s = viewport.to_screen(*p);
                format!("({:.1}, {:.1})", s.x, s.y)
            })
            .collect();
        info!("step {:6} t = {:8.3} screen {}", snapshot.step, snapshot.t, screen.join(" "));
    }

    sim.lock().stop();
    driver.shutdown();

    let guard = sim.lock();
    info!("finished at t = {:.3} after {} steps", guard.time(), guard.steps());
    for (i, b) in guard.bodies().iter().enumerate() {
        info!("body {} x = ({:.4}, {:.4}) v = ({:.4}, {:.4})", i, b.x.x, b.x.y, b.v.x, b.v.y);
    }
    let p = guard.total_momentum();
    info!("total momentum ({:.6e}, {:.6e})", p.x, p.y);

    Ok(())
}
