use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine_loadout_core::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "engine-loadout", version, about = "Engine loadout evaluation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or migrate the configuration file and print its location.
    InitConfig {
        /// Configuration file (defaults to the platform config directory).
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Evaluate a single engine snapshot and print the report as JSON.
    Evaluate {
        /// Snapshot JSON: owner, health, granted presets and slots.
        #[arg(long)]
        loadout: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Refresh a garage of random engines and print one line per engine.
    Demo {
        #[arg(long, default_value_t = 5)]
        engines: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Preset granted to every owner; repeat for several presets.
        #[arg(long = "grant")]
        grants: Vec<String>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Configuration::default_path().context("resolving default configuration path"),
    }
}

fn permission_store(config: &Configuration) -> PermissionStore {
    let mut store = PermissionStore::new();
    store.register_all(config.preset_permissions());
    store
}

fn grant_presets(store: &mut PermissionStore, owner: OwnerId, presets: &[String]) -> Result<()> {
    for preset in presets {
        store
            .grant(owner, &preset_permission(preset))
            .with_context(|| format!("granting preset '{preset}' to owner {owner}"))?;
    }
    Ok(())
}

fn init_config(path: &Path) -> Result<()> {
    let config = Configuration::load_or_default(path);
    println!("{}", path.display());
    println!(
        "{} presets: {}",
        config.presets().len(),
        config.preset_permissions().join(", ")
    );
    Ok(())
}

fn evaluate_snapshot(loadout: &Path, config_path: &Path) -> Result<()> {
    let config = Configuration::load_or_default(config_path);

    let content = std::fs::read_to_string(loadout)
        .with_context(|| format!("reading {}", loadout.display()))?;
    let snapshot = EngineSnapshot::from_json_str(&content)
        .with_context(|| format!("parsing {}", loadout.display()))?;

    let evaluation = snapshot
        .evaluate(&config)
        .with_context(|| format!("evaluating {}", loadout.display()))?;
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

fn run_demo(engines: u64, seed: Option<u64>, grants: &[String], config_path: &Path) -> Result<()> {
    let config = Configuration::load_or_default(config_path);
    let mut store = permission_store(&config);

    let mut garage = match seed {
        Some(seed) => DemoGarage::with_seed(seed),
        None => DemoGarage::new(),
    };
    for raw in 0..engines {
        // Every fourth vehicle is unowned
        let owner = if raw % 4 == 0 { None } else { OwnerId::from_raw(raw) };
        if let Some(owner) = owner {
            grant_presets(&mut store, owner, grants)?;
        }
        garage.spawn_engine(owner);
    }

    let mut service = EngineStatsService::new(config, store);
    let scheduled = service
        .on_server_initialized(&garage, false)
        .context("scheduling engine refreshes")?;
    let applied = service.run_pending(&mut garage);
    tracing::info!(scheduled, applied, "Demo garage refreshed");

    println!(
        "{:<10} {:>6} {:>7} {:>7} {:>7} {:>7} {:>8}",
        "engine", "owner", "health", "accel", "speed", "fuel", "overall"
    );
    for engine in garage.engine_ids() {
        let Some(demo) = garage.engine(engine) else {
            continue;
        };
        let Some(report) = demo.applied else {
            println!("{:<10} not refreshed", engine.to_string());
            continue;
        };
        println!(
            "{:<10} {:>6} {:>7.2} {:>7.3} {:>7.3} {:>7.3} {:>8.3}{}",
            engine.to_string(),
            demo.owner.map(|o| o.get()).unwrap_or(0),
            demo.health_fraction,
            report.loadout.acceleration_boost_percent,
            report.loadout.top_speed_boost_percent,
            report.loadout.fuel_economy_boost_percent,
            report.performance.overall,
            if report.loadout.is_usable { "" } else { "  (bay unusable)" },
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::InitConfig { path } => init_config(&config_path(path)?),
        Commands::Evaluate { loadout, config } => evaluate_snapshot(&loadout, &config_path(config)?),
        Commands::Demo {
            engines,
            seed,
            grants,
            config,
        } => run_demo(engines, seed, &grants, &config_path(config)?),
    }
}
