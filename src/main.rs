//! Spawn Patterns command-line entry point
//!
//! Loads or assembles a spawn config, generates positions and prints them
//! as JSON on stdout.

use std::path::PathBuf;

use clap::Parser;
use spawn_patterns::{
    CircleParams, Pattern, PatternKind, SeededSource, SpawnConfig, SpawnError, SpawnPlan,
    generate,
};

/// Procedural spawn-pattern position generator
#[derive(Parser)]
#[command(version, about = "Generate spawn positions for grid, circle, line, random, spiral and hex-grid patterns")]
struct Cli {
    /// JSON spawn config; flags below are ignored when given
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pattern kind (grid, circle, line, random, spiral, hex_grid)
    #[arg(long, default_value = "grid")]
    pattern: String,

    /// Number of positions
    #[arg(long, default_value_t = 9)]
    count: u32,

    /// Spacing for grid, line, spiral and hex-grid patterns
    #[arg(long)]
    spacing: Option<f32>,

    /// Circle radius
    #[arg(long)]
    radius: Option<f32>,

    /// Fixed Y for every position
    #[arg(long)]
    height: Option<f32>,

    /// Seed for the random pattern
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit a staggered spawn plan with this many seconds between slots
    #[arg(long, value_name = "SECONDS")]
    stagger: Option<f32>,
}

impl Cli {
    fn spawn_config(&self) -> Result<SpawnConfig, SpawnError> {
        if let Some(path) = &self.config {
            return SpawnConfig::load(path);
        }

        let kind = PatternKind::from_str(&self.pattern)
            .ok_or(SpawnError::InvalidConfig("unknown pattern kind"))?;
        let mut pattern = kind.default_pattern();
        if let Some(spacing) = self.spacing {
            match &mut pattern {
                Pattern::Grid(p) => p.spacing = spacing,
                Pattern::Line(p) => p.spacing = spacing,
                Pattern::Spiral(p) => p.spacing = spacing,
                Pattern::HexGrid(p) => p.spacing = spacing,
                Pattern::Circle(_) | Pattern::Random(_) => {
                    log::warn!("--spacing has no effect on the {kind} pattern")
                }
            }
        }
        if let Some(radius) = self.radius {
            match &mut pattern {
                Pattern::Circle(CircleParams { radius: r, .. }) => *r = radius,
                _ => log::warn!("--radius has no effect on the {kind} pattern"),
            }
        }

        let mut config = SpawnConfig::new(pattern, self.count);
        config.fixed_height = self.height;
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<String, SpawnError> {
    let config = cli.spawn_config()?;
    let mut rng = SeededSource::new(cli.seed);
    log::info!(
        "Generating {} {} positions (seed {})",
        config.count,
        config.kind(),
        rng.seed()
    );

    let json = match cli.stagger {
        Some(stagger) => {
            let mut plan = SpawnPlan::build(&config, Some(&mut rng), stagger)?;
            if config.pattern.needs_random_source() {
                plan = plan.with_seed(rng.seed());
            }
            log::info!("Plan spans {:.2}s", plan.total_duration());
            serde_json::to_string_pretty(&plan)?
        }
        None => {
            let points = generate(&config, Some(&mut rng))?;
            serde_json::to_string_pretty(&points)?
        }
    };
    Ok(json)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => println!("{json}"),
        Err(e) if e.is_config_error() => {
            eprintln!("Config error: {e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
