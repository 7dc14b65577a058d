use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vivarium_core::{Engine, Grid, Topology};
use vivarium_lib::app::App;
use vivarium_lib::config::AppConfig;
use vivarium_lib::patterns;
use vivarium_lib::ui::tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Built-in seed pattern (block, blinker, glider, seed)
    #[arg(short, long, conflicts_with = "pattern_file")]
    pattern: Option<String>,

    /// File containing pattern text ('x' = alive)
    #[arg(long)]
    pattern_file: Option<String>,

    /// Random grid rows (overrides config)
    #[arg(long)]
    rows: Option<usize>,

    /// Random grid cols (overrides config)
    #[arg(long)]
    cols: Option<usize>,

    /// Boundary topology: bounded (plane) or toroidal (torus)
    #[arg(short, long)]
    topology: Option<Topology>,

    /// RNG seed for the random initial grid
    #[arg(long)]
    seed: Option<u64>,

    /// Write a history trace to this directory
    #[arg(long)]
    history_dir: Option<String>,

    /// Generations to run in headless mode
    #[arg(short, long, default_value_t = 100)]
    generations: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

fn build_grid(args: &Args, config: &AppConfig) -> Result<Grid> {
    if let Some(name) = &args.pattern {
        let Some(text) = patterns::builtin(name) else {
            bail!(
                "unknown pattern '{name}' (available: {})",
                patterns::BUILTIN_NAMES.join(", ")
            );
        };
        return Ok(Grid::from_pattern(text)?);
    }
    if let Some(path) = &args.pattern_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading pattern file {path}"))?;
        return Grid::from_pattern(&text).with_context(|| format!("parsing pattern file {path}"));
    }

    let rows = args.rows.unwrap_or(config.grid.rows);
    let cols = args.cols.unwrap_or(config.grid.cols);
    let mut rng = match args.seed.or(config.grid.seed) {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    Ok(Grid::random(rows, cols, config.grid.random_weight, &mut rng)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config);
    if let Some(topology) = args.topology {
        config.topology = topology;
    }
    if let Some(dir) = &args.history_dir {
        config.history.enabled = true;
        config.history.dir = dir.clone();
    }

    let grid = build_grid(&args, &config)?;
    let engine = Engine::new(grid, config.topology, config.rule);

    match args.mode {
        Mode::Headless => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();

            let mut app = App::new(engine, config)?;
            app.run_headless(args.generations)?;
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(engine, config)?;
            let res = app.run(&mut tui);

            tui.exit()?;

            res?;
            if let Some(history) = &app.history {
                println!("history trace: {}", history.path().display());
            }
        }
    }

    Ok(())
}
