//! maze — runnable demo for the mouse_sim framework.
//!
//! Drops a handful of mice into a 15×9 maze, runs them to completion in
//! either lockstep or delegated mode, and writes each mouse's path and heat
//! map to CSV for a heat-map renderer to pick up.
//!
//! ```text
//! maze --mode full --out output/maze
//! maze --run run.json --mode new
//! ```

mod run_file;

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use ms_agent::Agent;
use ms_core::{Grid, MouseId};
use ms_mouse::{HeatMap, Mouse, load_population_reader};
use ms_output::{CsvWriter, write_results};
use ms_sim::{LogObserver, Sim};

use run_file::RunFile;

// ── Embedded defaults ─────────────────────────────────────────────────────────

const GRID: &str = include_str!("../data/maze.txt");
const MICE_CSV: &str = include_str!("../data/mice.csv");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// All mice step together, one tick at a time.
    Full,
    /// Each mouse runs alone to completion, one after another.
    New,
}

#[derive(Parser, Debug)]
#[command(version, about = "Run a population of maze mice to completion")]
struct Args {
    /// JSON run file.  Command-line flags override its values.
    #[arg(long)]
    run: Option<PathBuf>,

    /// Grid layout file (`#` = wall).  Defaults to the built-in maze.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Population CSV.  Defaults to the built-in population.
    #[arg(long)]
    mice: Option<PathBuf>,

    /// Global seed for mice without an explicit one.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Mode::Full)]
    mode: Mode,

    /// Directory for `paths.csv` and `heat.csv`.
    #[arg(long, default_value = "output/maze")]
    out: PathBuf,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // 1. Resolve configuration: run file first, then flags on top.
    let mut run = match &args.run {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };
    if let Some(seed) = args.seed {
        run.sim.seed = seed;
    }
    let grid_path = args.grid.or(run.grid);
    let mice_path = args.mice.or(run.mice);

    // 2. Grid.
    let grid_text = match &grid_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading grid {}", path.display()))?,
        None => GRID.to_owned(),
    };
    let grid = Arc::new(Grid::parse(&grid_text)?);
    info!(width = grid.width(), height = grid.height(), "grid loaded");

    // 3. Population.
    let population = match &mice_path {
        Some(path) => ms_mouse::load_population_csv(path, Arc::clone(&grid), run.sim.seed)?,
        None => load_population_reader(Cursor::new(MICE_CSV), Arc::clone(&grid), run.sim.seed)?,
    };
    info!(mice = population.len(), seed = run.sim.seed, "population loaded");

    // 4. Build and run.
    let mut sim: Sim<MouseId, Mouse> = Sim::new(run.sim.clone());
    sim.set_up(population)?;

    let mut observer = LogObserver::new();
    let t0 = Instant::now();
    match args.mode {
        Mode::Full => sim.run_full_sim(&mut observer)?,
        Mode::New  => sim.run_new_sim(&mut observer)?,
    }
    info!(
        mode = ?args.mode,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        clock = sim.clock.current_tick.0,
        "simulation complete"
    );

    // 5. Export.
    let paths = sim.all_paths();
    let heat = sim.all_heat_data();
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let mut writer = CsvWriter::new(&args.out)?;
    write_results(&mut writer, &paths, &heat)?;
    info!(dir = %args.out.display(), "results written");

    // 6. Summary.
    println!();
    println!("{:<12} {:<8} {:<10} {:<8}", "Mouse", "Steps", "Goal", "Final");
    println!("{}", "-".repeat(40));
    for (id, mouse) in sim.agents() {
        println!(
            "{:<12} {:<8} {:<10} {:<8}",
            id.to_string(),
            mouse.steps(),
            if mouse.reached_goal() { "reached" } else { "gave up" },
            mouse.path().last().map(|c| c.to_string()).unwrap_or_default(),
        );
    }

    let mut combined = HeatMap::for_grid(&grid);
    for map in heat.values() {
        combined.merge(map);
    }
    println!();
    println!(
        "Combined heat: {} visits, hottest cell {} visits",
        combined.total_visits(),
        combined.max_visits()
    );

    Ok(())
}
