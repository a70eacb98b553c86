use anyhow::{Context, Result};
use clap::Parser;

use maze_rs::config::{MazeConfig, Speed};
use maze_rs::driver::Driver;
use maze_rs::engine::MazeEngine;
use maze_rs::generators::GeneratorKind;
use maze_rs::renderer;
use maze_rs::solvers::SolverKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a maze step by step, then solve it")]
struct Args {
    /// Cells per row, 5 to 50
    #[arg(short = 'W', long, default_value_t = 24)]
    width: usize,

    /// Cells per column, 5 to 50
    #[arg(short = 'H', long, default_value_t = 24)]
    height: usize,

    /// Pixels per cell, kept for graphical front ends
    #[arg(long, default_value_t = 16)]
    cell_size: u32,

    /// prim, dfs, huntandkill, ellers, kruskals, wilsons or btree
    #[arg(short, long, default_value = "prim")]
    generator: GeneratorKind,

    /// astar, dijkstra, greedy, deadend-filling or floodfill
    #[arg(short, long, default_value = "astar")]
    solver: SolverKind,

    /// slow, medium or fast
    #[arg(long, default_value = "medium")]
    speed: Speed,

    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses between ticks
    #[arg(long)]
    instant: bool,
}

impl Args {
    fn config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            generator: self.generator,
            solver: self.solver,
            speed: self.speed,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    config
        .validate()
        .with_context(|| format!("rejected a {}x{} maze", config.width, config.height))?;

    let mut engine = MazeEngine::seeded(&config);
    let mut driver = Driver::new(config.speed);

    let ticks = driver.run(&mut engine, args.instant);
    log::info!("generated in {} ticks", ticks);
    println!(
        "{}: {} cells carved in {} steps",
        config.generator.name(),
        engine.cells_processed(),
        engine.step_count()
    );

    engine.start_solving();
    let ticks = driver.run(&mut engine, args.instant);
    log::info!("solved in {} ticks", ticks);

    print!("{}", renderer::render(&engine));
    let path = engine.solution_path();
    if path.is_empty() {
        println!("{}: no path", config.solver.name());
    } else {
        println!(
            "{}: {} cells on the path, {} processed in {} steps",
            config.solver.name(),
            path.len(),
            engine.cells_processed(),
            engine.step_count()
        );
    }
    Ok(())
}
