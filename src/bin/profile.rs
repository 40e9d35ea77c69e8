use std::time::{Duration, Instant};

use mazeviz::{
    compare::run_comparison,
    generators::{Generator, generate_maze, get_rng},
    logging::init_logging,
    maze::Grid,
    solvers::Solver,
};

const SIZE: usize = 255;

fn main() -> mazeviz::Result<()> {
    let _guard = init_logging(std::path::Path::new("."))?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);
    let generator = args
        .next()
        .map(|s| s.parse::<Generator>())
        .transpose()?
        .unwrap_or(Generator::Prim);

    let (start, end) = ((0, 0), (SIZE - 1, SIZE - 1));
    let grid = Grid::new(SIZE, SIZE, start, end)?;
    let mut totals = vec![Duration::ZERO; Solver::ALL.len()];
    let mut generation_total = Duration::ZERO;

    for iteration in 0..num_iters {
        let started = Instant::now();
        let maze = generate_maze(&grid, generator, start, end, &mut get_rng(Some(iteration as u64)))?.grid;
        generation_total += started.elapsed();

        for (entry, total) in run_comparison(&maze, start, end, &Solver::ALL)?
            .iter()
            .zip(totals.iter_mut())
        {
            *total += entry.performance.execution_time;
            tracing::info!(
                "[profile] iteration {iteration}: {} visited {} path {} in {:?}",
                entry.solver,
                entry.performance.visited_nodes,
                entry.performance.path_length,
                entry.performance.execution_time
            );
        }
    }

    let runs = num_iters.max(1) as u32;
    println!("{generator} on {SIZE}x{SIZE}, {num_iters} iterations: {:?} avg", generation_total / runs);
    for (solver, total) in Solver::ALL.iter().zip(totals) {
        println!("  {solver}: {:?} avg", total / runs);
    }
    Ok(())
}
