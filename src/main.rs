use std::{
    io::{Stdout, Write},
    process::ExitCode,
    time::Instant,
};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use mazeviz::{
    MazeError,
    compare::run_comparison,
    config::Config,
    generators::{self, Generator, generate_maze},
    logging::init_logging,
    maze::Grid,
    solvers::{Solver, find_path},
    steps::StepPlayer,
};

const USAGE: &str = "usage: mazeviz [recursiveBacktracking|prims|kruskals] [aStar|dijkstra] [--animate]";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("error: {err}").with(Color::Red).attribute(Attribute::Bold));
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> mazeviz::Result<()> {
    let config = Config::from_env()?;
    let _guard = init_logging(&config.log_dir)?;

    let mut args = std::env::args().skip(1);
    let generator = args
        .next()
        .map(|s| s.parse::<Generator>())
        .transpose()?
        .unwrap_or(Generator::RecurBacktrack);
    let solver = args
        .next()
        .map(|s| s.parse::<Solver>())
        .transpose()?
        .unwrap_or(Solver::AStar);
    let animate = args.any(|arg| arg == "--animate");

    tracing::info!("Started with {generator} / {solver}, config: {config:?}");
    let mut stdout = std::io::stdout();

    let grid = config.initial_grid()?;
    let mut rng = generators::get_rng(config.seed);

    let started = Instant::now();
    let generation = generate_maze(&grid, generator, config.start, config.end, &mut rng)?;
    let generation_time = started.elapsed();
    if animate {
        replay(&mut stdout, generation.steps, &config)?;
    }

    let started = Instant::now();
    let result = find_path(&generation.grid, config.start, config.end, solver, animate)?;
    let solve_time = started.elapsed();
    if animate {
        replay(&mut stdout, result.steps, &config)?;
    } else {
        print!("{}", result.grid);
    }

    let headline = if result.path_length > 0 {
        format!("Path found with {solver}!").with(Color::Green)
    } else {
        format!("No path found with {solver}.").with(Color::Yellow)
    };
    println!("{}", headline.attribute(Attribute::Bold));
    println!("Generator:      {generator} ({generation_time:?})");
    println!("Visited nodes:  {}", result.visited_nodes_count);
    println!("Path length:    {}", result.path_length);
    println!("Execution time: {solve_time:?}");

    println!();
    println!("{}", "Comparison".attribute(Attribute::Bold));
    for entry in run_comparison(&generation.grid, config.start, config.end, &Solver::ALL)? {
        let perf = entry.performance;
        println!(
            "  {:<22} visited {:>5}  path {:>4}  time {:?}",
            entry.solver.to_string(),
            perf.visited_nodes,
            perf.path_length,
            perf.execution_time
        );
    }
    Ok(())
}

/// Play a step sequence back in place, one snapshot per animation tick.
fn replay(stdout: &mut Stdout, steps: Vec<Grid>, config: &Config) -> mazeviz::Result<()> {
    let io_err = |source| MazeError::Io {
        operation: "render grid",
        source,
    };
    let mut player = StepPlayer::new(steps);
    while let Some(grid) = player.current() {
        queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0)).map_err(io_err)?;
        write!(stdout, "{grid}").map_err(io_err)?;
        stdout.flush().map_err(io_err)?;
        std::thread::sleep(config.animation_delay);
        if player.step_forward().is_none() {
            break;
        }
    }
    Ok(())
}
