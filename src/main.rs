use std::env;
use std::process;

use clap::{App, Arg};

use sokobot::config::{Config, Strategy};
use sokobot::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokobot")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("breadth-first")
                .short("b")
                .long("breadth-first")
                .help("ignore the heuristic - finds solutions with the fewest moves"),
        )
        .arg(
            Arg::with_name("max-expansions")
                .short("m")
                .long("max-expansions")
                .takes_value(true)
                .value_name("N")
                .help("give up after expanding N states"),
        )
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print every move of the solution, not just pushes"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let strategy = if matches.is_present("breadth-first") {
        Strategy::BreadthFirst
    } else {
        Strategy::BestFirst
    };
    let max_expansions = matches.value_of("max-expansions").map(|max| {
        max.parse().unwrap_or_else(|err| {
            println!("Invalid max expansions {}: {}", max, err);
            process::exit(1);
        })
    });
    let include_steps = matches.is_present("steps");
    // required so clap makes sure it's present
    let path = matches.value_of("file").unwrap();

    let puzzle = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => println!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = puzzle.solve(Config::new(strategy, max_expansions));
    println!("{}", solver_ok.stats);

    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            print!("{}", puzzle.solution(&moves, include_steps));
            println!("{}", moves);
            println!("Commands: {}", moves.to_commands());
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None if solver_ok.budget_exhausted => println!("No solution (budget exhausted)"),
        None => println!("No solution"),
    }
}
