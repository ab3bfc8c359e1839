use clap::{Parser, ValueEnum};
use pacman_search::maze::layouts;
use pacman_search::maze::position::{stay_east_cost, stay_west_cost, unit_cost, CellCost};
use pacman_search::maze::{euclidean_heuristic, manhattan_heuristic, PositionSearchProblem};
use pacman_search::{null_heuristic, solve, Algorithm, Coord};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicOpt {
    Null,
    Manhattan,
    Euclidean,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CostOpt {
    Unit,
    StayEast,
    StayWest,
}

#[derive(Debug, Parser)]
#[command(name = "maze_search", about = "Find a path to the goal cell of a built-in maze")]
struct Args {
    /// Built-in layout name
    #[arg(long, default_value = "tiny")]
    layout: String,

    /// dfs | bfs | ucs | astar (long names such as aStarSearch are accepted too)
    #[arg(long, default_value = "bfs")]
    algorithm: String,

    /// Heuristic used by astar
    #[arg(long, value_enum, default_value_t = HeuristicOpt::Null)]
    heuristic: HeuristicOpt,

    /// Cost of entering a cell
    #[arg(long, value_enum, default_value_t = CostOpt::Unit)]
    cost: CostOpt,
}

type Heuristic<'a> = fn(&Coord, &PositionSearchProblem<'a>) -> f64;

fn heuristic_fn<'a>(opt: HeuristicOpt) -> Heuristic<'a> {
    match opt {
        HeuristicOpt::Null => null_heuristic::<PositionSearchProblem<'a>> as Heuristic<'a>,
        HeuristicOpt::Manhattan => manhattan_heuristic as Heuristic<'a>,
        HeuristicOpt::Euclidean => euclidean_heuristic as Heuristic<'a>,
    }
}

fn cost_fn(opt: CostOpt) -> CellCost {
    match opt {
        CostOpt::Unit => unit_cost,
        CostOpt::StayEast => stay_east_cost,
        CostOpt::StayWest => stay_west_cost,
    }
}

fn main() {
    let args = Args::parse();

    let layout = match layouts::by_name(&args.layout) {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "{e}\n\nAvailable layouts:\n  - {}",
                layouts::available_names().join("\n  - ")
            );
            std::process::exit(2);
        }
    };

    let algorithm: Algorithm = match args.algorithm.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let problem = layout.position_problem().with_cost(cost_fn(args.cost));
    let outcome = match solve(&problem, algorithm, heuristic_fn(args.heuristic)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    let out = serde_json::json!({
        "layout": layout.name,
        "start": layout.pacman,
        "goal": layout.goal,
        "outcome": outcome,
    });
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            std::process::exit(1);
        }
    }
}
