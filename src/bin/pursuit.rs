use std::path::PathBuf;

use clap::Parser;
use pacman_search::maze::{layouts, reflex_evaluation, PursuitState};
use pacman_search::{AgentConfig, Direction, GameState, ReflexAgent, SearchAgent};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(name = "pursuit", about = "Play Pac-Man with an adversarial search agent against random ghosts")]
struct Args {
    /// Built-in layout name
    #[arg(long, default_value = "arena")]
    layout: String,

    /// Agent config (JSON). Flags below override individual fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// minimax | alpha_beta | expectimax
    #[arg(long)]
    strategy: Option<String>,

    /// Agent cycles searched per move
    #[arg(long)]
    depth: Option<u32>,

    /// Evaluation function name
    #[arg(long)]
    evaluation: Option<String>,

    /// Seed for the ghosts and the agent
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many Pac-Man moves
    #[arg(long, default_value_t = 100)]
    turns: u32,

    /// Play a one-ply reflex agent instead of the configured search
    #[arg(long)]
    reflex: bool,
}

enum Player {
    Search(SearchAgent),
    Reflex(ReflexAgent<fn(&PursuitState, &Direction) -> f64>),
}

impl Player {
    fn get_action(&mut self, state: &PursuitState) -> pacman_search::Result<Option<Direction>> {
        match self {
            Player::Search(a) => a.get_action(state),
            Player::Reflex(a) => a.get_action(state),
        }
    }

    fn expanded(&self) -> u64 {
        match self {
            Player::Search(a) => a.last_counts().expanded,
            Player::Reflex(a) => a.last_counts().expanded,
        }
    }
}

fn build_config(args: &Args) -> Result<AgentConfig, String> {
    let mut cfg = match &args.config {
        Some(path) => AgentConfig::load(path).map_err(|e| e.to_string())?,
        None => AgentConfig::default(),
    };
    if let Some(s) = &args.strategy {
        cfg.strategy = s.parse().map_err(|e: pacman_search::SearchError| e.to_string())?;
    }
    if let Some(d) = args.depth {
        cfg.depth = d;
    }
    if let Some(e) = &args.evaluation {
        cfg.evaluation = e.clone();
    }
    if let Some(s) = args.seed {
        cfg.seed = s;
    }
    cfg.validate().map_err(|e| e.to_string())?;
    Ok(cfg)
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

    let cfg = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid agent config: {e}");
            std::process::exit(2);
        }
    };

    let mut agent = if args.reflex {
        let evaluate: fn(&PursuitState, &Direction) -> f64 = reflex_evaluation;
        Player::Reflex(ReflexAgent::new(evaluate).with_seed(cfg.seed))
    } else {
        match SearchAgent::from_config(&cfg) {
            Ok(a) => Player::Search(a),
            Err(e) => {
                eprintln!("Failed to build agent: {e}");
                std::process::exit(2);
            }
        }
    };

    let mut ghost_rng = SmallRng::seed_from_u64(cfg.seed.wrapping_add(1));
    let mut state = layout.pursuit_state();
    let mut moves = Vec::new();
    let mut nodes: u64 = 0;

    for _ in 0..args.turns {
        if state.is_terminal() {
            break;
        }
        let action = match agent.get_action(&state) {
            Ok(Some(a)) => a,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Search failed: {e}");
                std::process::exit(1);
            }
        };
        nodes += agent.expanded();
        moves.push(action);
        state = state.generate_successor(0, &action);

        for ghost in 1..state.num_agents() {
            if state.is_terminal() {
                break;
            }
            let options = state.legal_actions(ghost);
            if let Some(a) = options.choose(&mut ghost_rng) {
                state = state.generate_successor(ghost, a);
            }
        }
    }

    let out = serde_json::json!({
        "layout": layout.name,
        "config": cfg,
        "reflex": args.reflex,
        "moves": moves,
        "outcome": state.outcome(),
        "score": state.score(),
        "food_left": state.food().len(),
        "expanded_nodes": nodes,
    });
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode report: {e}");
            std::process::exit(1);
        }
    }
}
