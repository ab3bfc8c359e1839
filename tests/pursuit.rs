use std::rc::Rc;

use pacman_search::maze::layouts;
use pacman_search::maze::pursuit::{
    FOOD_SCORE, GHOST_ADJACENT_PENALTY, LOSE_PENALTY, TIME_PENALTY, WIN_SCORE,
};
use pacman_search::maze::{reflex_evaluation, Maze, Outcome, PursuitState};
use pacman_search::{
    Coord, Direction, GameState, NamedEvaluation, ReflexAgent, SearchAgent, Strategy,
};

fn cornered() -> PursuitState {
    // 3x3 room: pacman bottom-left, ghost bottom-right, pellet top-left.
    PursuitState::new(
        Rc::new(Maze::bordered(5, 5)),
        Coord::new(1, 1),
        vec![Coord::new(3, 1)],
        [Coord::new(1, 3)],
    )
}

#[test]
fn corridor_rules() {
    let s = layouts::corridor().pursuit_state();
    assert_eq!(s.num_agents(), 2);
    assert_eq!(s.legal_actions(0), vec![Direction::East, Direction::Stop]);
    assert_eq!(s.legal_actions(1), vec![Direction::West]);

    let s = s.generate_successor(0, &Direction::East);
    assert_eq!(s.score(), -TIME_PENALTY);
    let s = s.generate_successor(1, &Direction::West);
    assert_eq!(s.ghosts(), &[Coord::new(4, 1)]);
    assert!(!s.is_terminal());

    let s = s.generate_successor(0, &Direction::East);
    assert!(s.is_win());
    assert_eq!(s.outcome(), Some(Outcome::Win));
    assert_eq!(s.score(), -2.0 * TIME_PENALTY + FOOD_SCORE + WIN_SCORE);
    assert!(s.legal_actions(0).is_empty());
}

#[test]
fn walking_into_a_ghost_loses() {
    let s = cornered();
    let s = s.generate_successor(0, &Direction::East);
    let s = s.generate_successor(1, &Direction::West);
    assert!(s.is_lose());
    assert_eq!(s.score(), -TIME_PENALTY - LOSE_PENALTY);
}

#[test]
fn every_strategy_avoids_the_ghost() {
    for strategy in Strategy::ALL {
        let mut agent = SearchAgent::new(strategy, 1, NamedEvaluation::Score);
        let action = agent.get_action(&cornered()).unwrap();
        assert_ne!(action, Some(Direction::East), "{strategy}");
        assert!(agent.last_counts().expanded > 0);
    }
}

#[test]
fn minimax_prefers_the_first_safe_move() {
    let mut agent = SearchAgent::new(Strategy::Minimax, 1, NamedEvaluation::Score);
    assert_eq!(
        agent.get_action(&cornered()).unwrap(),
        Some(Direction::North)
    );
}

#[test]
fn every_strategy_races_for_the_last_pellet() {
    let s = layouts::corridor().pursuit_state();
    for strategy in Strategy::ALL {
        let mut agent = SearchAgent::new(strategy, 2, NamedEvaluation::Score);
        let d = agent.decide(&s).unwrap();
        assert_eq!(d.action, Some(Direction::East), "{strategy}");
        assert_eq!(d.value, -2.0 * TIME_PENALTY + FOOD_SCORE + WIN_SCORE);
    }
}

#[test]
fn alpha_beta_agrees_with_minimax_on_built_in_boards() {
    for name in layouts::available_names() {
        let s = layouts::by_name(name).unwrap().pursuit_state();
        for depth in 1..=2 {
            let mut mm = SearchAgent::new(Strategy::Minimax, depth, NamedEvaluation::Score);
            let mut ab = SearchAgent::new(Strategy::AlphaBeta, depth, NamedEvaluation::Score);
            assert_eq!(ab.decide(&s).unwrap(), mm.decide(&s).unwrap(), "{name} depth {depth}");
            assert!(ab.last_counts().expanded <= mm.last_counts().expanded);
        }
    }
}

#[test]
fn finished_game_has_no_action() {
    let s = layouts::corridor()
        .pursuit_state()
        .generate_successor(0, &Direction::East)
        .generate_successor(1, &Direction::West)
        .generate_successor(0, &Direction::East);
    let mut agent = SearchAgent::new(Strategy::AlphaBeta, 2, NamedEvaluation::Score);
    assert_eq!(agent.get_action(&s).unwrap(), None);
}

#[test]
fn pellet_under_pacman_is_not_counted() {
    let s = PursuitState::new(
        Rc::new(Maze::bordered(5, 3)),
        Coord::new(1, 1),
        vec![],
        [Coord::new(1, 1), Coord::new(3, 1)],
    );
    assert_eq!(s.food().len(), 1);
    assert_eq!(s.num_agents(), 1);
}

#[test]
fn reflex_evaluation_punishes_stepping_next_to_a_ghost() {
    let s = cornered();
    let north = reflex_evaluation(&s, &Direction::North);
    let east = reflex_evaluation(&s, &Direction::East);
    let stop = reflex_evaluation(&s, &Direction::Stop);

    // North: one step from the pellet, ghost out of range.
    assert!((north - (-TIME_PENALTY - 0.1)).abs() < 1e-9);
    // Stop: pellet and ghost both two cells away.
    assert!((stop - (-TIME_PENALTY - 0.2 - 0.2)).abs() < 1e-9);
    assert!(east < -TIME_PENALTY - GHOST_ADJACENT_PENALTY);
    assert!(north > stop && stop > east);
}

#[test]
fn reflex_agent_never_moves_next_to_the_ghost() {
    for seed in 0..16 {
        let s = cornered();
        let mut agent = ReflexAgent::new(reflex_evaluation).with_seed(seed);
        let action = agent.get_action(&s).unwrap().unwrap();
        assert_eq!(action, Direction::North, "seed {seed}");

        let at = s.pacman().step(action);
        for &g in s.ghosts() {
            assert!(at.manhattan(g) > 1, "seed {seed}");
        }
        assert_eq!(agent.last_counts().evaluated, 3);
    }
}

#[test]
fn reflex_agent_breaks_ties_with_its_rng() {
    let s = layouts::open().pursuit_state();
    let legal = s.legal_actions(0);
    let flat = |_: &PursuitState, _: &Direction| 0.0;

    let mut seen = Vec::new();
    for seed in 0..64 {
        let mut agent = ReflexAgent::new(flat).with_seed(seed);
        let a = agent.get_action(&s).unwrap().unwrap();
        assert!(legal.contains(&a));
        if !seen.contains(&a) {
            seen.push(a);
        }

        let mut again = ReflexAgent::new(flat).with_seed(seed);
        assert_eq!(again.get_action(&s).unwrap(), Some(a), "seed {seed}");
    }
    assert!(seen.len() > 1);
}

#[test]
fn reflex_agent_has_nothing_to_do_after_the_game() {
    let s = layouts::corridor()
        .pursuit_state()
        .generate_successor(0, &Direction::East)
        .generate_successor(1, &Direction::West)
        .generate_successor(0, &Direction::East);
    let mut agent = ReflexAgent::new(reflex_evaluation);
    let d = agent.decide(&s).unwrap();
    assert_eq!(d.action, None);
    assert_eq!(d.value, s.score());
}
