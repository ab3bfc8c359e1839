use std::io::Write;

use pacman_search::adversarial::evaluation;
use pacman_search::config::{DEFAULT_DEPTH, DEFAULT_SEED};
use pacman_search::maze::layouts;
use pacman_search::{AgentConfig, NamedEvaluation, SearchAgent, SearchError, Strategy};

#[test]
fn empty_object_is_the_default_config() {
    let cfg = AgentConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, AgentConfig::default());
    assert_eq!(cfg.strategy, Strategy::Minimax);
    assert_eq!(cfg.depth, DEFAULT_DEPTH);
    assert_eq!(cfg.evaluation, "score");
    assert_eq!(cfg.seed, DEFAULT_SEED);
}

#[test]
fn partial_config_keeps_remaining_defaults() {
    let cfg = AgentConfig::from_json_str(r#"{ "strategy": "alpha_beta", "depth": 3 }"#).unwrap();
    assert_eq!(cfg.strategy, Strategy::AlphaBeta);
    assert_eq!(cfg.depth, 3);
    assert_eq!(cfg.evaluation, "score");
}

#[test]
fn zero_depth_is_rejected() {
    assert!(matches!(
        AgentConfig::from_json_str(r#"{ "depth": 0 }"#),
        Err(SearchError::InvalidConfig { .. })
    ));
}

#[test]
fn unknown_evaluation_lists_the_known_ones() {
    match AgentConfig::from_json_str(r#"{ "evaluation": "cleverEvaluation" }"#) {
        Err(SearchError::UnknownEvaluation { name, available }) => {
            assert_eq!(name, "cleverEvaluation");
            assert_eq!(available, evaluation::available_names());
        }
        other => panic!("expected UnknownEvaluation, got {other:?}"),
    }
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(
        AgentConfig::from_json_str(r#"{ "deepth": 3 }"#),
        Err(SearchError::Json(_))
    ));
}

#[test]
fn config_loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "strategy": "expectimax", "depth": 1, "evaluation": "scoreEvaluationFunction", "seed": 11 }}"#
    )
    .unwrap();

    let cfg = AgentConfig::load(file.path()).unwrap();
    assert_eq!(cfg.strategy, Strategy::Expectimax);
    assert_eq!(cfg.depth, 1);
    assert_eq!(cfg.seed, 11);

    let agent = SearchAgent::from_config(&cfg).unwrap();
    assert_eq!(agent.strategy(), Strategy::Expectimax);
    assert_eq!(*agent.evaluation(), NamedEvaluation::Score);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match AgentConfig::load(&path) {
        Err(SearchError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn strategies_resolve_by_short_and_agent_names() {
    assert_eq!("minimax".parse::<Strategy>().unwrap(), Strategy::Minimax);
    assert_eq!("AlphaBetaAgent".parse::<Strategy>().unwrap(), Strategy::AlphaBeta);
    assert_eq!("ExpectimaxAgent".parse::<Strategy>().unwrap(), Strategy::Expectimax);
    assert!(matches!(
        "negamax".parse::<Strategy>(),
        Err(SearchError::UnknownStrategy { .. })
    ));
    for s in Strategy::ALL {
        assert_eq!(s.name().parse::<Strategy>().unwrap(), s);
    }
}

#[test]
fn evaluation_names_round_trip_through_display() {
    for name in evaluation::available_names() {
        let e = NamedEvaluation::by_name(name).unwrap();
        assert_eq!(e.to_string().parse::<NamedEvaluation>().unwrap(), e);
    }
}

#[test]
fn unimplemented_evaluation_builds_but_fails_on_use() {
    let cfg = AgentConfig {
        evaluation: "better".to_string(),
        depth: 1,
        ..AgentConfig::default()
    };
    let mut agent = SearchAgent::from_config(&cfg).unwrap();
    let state = layouts::corridor().pursuit_state();
    assert!(matches!(
        agent.get_action(&state),
        Err(SearchError::UnimplementedPolicy { .. })
    ));
}
