//! Strategy layer tests: enumeration, the five policies, composition.

use pawnfall::{
    legal_moves, simulate, Card, Chained, ControlBoard, FillFirst, Game, InfluenceGrid,
    MaximizeRowScore, Minimax, Move, PlayerColor, Random, Strategy,
};

// =============================================================================
// Fixtures
// =============================================================================

fn plain_deck(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("Plain{i:02}"), 1, 2, InfluenceGrid::empty()).unwrap())
        .collect()
}

/// Cards nobody can afford on a fresh board (cost 3 against 1-pawn cells).
fn pricey_deck(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("Pricey{i:02}"), 3, 2, InfluenceGrid::empty()).unwrap())
        .collect()
}

fn started_3x5() -> Game {
    let mut game = Game::new();
    game.start_game(3, 5, plain_deck(15), plain_deck(15), 5).unwrap();
    game
}

fn stuck_3x5() -> Game {
    let mut game = Game::new();
    game.start_game(3, 5, pricey_deck(15), pricey_deck(15), 5).unwrap();
    game
}

/// An opponent model that always passes.
struct AlwaysPass;

impl Strategy for AlwaysPass {
    fn choose_move(&mut self, _game: &Game) -> Option<Move> {
        Some(Move::Pass)
    }
}

/// An opponent model that never answers.
struct NeverMoves;

impl Strategy for NeverMoves {
    fn choose_move(&mut self, _game: &Game) -> Option<Move> {
        None
    }
}

// =============================================================================
// Enumeration and simulation
// =============================================================================

#[test]
fn test_legal_moves_fresh_board() {
    let game = started_3x5();
    let moves = legal_moves(&game);

    // 5 hand cards x 3 home-column cells for Red.
    assert_eq!(moves.len(), 15);
    assert!(moves.iter().all(|mv| matches!(mv, Move::Place { col: 0, .. })));
    assert_eq!(moves[0], Move::Place { card: 0, row: 0, col: 0 });
}

#[test]
fn test_legal_moves_outside_progress() {
    assert!(legal_moves(&Game::new()).is_empty());

    let mut game = started_3x5();
    game.pass_turn().unwrap();
    game.pass_turn().unwrap();
    assert!(legal_moves(&game).is_empty());
}

#[test]
fn test_simulate_is_side_effect_free() {
    let game = started_3x5();

    let after = simulate(&game, Move::Place { card: 0, row: 0, col: 0 }).unwrap();
    assert!(after.cell(0, 0).unwrap().card().is_some());
    assert!(game.cell(0, 0).unwrap().card().is_none());

    // Unusable candidates answer None instead of failing.
    assert!(simulate(&game, Move::Place { card: 0, row: 0, col: 1 }).is_none());
    assert!(simulate(&game, Move::Place { card: 0, row: 9, col: 0 }).is_none());
}

// =============================================================================
// FillFirst
// =============================================================================

#[test]
fn test_fill_first_scans_from_own_side() {
    let mut game = started_3x5();

    // Red scans columns left to right.
    assert_eq!(
        FillFirst.choose_move(&game),
        Some(Move::Place { card: 0, row: 0, col: 0 })
    );

    // Blue scans right to left.
    game.pass_turn().unwrap();
    assert_eq!(
        FillFirst.choose_move(&game),
        Some(Move::Place { card: 0, row: 0, col: 4 })
    );
}

#[test]
fn test_fill_first_passes_when_stuck() {
    let game = stuck_3x5();
    assert_eq!(FillFirst.choose_move(&game), Some(Move::Pass));
}

#[test]
fn test_fill_first_declines_outside_progress() {
    assert_eq!(FillFirst.choose_move(&Game::new()), None);

    let mut game = started_3x5();
    game.pass_turn().unwrap();
    game.pass_turn().unwrap();
    assert_eq!(FillFirst.choose_move(&game), None);
}

// =============================================================================
// MaximizeRowScore
// =============================================================================

#[test]
fn test_max_row_score_takes_first_winning_row() {
    let game = started_3x5();

    // Row 0 is tied 0-0; the first placement there wins it.
    assert_eq!(
        MaximizeRowScore.choose_move(&game),
        Some(Move::Place { card: 0, row: 0, col: 0 })
    );
}

#[test]
fn test_max_row_score_skips_rows_already_won() {
    let mut game = started_3x5();
    game.place_card(0, 0, 0).unwrap(); // Red wins row 0
    game.pass_turn().unwrap(); // Blue passes

    // Red already exceeds Blue in row 0, so the next target is row 1.
    assert_eq!(
        MaximizeRowScore.choose_move(&game),
        Some(Move::Place { card: 0, row: 1, col: 0 })
    );
}

#[test]
fn test_max_row_score_passes_when_stuck() {
    let game = stuck_3x5();
    assert_eq!(MaximizeRowScore.choose_move(&game), Some(Move::Pass));
}

// =============================================================================
// ControlBoard
// =============================================================================

#[test]
fn test_control_board_declines_without_improvement() {
    // Influence-free cards only convert an owned pawn cell into an owned
    // card cell: never a strict gain over the baseline.
    let game = started_3x5();
    assert_eq!(ControlBoard.choose_move(&game), None);
}

#[test]
fn test_control_board_prefers_gain_with_tiebreak() {
    // Every placement of this card grabs one extra cell; the tie breaks
    // to the topmost row, leftmost column, leftmost card.
    let spread_rows = ["XXXXX", "XXXXX", "XXCIX", "XXXXX", "XXXXX"];
    let spread: Vec<Card> = (0..15)
        .map(|i| {
            Card::new(
                format!("Spread{i:02}"),
                1,
                2,
                InfluenceGrid::from_rows(&spread_rows).unwrap(),
            )
            .unwrap()
        })
        .collect();

    let mut game = Game::new();
    game.start_game(3, 5, spread, plain_deck(15), 5).unwrap();

    assert_eq!(
        ControlBoard.choose_move(&game),
        Some(Move::Place { card: 0, row: 0, col: 0 })
    );
}

#[test]
fn test_control_board_declines_outside_progress() {
    assert_eq!(ControlBoard.choose_move(&Game::new()), None);
}

// =============================================================================
// Minimax
// =============================================================================

#[test]
fn test_minimax_picks_some_legal_move_against_passer() {
    let game = started_3x5();
    let legal = legal_moves(&game);

    let chosen = Minimax::new(AlwaysPass).choose_move(&game).unwrap();
    assert!(legal.contains(&chosen), "must pick a legal move, got {chosen}");
    // Equal evaluations default to the first legal move.
    assert_eq!(chosen, Move::Place { card: 0, row: 0, col: 0 });
}

#[test]
fn test_minimax_treats_unanswerable_as_best() {
    let game = started_3x5();

    // Every candidate is unanswerable for a model that never moves, so
    // the first legal move still wins.
    assert_eq!(
        Minimax::new(NeverMoves).choose_move(&game),
        Some(Move::Place { card: 0, row: 0, col: 0 })
    );
}

#[test]
fn test_minimax_with_real_opponent_model() {
    let game = started_3x5();
    let legal = legal_moves(&game);

    let chosen = Minimax::new(FillFirst).choose_move(&game).unwrap();
    assert!(legal.contains(&chosen));
}

#[test]
fn test_minimax_declines_without_legal_moves() {
    assert_eq!(Minimax::new(FillFirst).choose_move(&Game::new()), None);
    assert_eq!(Minimax::new(FillFirst).choose_move(&stuck_3x5()), None);
}

#[test]
fn test_minimax_weight_is_replaceable() {
    let game = started_3x5();

    let default = Minimax::new(AlwaysPass).choose_move(&game);
    let reweighted = Minimax::with_weight(AlwaysPass, 10).choose_move(&game);

    // Same all-tied position: both must pick a legal move.
    assert!(default.is_some());
    assert!(reweighted.is_some());
}

// =============================================================================
// Chained
// =============================================================================

#[test]
fn test_chained_falls_through_to_fallback() {
    let game = started_3x5();

    // ControlBoard declines on influence-free cards; FillFirst answers.
    let mut chain = Chained::new(vec![Box::new(ControlBoard)], Box::new(FillFirst));
    assert_eq!(
        chain.choose_move(&game),
        Some(Move::Place { card: 0, row: 0, col: 0 })
    );
}

#[test]
fn test_chained_prefers_earlier_strategy() {
    let mut game = started_3x5();
    game.place_card(0, 0, 0).unwrap();
    game.pass_turn().unwrap();

    // MaximizeRowScore targets row 1 here; FillFirst would pick row 0.
    let mut chain = Chained::new(vec![Box::new(MaximizeRowScore)], Box::new(FillFirst));
    assert_eq!(
        chain.choose_move(&game),
        Some(Move::Place { card: 0, row: 1, col: 0 })
    );
}

#[test]
fn test_chained_is_as_infallible_as_its_fallback() {
    let game = stuck_3x5();

    let mut chain = Chained::new(
        vec![Box::new(ControlBoard), Box::new(Minimax::new(FillFirst))],
        Box::new(FillFirst),
    );
    assert_eq!(chain.choose_move(&game), Some(Move::Pass));
}

// =============================================================================
// Random
// =============================================================================

#[test]
fn test_random_is_deterministic_per_seed() {
    let game = started_3x5();

    let a = Random::new(42).choose_move(&game);
    let b = Random::new(42).choose_move(&game);
    assert_eq!(a, b);

    let legal = legal_moves(&game);
    assert!(legal.contains(&a.unwrap()));
}

#[test]
fn test_random_passes_when_stuck() {
    assert_eq!(Random::new(1).choose_move(&stuck_3x5()), Some(Move::Pass));
    assert_eq!(Random::new(1).choose_move(&Game::new()), None);
}

// =============================================================================
// Strategies never disturb the live game
// =============================================================================

#[test]
fn test_strategies_leave_game_untouched() {
    let game = started_3x5();

    let _ = FillFirst.choose_move(&game);
    let _ = MaximizeRowScore.choose_move(&game);
    let _ = ControlBoard.choose_move(&game);
    let _ = Minimax::new(FillFirst).choose_move(&game);

    assert_eq!(game.current_player().unwrap(), PlayerColor::Red);
    assert_eq!(game.hand(PlayerColor::Red).unwrap().len(), 5);
    assert!(game.cell(0, 0).unwrap().card().is_none());
    assert!(!game.is_over());
}
