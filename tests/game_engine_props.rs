use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{GameConfig, GameEngine, GameStatus, Mark, TimeoutPolicy, Transition};

#[derive(Debug, Clone)]
enum Op {
    Play(usize),
    Jump(usize),
    Tick,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..10).prop_map(Op::Play),
        1 => (0usize..12).prop_map(Op::Jump),
        2 => Just(Op::Tick),
    ]
}

fn policy_strategy() -> impl Strategy<Value = TimeoutPolicy> {
    prop_oneof![
        Just(TimeoutPolicy::Random),
        Just(TimeoutPolicy::FirstEmpty),
        Just(TimeoutPolicy::Idle),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// History never empties, the cursor stays in range, and the snapshot at
    /// index `i` holds exactly `i` marks with X never behind O.
    #[test]
    fn history_invariants_hold(
        seed in any::<u64>(),
        policy in policy_strategy(),
        turn in 1u32..4,
        ops in proptest::collection::vec(op_strategy(), 0..80),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_config(GameConfig::new(turn, policy).unwrap());
        for op in ops {
            match op {
                Op::Play(c) => { engine.play(c); }
                Op::Jump(i) => { engine.jump_to(i); }
                Op::Tick => { engine.tick(&mut rng); }
            }
            prop_assert!(engine.history().len() >= 1);
            prop_assert!(engine.current_index() < engine.history().len());
            prop_assert!(engine.remaining_seconds() <= turn);
            for (i, board) in engine.history().iter().enumerate() {
                prop_assert_eq!(board.mark_count(), i);
                let x = board.count_of(Mark::X);
                let o = board.count_of(Mark::O);
                prop_assert!(x == o || x == o + 1);
            }
        }
    }

    /// Ignored moves leave every observable part of the engine unchanged.
    #[test]
    fn rejected_moves_change_nothing(
        seed in any::<u64>(),
        cells in proptest::collection::vec(0usize..9, 0..9),
        target in 0usize..12,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        for c in cells {
            engine.play(c);
        }
        engine.tick(&mut rng);
        let before = engine.view();
        let epoch = engine.epoch();
        if let Transition::Ignored(_) = engine.play(target) {
            prop_assert_eq!(engine.view(), before);
            prop_assert_eq!(engine.epoch(), epoch);
        } else {
            prop_assert_eq!(engine.current_index(), before.current_index + 1);
            prop_assert_eq!(engine.remaining_seconds(), engine.turn_seconds());
        }
    }

    /// Jumping to the opening always yields a fresh, running game.
    #[test]
    fn jump_to_start_always_restarts(cells in proptest::collection::vec(0usize..9, 0..12)) {
        let mut engine = GameEngine::new();
        for c in cells {
            engine.play(c);
        }
        let len = engine.history().len();
        prop_assert!(engine.jump_to(0).is_applied());
        prop_assert!(engine.board().is_empty());
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert_eq!(engine.history().len(), len);
    }
}
