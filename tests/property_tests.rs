//! Property tests over seeds and action sequences.

use proptest::prelude::*;

use dice_duel::{
    DiceDuelBuilder, GameConfig, GameRng, NullView, Phase, Player, PlayerId, Roll, RollSource,
};

proptest! {
    /// Every die draw lands in 1..=sides.
    #[test]
    fn die_stays_in_range(seed: u64, sides in 2u8..=20) {
        let mut rng = GameRng::new(seed);
        for _ in 0..50 {
            let face = rng.die(sides);
            prop_assert!((1..=sides).contains(&face));
        }
    }

    /// A gamble turn always yields zero or an even value in 2..=2*sides.
    #[test]
    fn gamble_outcome_domain(seed: u64) {
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let mut player = Player::new();

        for _ in 0..20 {
            match player.roll_for_turn(&mut rng, &config, true) {
                Roll::Doubled(v) => {
                    prop_assert_eq!(v % 2, 0);
                    prop_assert!((2..=12).contains(&v));
                }
                Roll::Busted => {}
                Roll::Die(_) => prop_assert!(false, "gamble produced a plain roll"),
            }
        }
    }

    /// The tie-break always terminates with a starting player.
    #[test]
    fn tie_break_terminates(seed: u64) {
        let mut duel = DiceDuelBuilder::new().build(seed);
        duel.request_reset(&mut NullView);
        prop_assert!(matches!(duel.phase(), Phase::Turn(_)));
    }

    /// After any sequence of turns, each score equals the sum of that
    /// player's recorded roll values since the last reset.
    #[test]
    fn score_is_sum_of_rolls(seed: u64, gambles in proptest::collection::vec(any::<bool>(), 0..30)) {
        let mut duel = DiceDuelBuilder::new().build(seed);
        let mut view = NullView;
        duel.request_reset(&mut view);

        for gamble in gambles {
            if duel.phase().is_over() {
                break;
            }
            if gamble {
                duel.request_double_or_nothing(&mut view).unwrap();
            } else {
                duel.request_roll(&mut view).unwrap();
            }
        }

        for id in PlayerId::both() {
            let recorded: u32 = duel
                .history()
                .iter()
                .filter(|r| r.player == id)
                .map(|r| r.roll.value())
                .sum();
            prop_assert_eq!(duel.player(id).score(), recorded);
        }
    }

    /// Scores never pass the threshold before game over, and the winner's
    /// final score is at or past it.
    #[test]
    fn threshold_ends_the_game(seed: u64) {
        let mut duel = DiceDuelBuilder::new().build(seed);
        let mut view = NullView;
        duel.request_reset(&mut view);

        while !duel.phase().is_over() {
            for id in PlayerId::both() {
                prop_assert!(duel.player(id).score() < duel.config().win_threshold);
            }
            duel.request_roll(&mut view).unwrap();
        }

        let winner = duel.winner().expect("game over without a winner");
        prop_assert!(duel.player(winner).score() >= duel.config().win_threshold);
        prop_assert!(duel.player(winner.opponent()).score() < duel.config().win_threshold);
    }

    /// Reset from any reachable state leaves both players clean.
    #[test]
    fn reset_always_cleans(seed: u64, turns in 0usize..15) {
        let mut duel = DiceDuelBuilder::new().build(seed);
        let mut view = NullView;
        duel.request_reset(&mut view);

        for _ in 0..turns {
            if duel.phase().is_over() {
                break;
            }
            duel.request_roll(&mut view).unwrap();
        }

        duel.request_reset(&mut view);

        prop_assert!(matches!(duel.phase(), Phase::Turn(_)));
        prop_assert!(duel.history().is_empty());
        for id in PlayerId::both() {
            prop_assert_eq!(duel.player(id).score(), 0);
            prop_assert_eq!(duel.player(id).last_roll(), None);
        }
    }

    /// Two duels from the same seed play out identically.
    #[test]
    fn same_seed_is_deterministic(seed: u64) {
        let run = |seed: u64| {
            let mut duel = DiceDuelBuilder::new().build(seed);
            let mut view = NullView;
            duel.request_reset(&mut view);
            while !duel.phase().is_over() {
                duel.request_roll(&mut view).unwrap();
            }
            (duel.winner(), duel.history().to_vec())
        };

        prop_assert_eq!(run(seed), run(seed));
    }
}
