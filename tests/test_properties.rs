use brickbreak::game::{BrickStatus, Game, Phase, FIELD_HEIGHT, FIELD_WIDTH};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Interleaved input-handler writes and update ticks, the only two things
/// that ever touch game state.
fn apply(game: &mut Game, rng: &mut StdRng, action: u8) {
    match action {
        0 => game.set_left(true),
        1 => game.set_left(false),
        2 => game.set_right(true),
        3 => game.set_right(false),
        4 => game.toggle_pause(),
        _ => {
            game.update(rng);
        }
    }
}

proptest! {
    #[test]
    fn score_is_bounded_and_lives_never_increase(
        seed in any::<u64>(),
        actions in prop::collection::vec(0u8..8, 1..500),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);
        let total = game.total_bricks();
        let mut prev_lives = game.lives;

        for action in actions {
            apply(&mut game, &mut rng, action);
            prop_assert!(game.score <= total);
            prop_assert!(game.lives <= 3);
            prop_assert!(game.lives <= prev_lives);
            prev_lives = game.lives;
        }
    }

    #[test]
    fn score_always_equals_broken_brick_count(
        seed in any::<u64>(),
        positions in prop::collection::vec((0f32..FIELD_WIDTH, 0f32..FIELD_HEIGHT), 1..200),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);

        for (x, y) in positions {
            if game.phase != Phase::Running {
                break;
            }
            game.ball.x = x;
            game.ball.y = y;
            game.update(&mut rng);

            let broken = game
                .bricks()
                .iter()
                .filter(|b| b.status == BrickStatus::Broken)
                .count();
            prop_assert_eq!(game.score as usize, broken);
        }
    }

    #[test]
    fn bricks_never_revive(
        seed in any::<u64>(),
        positions in prop::collection::vec((0f32..FIELD_WIDTH, 0f32..FIELD_HEIGHT), 1..200),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);
        let mut seen_broken = vec![false; game.bricks().len()];

        for (x, y) in positions {
            game.ball.x = x;
            game.ball.y = y;
            game.update(&mut rng);

            for (i, brick) in game.bricks().iter().enumerate() {
                let broken_now = brick.status == BrickStatus::Broken;
                prop_assert!(broken_now || !seen_broken[i]);
                seen_broken[i] = broken_now;
            }
        }
    }

    #[test]
    fn paused_ball_never_moves(
        seed in any::<u64>(),
        ticks in 1usize..300,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);
        game.toggle_pause();

        let (x, y) = (game.ball.x, game.ball.y);
        for _ in 0..ticks {
            game.update(&mut rng);
        }
        prop_assert_eq!((game.ball.x, game.ball.y), (x, y));
    }

    #[test]
    fn ended_game_is_frozen(
        seed in any::<u64>(),
        ticks in 1usize..300,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);

        // Burn the last life with a guaranteed miss.
        game.lives = 1;
        game.ball.x = 30.0;
        game.ball.y = FIELD_HEIGHT - 1.0;
        game.ball.dy = 2.0;
        game.paddle.x = (FIELD_WIDTH - game.paddle.width) / 2.0;
        game.update(&mut rng);
        prop_assert_eq!(game.phase, Phase::Lost);

        let (x, y, score, tick) = (game.ball.x, game.ball.y, game.score, game.tick);
        for _ in 0..ticks {
            prop_assert_eq!(game.update(&mut rng), None);
        }
        prop_assert_eq!((game.ball.x, game.ball.y), (x, y));
        prop_assert_eq!(game.score, score);
        prop_assert_eq!(game.tick, tick);
    }

    #[test]
    fn ball_stays_inside_the_field(
        seed in any::<u64>(),
        actions in prop::collection::vec(0u8..8, 1..1000),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);

        for action in actions {
            apply(&mut game, &mut rng, action);
            prop_assert!(game.ball.x >= 0.0 && game.ball.x <= FIELD_WIDTH);
            prop_assert!(game.ball.y >= 0.0 && game.ball.y <= FIELD_HEIGHT);
        }
    }

    #[test]
    fn paddle_stays_inside_the_field(
        seed in any::<u64>(),
        actions in prop::collection::vec(0u8..8, 1..1000),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new(3, 5, 3, &mut rng);

        for action in actions {
            apply(&mut game, &mut rng, action);
            prop_assert!(game.paddle.x >= 0.0);
            prop_assert!(game.paddle.x + game.paddle.width <= FIELD_WIDTH);
        }
    }
}
