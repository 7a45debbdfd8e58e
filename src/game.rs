use rand::Rng;

/// Logical playfield the collision arithmetic runs in. Rendering scales
/// this onto whatever terminal area is available.
pub const FIELD_WIDTH: f32 = 480.0;
pub const FIELD_HEIGHT: f32 = 320.0;

pub const BALL_RADIUS: f32 = 10.0;
pub const PADDLE_WIDTH: f32 = 75.0;
pub const PADDLE_HEIGHT: f32 = 10.0;
/// Paddle travel per tick while a direction flag is held.
pub const PADDLE_STEP: f32 = 7.0;
/// Serve speed along each axis.
pub const SERVE_SPEED: f32 = 2.0;
/// The ball serves this far above the bottom edge.
const SERVE_OFFSET_BOTTOM: f32 = 30.0;

pub const BRICK_HEIGHT: f32 = 20.0;
pub const BRICK_PADDING: f32 = 10.0;
pub const BRICK_OFFSET_TOP: f32 = 40.0;
pub const BRICK_OFFSET_LEFT: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Won,
    Lost,
}

/// Terminal signal handed back to the host exactly once, on the tick the
/// game ends. Presentation (banner, restart prompt) is the host's problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickStatus {
    Unbroken,
    Broken,
}

#[derive(Debug, Clone)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub status: BrickStatus,
}

impl Brick {
    /// Strict interior test against the ball center.
    fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

pub struct Game {
    pub ball: Ball,
    pub paddle: Paddle,
    bricks: Vec<Brick>,
    pub rows: usize,
    pub cols: usize,
    pub score: u32,
    pub lives: u32,
    starting_lives: u32,
    pub phase: Phase,
    /// Best score this session. Never persisted.
    pub best: u32,
    left_pressed: bool,
    right_pressed: bool,
    pub tick: u64,
}

impl Game {
    pub fn new(rows: usize, cols: usize, starting_lives: u32, rng: &mut impl Rng) -> Self {
        let mut game = Self {
            ball: Ball {
                x: 0.0,
                y: 0.0,
                dx: 0.0,
                dy: 0.0,
                radius: BALL_RADIUS,
            },
            paddle: Paddle {
                x: (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
            },
            bricks: layout_bricks(rows, cols),
            rows,
            cols,
            score: 0,
            lives: starting_lives,
            starting_lives,
            phase: Phase::Running,
            best: 0,
            left_pressed: false,
            right_pressed: false,
            tick: 0,
        };
        game.serve(rng);
        game
    }

    /// Start a fresh game, keeping only the session-best score.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.bricks = layout_bricks(self.rows, self.cols);
        self.score = 0;
        self.lives = self.starting_lives;
        self.phase = Phase::Running;
        self.left_pressed = false;
        self.right_pressed = false;
        self.tick = 0;
        self.paddle.x = (FIELD_WIDTH - self.paddle.width) / 2.0;
        self.serve(rng);
    }

    /// Advance the simulation by one tick. Returns the terminal outcome on
    /// the tick the game ends; every later call is a no-op.
    pub fn update(&mut self, rng: &mut impl Rng) -> Option<Outcome> {
        if self.phase != Phase::Running {
            return None;
        }
        self.tick += 1;

        if self.break_bricks() > 0 && self.score == self.total_bricks() {
            return Some(self.finish(Outcome::Won));
        }

        // Side walls and ceiling reflect against the next position.
        if self.ball.x + self.ball.dx > FIELD_WIDTH - self.ball.radius
            || self.ball.x + self.ball.dx < self.ball.radius
        {
            self.ball.dx = -self.ball.dx;
        }
        if self.ball.y + self.ball.dy < self.ball.radius {
            self.ball.dy = -self.ball.dy;
        } else if self.ball.y + self.ball.dy > FIELD_HEIGHT - self.ball.radius {
            if self.ball.x > self.paddle.x && self.ball.x < self.paddle.x + self.paddle.width {
                self.ball.dy = -self.ball.dy;
            } else {
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    return Some(self.finish(Outcome::Lost));
                }
                self.serve(rng);
            }
        }

        self.move_paddle();
        self.ball.x += self.ball.dx;
        self.ball.y += self.ball.dy;
        None
    }

    /// Column-major sweep over the wall. Every unbroken brick whose interior
    /// contains the ball center breaks this tick, and each hit inverts the
    /// vertical velocity once. With a padded layout the ball lands in at most
    /// one brick, but a degenerate layout resolves against all of them.
    fn break_bricks(&mut self) -> u32 {
        let mut broken = 0;
        for brick in &mut self.bricks {
            if brick.status == BrickStatus::Broken {
                continue;
            }
            if brick.contains(self.ball.x, self.ball.y) {
                self.ball.dy = -self.ball.dy;
                brick.status = BrickStatus::Broken;
                self.score += 1;
                broken += 1;
            }
        }
        broken
    }

    fn move_paddle(&mut self) {
        if self.right_pressed {
            self.paddle.x = (self.paddle.x + PADDLE_STEP).min(FIELD_WIDTH - self.paddle.width);
        } else if self.left_pressed {
            self.paddle.x = (self.paddle.x - PADDLE_STEP).max(0.0);
        }
    }

    fn serve(&mut self, rng: &mut impl Rng) {
        self.ball.x = FIELD_WIDTH / 2.0;
        self.ball.y = FIELD_HEIGHT - SERVE_OFFSET_BOTTOM;
        self.ball.dx = if rng.gen_bool(0.5) {
            SERVE_SPEED
        } else {
            -SERVE_SPEED
        };
        self.ball.dy = -SERVE_SPEED;
        self.paddle.x = (FIELD_WIDTH - self.paddle.width) / 2.0;
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.phase = match outcome {
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
        };
        self.best = self.best.max(self.score);
        outcome
    }

    /// Direction flags mirror key state; the update step consumes them.
    pub fn set_left(&mut self, held: bool) {
        self.left_pressed = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.right_pressed = held;
    }

    /// One-shot paddle step for terminals that cannot report key releases.
    pub fn nudge_left(&mut self) {
        if self.phase == Phase::Running {
            self.paddle.x = (self.paddle.x - PADDLE_STEP).max(0.0);
        }
    }

    pub fn nudge_right(&mut self) {
        if self.phase == Phase::Running {
            self.paddle.x = (self.paddle.x + PADDLE_STEP).min(FIELD_WIDTH - self.paddle.width);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn remaining_bricks(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| b.status == BrickStatus::Unbroken)
            .count()
    }

    pub fn total_bricks(&self) -> u32 {
        (self.rows * self.cols) as u32
    }
}

/// Lay out the wall in column-major order; positions are assigned once and
/// never move. Brick width is derived from the column count so any
/// configured grid spans the same field.
fn layout_bricks(rows: usize, cols: usize) -> Vec<Brick> {
    let width =
        (FIELD_WIDTH - 2.0 * BRICK_OFFSET_LEFT - (cols as f32 - 1.0) * BRICK_PADDING) / cols as f32;
    let mut bricks = Vec::with_capacity(rows * cols);
    for col in 0..cols {
        for row in 0..rows {
            bricks.push(Brick {
                x: col as f32 * (width + BRICK_PADDING) + BRICK_OFFSET_LEFT,
                y: row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
                width,
                height: BRICK_HEIGHT,
                status: BrickStatus::Unbroken,
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn layout_is_column_major() {
        let bricks = layout_bricks(3, 5);
        assert_eq!(bricks.len(), 15);
        // Second entry is the same column, one row down.
        assert_eq!(bricks[1].x, bricks[0].x);
        assert_eq!(bricks[1].y, bricks[0].y + BRICK_HEIGHT + BRICK_PADDING);
        // Entry `rows` starts the next column.
        assert_eq!(bricks[3].y, bricks[0].y);
        assert!(bricks[3].x > bricks[0].x);
    }

    #[test]
    fn layout_spans_the_field() {
        let bricks = layout_bricks(3, 5);
        let last = &bricks[bricks.len() - 1];
        assert!(last.x + last.width <= FIELD_WIDTH - BRICK_OFFSET_LEFT + 0.01);
        assert_eq!(bricks[0].x, BRICK_OFFSET_LEFT);
        assert_eq!(bricks[0].y, BRICK_OFFSET_TOP);
    }

    #[test]
    fn overlapping_bricks_all_break_in_one_sweep() {
        let mut game = Game::new(3, 5, 3, &mut rng());
        // Force two bricks onto the same rectangle so one ball position
        // lands inside both.
        let (x, y) = (game.bricks[0].x, game.bricks[0].y);
        game.bricks[1].x = x;
        game.bricks[1].y = y;
        game.ball.x = x + 1.0;
        game.ball.y = y + 1.0;
        let dy = game.ball.dy;

        let broken = game.break_bricks();
        assert_eq!(broken, 2);
        assert_eq!(game.score, 2);
        // Two inversions cancel out.
        assert_eq!(game.ball.dy, dy);
        assert_eq!(game.bricks[0].status, BrickStatus::Broken);
        assert_eq!(game.bricks[1].status, BrickStatus::Broken);
    }

    #[test]
    fn brick_interior_test_is_strict() {
        let bricks = layout_bricks(3, 5);
        let b = &bricks[0];
        assert!(!b.contains(b.x, b.y + 1.0));
        assert!(!b.contains(b.x + b.width, b.y + 1.0));
        assert!(b.contains(b.x + 0.1, b.y + 0.1));
    }
}
