use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::{
    Brick, BrickStatus, Game, Phase, BRICK_HEIGHT, BRICK_OFFSET_TOP, BRICK_PADDING, FIELD_HEIGHT,
    FIELD_WIDTH, PADDLE_HEIGHT,
};

const BG: Color = Color::Rgb(10, 10, 20);
const WALL: Color = Color::Rgb(60, 60, 80);

/// Pure read of the app state: nothing here mutates the game.
pub fn render(frame: &mut Frame, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 🧱 Brickbreak ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, app, chunks[0]);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    let lines = render_field(&app.game, fw, fh);
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_help(frame, app, chunks[2]);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let status = Line::from(vec![
        Span::styled(" 🧱 ", Style::default()),
        Span::styled(
            format!("Score: {} ", game.score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Lives: {} ", "♥ ".repeat(game.lives as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("🏆 Best: {} ", game.best),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "Bricks: {}/{} ",
                game.remaining_bricks(),
                game.total_bricks()
            ),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn brick_color(brick: &Brick) -> Color {
    let colors = [
        Color::Rgb(220, 50, 50),  // Red
        Color::Rgb(220, 130, 30), // Orange
        Color::Rgb(220, 200, 30), // Yellow
        Color::Rgb(50, 200, 50),  // Green
        Color::Rgb(50, 130, 220), // Blue
        Color::Rgb(150, 50, 220), // Purple
    ];
    let row = ((brick.y - BRICK_OFFSET_TOP) / (BRICK_HEIGHT + BRICK_PADDING)) as usize;
    colors[row % colors.len()]
}

/// Scale the logical playfield onto a character grid.
fn render_field(game: &Game, w: usize, h: usize) -> Vec<Line<'static>> {
    if w < 2 || h < 2 {
        return Vec::new();
    }

    let sx = w as f32 / FIELD_WIDTH;
    let sy = h as f32 / FIELD_HEIGHT;

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(BG)); w]; h];

    // Walls
    for row in grid.iter_mut() {
        row[0] = ('│', Style::default().fg(WALL).bg(BG));
        row[w - 1] = ('│', Style::default().fg(WALL).bg(BG));
    }
    for x in 0..w {
        grid[0][x] = ('─', Style::default().fg(WALL).bg(BG));
    }
    grid[0][0] = ('╭', Style::default().fg(WALL).bg(BG));
    grid[0][w - 1] = ('╮', Style::default().fg(WALL).bg(BG));

    // Bricks
    for brick in game.bricks() {
        if brick.status == BrickStatus::Broken {
            continue;
        }
        let bx_start = (brick.x * sx) as usize;
        let bx_end = ((brick.x + brick.width) * sx) as usize;
        let by_start = (brick.y * sy) as usize;
        let by_end = (((brick.y + brick.height) * sy) as usize).max(by_start + 1);
        let color = brick_color(brick);

        for by in by_start..by_end.min(h) {
            for bx in bx_start..bx_end.min(w) {
                let ch = if bx == bx_start {
                    '▐'
                } else if bx + 1 >= bx_end.min(w) {
                    '▌'
                } else {
                    '█'
                };
                grid[by][bx] = (ch, Style::default().fg(color).bg(BG));
            }
        }
    }

    // Paddle
    let px_start = (game.paddle.x * sx) as usize;
    let px_end = ((game.paddle.x + game.paddle.width) * sx) as usize;
    let py = (((FIELD_HEIGHT - PADDLE_HEIGHT) * sy) as usize).min(h - 1);
    for px in px_start..px_end.min(w) {
        let ch = if px == px_start {
            '╣'
        } else if px + 1 >= px_end.min(w) {
            '╠'
        } else {
            '═'
        };
        grid[py][px] = (
            ch,
            Style::default()
                .fg(Color::Rgb(180, 200, 255))
                .bg(Color::Rgb(30, 50, 120))
                .add_modifier(Modifier::BOLD),
        );
    }

    // Ball and a one-cell trail
    let bx = (game.ball.x * sx) as usize;
    let by = (game.ball.y * sy) as usize;
    if bx < w && by < h {
        grid[by][bx] = (
            '●',
            Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .bg(BG)
                .add_modifier(Modifier::BOLD),
        );
        let tx = ((game.ball.x - game.ball.dx * 2.0) * sx) as usize;
        let ty = ((game.ball.y - game.ball.dy * 2.0) * sy) as usize;
        if tx < w && ty < h && (tx != bx || ty != by) {
            grid[ty][tx] = ('·', Style::default().fg(Color::Rgb(100, 100, 120)).bg(BG));
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.game.phase {
        Phase::Lost => Line::from(vec![
            Span::styled(
                " 💀 GAME OVER! ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Press ENTER to restart, Q to quit",
                Style::default().fg(Color::Gray),
            ),
        ]),
        Phase::Won => Line::from(vec![
            Span::styled(
                " 🎉 YOU WIN! ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "Score: {} │ Press ENTER to play again",
                    app.game.score
                ),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Phase::Paused => Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press SPACE to resume ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Phase::Running => Line::from(vec![
            Span::styled(" ←→ Move Paddle ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("SPACE Pause ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("R Restart ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
