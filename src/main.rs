use std::io;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use brickbreak::app::App;
use brickbreak::config::Config;
use brickbreak::event::{Event, EventHandler};
use brickbreak::ui;

fn main() -> io::Result<()> {
    env_logger::init();
    let config = Config::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Key-release reporting needs the kitty keyboard protocol.
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::debug!("key release events supported: {release_events}");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app and event handler
    let mut app = App::new(&config, release_events);
    let event_handler = EventHandler::new(config.tick_rate_ms);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
