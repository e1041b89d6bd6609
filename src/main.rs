use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gridgame::config::{self, Command, HELP_TEXT};
use gridgame::constants::POLL_INTERVAL_MS;
use gridgame::input::map_key;
use gridgame::utils::build_info;
use gridgame::{logging, ui, App, GameConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            println!("{}", HELP_TEXT);
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'gridgame --help' for usage.");
            std::process::exit(1);
        }
    };

    if logging::wanted(config.log_file.is_some()) {
        if let Err(e) = logging::init(&config.log_path()) {
            eprintln!(
                "Warning: could not open log file {}: {}",
                config.log_path().display(),
                e
            );
        }
    }
    log::info!(
        "starting {} ({}x{} board, {} difficulty)",
        build_info::version_line(),
        config.size,
        config.size,
        config.difficulty
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    log::info!("exiting");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: GameConfig) -> io::Result<()> {
    let mut app = App::new(config);

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = map_key(key_event) {
                    app.handle_input(input);
                }
            }
        }
    }

    Ok(())
}
