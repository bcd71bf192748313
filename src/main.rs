use std::error::Error;
use std::io;
use std::process::ExitCode;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use protcalc::{
    App,
    config::{Cli, Settings},
    logging::{init_logging, log_critical_error, log_directory, log_shutdown, log_system_info, set_log_level},
    ui::{plain_report_for, render_ui},
};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    human_panic::setup_panic!();

    let settings = Settings::from_cli(Cli::parse());
    set_log_level(&settings.log_level);
    if let Err(e) = init_logging(&log_directory()) {
        log_critical_error(&e.to_string(), Some("logging"));
    }
    log_system_info();

    let result = if settings.plain {
        run_plain(&settings.initial_sequence)
    } else {
        run_interactive(&settings.initial_sequence).map(|()| ExitCode::SUCCESS)
    };

    if let Err(e) = &result {
        log_critical_error(&e.to_string(), Some(if settings.plain { "plain" } else { "terminal" }));
    }
    log_shutdown();
    result
}

fn run_plain(sequence: &str) -> Result<ExitCode, Box<dyn Error>> {
    match plain_report_for(sequence) {
        Ok(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            warn!("Rejected sequence: {e}");
            eprintln!("error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_interactive(initial_sequence: &str) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(initial_sequence);
    info!("Interactive session started");
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
