use std::io::{self, Stderr};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::bail;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tokio::runtime::{self, Runtime};

use ikigai::app::App;
use ikigai::classify;
use ikigai::cli::{Cli, Command};
use ikigai::config::SearchConfig;
use ikigai::logging;
use ikigai::suggest::{self, FetchOutcome, HttpSuggestionSource};

type StderrTerminal = Terminal<CrosstermBackend<Stderr>>;

/// How long to wait for input before checking for fetched suggestions
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init();

    let loaded = cli.load_config();
    let search = loaded.config.search;

    match &cli.command {
        Some(command @ Command::Resolve { .. }) => {
            if let Some(warning) = &loaded.warning {
                eprintln!("warning: {}", warning);
            }
            resolve(&command.query(), &search)
        }
        Some(command @ Command::Suggest { .. }) => {
            if let Some(warning) = &loaded.warning {
                eprintln!("warning: {}", warning);
            }
            suggest(&command.query(), &search)
        }
        None => run_interactive(&search, loaded.warning),
    }
}

fn resolve(query: &str, search: &SearchConfig) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Nothing to resolve: the query is empty");
    }

    let target = classify::resolve(query, &search.fallback_search_url);
    println!("{}", target.url);
    Ok(())
}

fn suggest(query: &str, search: &SearchConfig) -> Result<()> {
    let runtime = build_runtime()?;
    let source = HttpSuggestionSource::new(search)?;

    match runtime.block_on(suggest::fetch_outcome(&source, query.trim())) {
        FetchOutcome::Suggestions(phrases) => {
            for phrase in phrases {
                println!("{}", phrase);
            }
            Ok(())
        }
        FetchOutcome::Empty => Ok(()),
        FetchOutcome::Failed(e) => Err(e.into()),
    }
}

fn run_interactive(search: &SearchConfig, warning: Option<String>) -> Result<()> {
    let runtime = build_runtime()?;
    let source = HttpSuggestionSource::new(search)?;

    let mut app = App::new(source, search, runtime.handle().clone());
    if let Some(warning) = warning {
        app.set_status(warning);
    }

    install_panic_hook();
    let mut terminal = init_terminal()?;

    let result = run(&mut terminal, &mut app);

    // Restore before any error report reaches the screen
    restore_terminal()?;
    result?;

    // stdout carries only the URL so the caller can open it
    if let Some(url) = app.navigation_url() {
        println!("{}", url);
    }
    Ok(())
}

fn run(terminal: &mut StderrTerminal, app: &mut App<HttpSuggestionSource>) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        app.poll_suggestions();

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn build_runtime() -> io::Result<Runtime> {
    runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
}

/// Draw on stderr so stdout stays free for the chosen URL
fn init_terminal() -> io::Result<StderrTerminal> {
    terminal::enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(stderr))
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        io::stderr(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen,
        ratatui::crossterm::cursor::Show
    )
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}
