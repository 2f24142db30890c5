mod animation;
mod config;
mod error;
mod i18n;
mod keybindings;
mod logging;
mod services;
mod ui;
mod utils;

use std::cell::RefCell;
use std::env;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Settings;
use crate::services::storage::{FileStorage, MemoryStorage, SharedStorage};
use crate::ui::app::{App, StartupOverrides};
use crate::ui::style_env::StyleEnvironment;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("portfolio {} - Animated terminal portfolio page", VERSION);
    println!();
    println!("USAGE:");
    println!("    portfolio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help              Print help information");
    println!("    -v, --version           Print version information");
    println!("    --lang <TAG>            Start in a language (ru, en)");
    println!("    --theme <ID>            Start with a palette (green, red, blue, dark)");
    println!("    --memory                Do not read or write the preference file");
    println!();
    println!("Set PORTFOLIO_DEBUG=1 or RUST_LOG to write ~/.portfolio/debug/portfolio.log");
}

fn print_version() {
    println!("portfolio {}", VERSION);
}

/// What the command line asked for.
#[derive(Debug, Default, PartialEq)]
enum Command {
    #[default]
    Run,
    Help,
    Version,
}

#[derive(Debug, Default)]
struct Options {
    command: Command,
    startup: StartupOverrides,
    memory: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => opts.command = Command::Help,
            "-v" | "--version" => opts.command = Command::Version,
            "--memory" => opts.memory = true,
            "--lang" => {
                let tag = iter.next().ok_or("--lang requires a language tag")?;
                opts.startup.language = Some(tag.clone());
            }
            "--theme" => {
                let id = iter.next().ok_or("--theme requires a palette id")?;
                opts.startup.theme = Some(id.clone());
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(opts)
}

fn open_storage(memory: bool) -> SharedStorage {
    if memory {
        return MemoryStorage::new().shared();
    }
    match Settings::preferences_path() {
        Some(path) => Rc::new(RefCell::new(FileStorage::open(path))),
        None => {
            tracing::warn!("no home directory, preferences will not be kept");
            MemoryStorage::new().shared()
        }
    }
}

fn main() -> io::Result<()> {
    // Handle command line arguments
    let args: Vec<String> = env::args().collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Use --help for usage information");
            return Ok(());
        }
    };
    match opts.command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Version => {
            print_version();
            return Ok(());
        }
        Command::Run => {}
    }

    if let Err(e) = logging::init() {
        eprintln!("Warning: debug log unavailable: {}", e);
    }

    let settings = Settings::load();
    let storage = open_storage(opts.memory);
    let mut app = App::new(settings, storage, StyleEnvironment::detect(), opts.startup);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Clear screen before entering alternate screen
    execute!(
        stdout,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0),
        crossterm::cursor::Show
    )?;

    if let Err(err) = result {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let frame = Duration::from_millis(app.settings.tick_rate_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw::draw(f, app))?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, key.modifiers);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::FocusLost => app.handle_focus_lost(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= frame {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            app.tick(dt);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
