//! jj-gui - commit log viewer and description editor for Jujutsu
//!
//! Binary entry point: terminal UI by default, `--html` for a one-shot
//! page dump.

use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use jj_gui::app::App;
use jj_gui::config::{self, ResolvedConfig};
use jj_gui::controller::{Controller, LogStatus, Msg, Runtime, SystemHost};
use jj_gui::logging;
use jj_gui::prefs::{self, FileStore};

/// Upper bound on waiting for jj in `--html` mode
const HTML_TIMEOUT: Duration = Duration::from_secs(30);

/// Event poll timeout; also bounds how long a finished request waits to be shown
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "jj-gui")]
#[command(version)]
#[command(about = "Browse a Jujutsu repository's log and edit change descriptions")]
pub struct Args {
    /// Repository to open (defaults to the last one opened)
    pub repo: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the log display as an HTML page and exit
    #[arg(long)]
    pub html: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

/// What to show first
struct Startup {
    /// Restored from preferences
    last_repo: Option<String>,
    /// Given on the command line; opened like a picked directory
    explicit_repo: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = config::load_config(args.config.clone())?;
    logging::init(&config.log_file_path)?;
    info!(?config, "configuration loaded");

    let store = FileStore::open(&config.preferences_path);
    let widths = prefs::load_column_widths(&store);
    let startup = Startup {
        last_repo: prefs::load_last_repo(&store),
        explicit_repo: args.repo.map(absolute_path),
    };

    let controller = Controller::new(widths);
    let runtime = Runtime::new(Arc::new(host(&config)), Box::new(store));

    if args.html {
        return print_html(controller, runtime, startup);
    }

    let mut app = App::new(controller, runtime);
    app.mouse = config.mouse && !args.no_mouse;
    run_tui(app, startup)
}

fn host(config: &ResolvedConfig) -> SystemHost {
    SystemHost::new(
        &config.jj_command,
        &config.screenshot_command,
        &config.screenshot_dir,
    )
}

fn absolute_path(path: PathBuf) -> String {
    std::fs::canonicalize(&path)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Load the log once and print the resulting page to stdout
fn print_html(
    mut controller: Controller,
    mut runtime: Runtime,
    startup: Startup,
) -> color_eyre::Result<()> {
    let mut pending = match startup.explicit_repo {
        Some(path) => controller.update(Msg::OpenRepository(path)),
        None => controller.startup(startup.last_repo),
    };

    loop {
        for effect in pending.drain(..) {
            runtime.execute(effect);
        }
        if *controller.log_status() != LogStatus::Loading {
            break;
        }
        let Some(msg) = runtime.recv_timeout(HTML_TIMEOUT) else {
            warn!("gave up waiting for the log");
            break;
        };
        pending = controller.update(msg);
    }

    println!("{}", controller.render_page());
    Ok(())
}

fn run_tui(mut app: App, startup: Startup) -> color_eyre::Result<()> {
    let mut terminal = ratatui::init();
    let mouse = app.mouse;
    if mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }
    let _restore = scopeguard::guard((), move |_| {
        if mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();
    });

    match startup.explicit_repo {
        Some(path) => {
            app.start(None);
            app.dispatch(Msg::OpenRepository(path));
        }
        None => app.start(startup.last_repo),
    }

    run(&mut terminal, &mut app)
}

/// Run the application's main loop.
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(app)?;
    }
    Ok(())
}

/// Handle crossterm events, then apply finished background requests.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(POLL_INTERVAL)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key_event(key),
            Event::Mouse(mouse) => app.on_mouse_event(mouse),
            _ => {}
        }
    }
    app.pump();
    Ok(())
}
