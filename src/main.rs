use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use medialib_tree::app::cli::Args;
use medialib_tree::app::config::{AppConfig, PersistentState, UserConfig};
use medialib_tree::app::events::{AppEvent, Command};
use medialib_tree::app::{input_handler, App};
use medialib_tree::export::{self, PrintFormat};
use medialib_tree::logging;
use medialib_tree::medialib::{MediaLibrary, Scanner};
use medialib_tree::tree::TreeNode;
use medialib_tree::ui::{self, guides::TreeGuides, theme};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        println!("{}", toml::to_string_pretty(&UserConfig::default())?);
        return Ok(());
    }

    let config = AppConfig::new(args.config_dir.clone());
    // Logging needs the config first; a broken config is reported once it is up
    let (user, config_error) = match config.load_user() {
        Ok(user) => (user, None),
        Err(e) => (UserConfig::default(), Some(e)),
    };
    let state = config.load_state();

    let _log_guard = match logging::init(&config.log_dir(), &user.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };
    if let Some(e) = config_error {
        warn!("Using default configuration: {:#}", e);
    }

    let roots: Vec<PathBuf> = if args.music_dirs.is_empty() {
        user.music_roots()
    } else {
        args.music_dirs.clone()
    };
    let index = args
        .index
        .or(state.last_index)
        .unwrap_or(user.default_index);
    let scanner = Scanner::new(&user.extensions);
    info!(?roots, %index, "Starting");

    if let Some(format) = args.print {
        let library = MediaLibrary::scan(roots, &scanner)?;
        let list = library.filtered_list(index, args.filter.as_deref().unwrap_or_default());
        let root = TreeNode::root(&list);
        let mut out = io::stdout().lock();
        match format {
            PrintFormat::Text => export::write_text(&root, &mut out, TreeGuides::Unicode)?,
            PrintFormat::Json => export::write_json(&root, &mut out)?,
        }
        return Ok(());
    }

    let mut app = App::new(&user, index, theme::load_theme(&config.theme_path()));
    if let Some(query) = args.filter {
        app.filter_query = query;
        app.apply_filter();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app, roots, scanner).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let state = PersistentState {
        last_index: Some(app.index),
    };
    if let Err(e) = config.save_state(&state) {
        warn!("Failed to save state: {:#}", e);
    }

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    roots: Vec<PathBuf>,
    scanner: Scanner,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Tick Task (toast expiry, animation)
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_RATE);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    // 3. Initial scan
    spawn_scan(tx.clone(), roots.clone(), scanner.clone());
    app.scanning = true;

    loop {
        terminal
            .draw(|f| ui::ui(f, app))
            .context("Failed to draw frame")?;

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(Command::Rescan) = input_handler::handle_key(key, app) {
                    app.scanning = true;
                    spawn_scan(tx.clone(), roots.clone(), scanner.clone());
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::LibraryScanned(result) => {
                app.scanning = false;
                match result {
                    Ok(library) => {
                        let count = library.len();
                        app.set_library(library);
                        app.show_toast(&format!("📚 {} tracks", count));
                    }
                    Err(e) => {
                        error!("Scan failed: {}", e);
                        app.show_toast(&format!("❌ {}", e));
                    }
                }
            }
            AppEvent::Tick => app.on_tick(),
        }

        if !app.is_running {
            break;
        }
    }

    Ok(())
}

/// Walk the music roots on the blocking pool and report back over `tx`.
fn spawn_scan(tx: mpsc::Sender<AppEvent>, roots: Vec<PathBuf>, scanner: Scanner) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || MediaLibrary::scan(roots, &scanner)).await;
        let event = match result {
            Ok(scan) => AppEvent::LibraryScanned(scan.map_err(|e| e.to_string())),
            Err(e) => AppEvent::LibraryScanned(Err(format!("Scan task failed: {}", e))),
        };
        let _ = tx.send(event).await;
    });
}
