//! Censusplot - an interactive terminal scatter plot of census survey data.

use anyhow::Result;
use censusplot::app::{Action, App};
use censusplot::data::{XField, YField};
use censusplot::ui;
use censusplot::util::ChartConfig;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const IDLE_POLL: Duration = Duration::from_millis(100);
const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "censusplot")]
#[command(about = "An interactive terminal scatter plot of per-state census data", long_about = None)]
struct Args {
    /// Path to the survey CSV file
    #[arg(default_value = "assets/data/data.csv")]
    file: PathBuf,

    /// Initial X axis field
    #[arg(long, value_enum, default_value_t = XField::Poverty)]
    x: XField,

    /// Initial Y axis field
    #[arg(long, value_enum, default_value_t = YField::Healthcare)]
    y: YField,

    /// Axis switch animation length in milliseconds (0 disables it)
    #[arg(long, default_value_t = 2000)]
    duration_ms: u64,

    /// Print every state's tooltip for the chosen axes and exit
    #[arg(long)]
    dump: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Censusplot");
    }

    // Validate path
    if !args.file.exists() {
        eprintln!("Error: Path not found: {}", args.file.display());
        std::process::exit(1);
    }

    let config = ChartConfig {
        transition: Duration::from_millis(args.duration_ms),
        ..ChartConfig::default()
    };

    let app = match App::load(&args.file, config, args.x, args.y) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Error loading file: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    if args.dump {
        for index in 0..app.chart.data().len() {
            if let Some(tooltip) = app.chart.tooltip(index) {
                println!("{}", tooltip.lines().join(" | "));
            }
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Censusplot exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, &mut app, now))?;

        let timeout = if app.chart.is_animating(now) {
            FRAME_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key, now) == Action::Quit {
                        return Ok(());
                    }
                },
                Event::Mouse(mouse) => app.handle_mouse(mouse, now),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {},
            }
        }
    }
}
