use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::collections::HashSet;
use std::io::stdout;
use std::path::PathBuf;

mod app;
mod choice;
mod config;
mod error;
mod load;
mod picker;
#[cfg(test)]
mod test_utils;
mod theme;

use app::App;
use choice::{BuildError, ChoiceSet};
use config::OutputFormat;
use error::MultipickError;
use picker::SessionOutcome;

/// Interactive multi-select picker
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive multi-select picker for the terminal"
)]
struct Args {
    /// File with one choice per line (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Choice to preselect (repeatable)
    #[arg(long = "selected", value_name = "CHOICE")]
    selected: Vec<String>,

    /// Output format for the applied selection
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Title shown above the list
    #[arg(long, default_value = "Pick")]
    title: String,
}

fn main() -> Result<()> {
    // Writes to /tmp/multipick-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/multipick-debug.log")
            .expect("Failed to open /tmp/multipick-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== MULTIPICK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Everything that can reject caller input runs before the terminal is
    // touched, so errors come out as plain stderr lines.
    let choices = build_choice_set(&args)?;

    let terminal = init_terminal()?;

    let mut app = App::new(choices, &config_result.config);
    app.title = args.title;
    if let Some(format) = args.format {
        app.output_format = format;
    }
    app.warning = config_result.warning;

    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app);

    #[cfg(debug_assertions)]
    log::debug!("=== MULTIPICK DEBUG SESSION ENDED ===");

    Ok(())
}

/// Read candidates and presets into a validated choice set
fn build_choice_set(args: &Args) -> Result<ChoiceSet<String>, MultipickError> {
    let lines = load::read_choices(args.input.as_deref())?;

    for preselect in &args.selected {
        if !lines.contains(preselect) {
            return Err(MultipickError::UnknownPreselect(preselect.clone()));
        }
    }

    let pairs: Vec<(String, bool)> = lines
        .iter()
        .map(|line| (line.clone(), args.selected.contains(line)))
        .collect();

    ChoiceSet::with_preset(pairs).map_err(|e| match e {
        BuildError::TooFew => MultipickError::TooFewChoices(lines.len()),
        BuildError::NotDistinct => {
            MultipickError::DuplicateChoice(first_duplicate(&lines).unwrap_or_default())
        }
    })
}

/// First value that repeats in `lines`, for the error message
fn first_duplicate(lines: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .find(|line| !seen.insert(line.as_str()))
        .cloned()
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Print the applied selection after the terminal is restored
fn handle_output(app: &App) {
    match app.outcome() {
        Some(SessionOutcome::Applied(pairs)) => match app.output_format {
            OutputFormat::Plain => {
                for (choice, selected) in pairs {
                    if *selected {
                        println!("{}", choice);
                    }
                }
            }
            OutputFormat::Json => {
                let report: Vec<serde_json::Value> = pairs
                    .iter()
                    .map(|(choice, selected)| {
                        serde_json::json!({ "choice": choice, "selected": selected })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(report));
            }
        },
        Some(SessionOutcome::Cancelled) | None => {
            // Backed out; nothing to report
        }
    }
}
