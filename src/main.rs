mod app;
mod cascade;
mod config;
mod dataset;
mod error;
mod events;
mod handlers;
mod log;
mod picker;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{EventStream, EnableMouseCapture, DisableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use app::App;
use cascade::{CascadingDropdown, SelectionState};
use config::Config;
use dataset::{Dataset, parse_selection_arg};
use events::EventHandler;

const USAGE: &str = "\
Usage: cascader [DATA_FILE] [OPTIONS]

Pick values level by level from a cascading dropdown. The final
selection is printed as JSON on exit.

Arguments:
  DATA_FILE                  Options file (.toml or .json); built-in demo data if omitted

Options:
  -s, --select LEVEL=VALUE   Initial selection (repeatable)
  -o, --output PATH          Write the final selection to PATH instead of stdout
      --placeholder TEXT     Text of the \"no selection\" entry
  -h, --help                 Show this help
";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    data_file: Option<PathBuf>,
    selections: Vec<(String, String)>,
    output: Option<PathBuf>,
    placeholder: Option<String>,
    show_help: bool,
}

fn parse_args(args: &[String]) -> error::Result<CliArgs> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let value = args.get(i + 1);

        match arg {
            "--help" | "-h" => cli.show_help = true,
            "--select" | "-s" => {
                let value = value.ok_or_else(|| format!("{} requires LEVEL=VALUE", arg))?;
                let pair = parse_selection_arg(value)
                    .ok_or_else(|| format!("expected LEVEL=VALUE, got '{}'", value))?;
                cli.selections.push(pair);
                i += 1;
            }
            "--output" | "-o" => {
                let value = value.ok_or_else(|| format!("{} requires a path", arg))?;
                cli.output = Some(PathBuf::from(value));
                i += 1;
            }
            "--placeholder" => {
                let value = value.ok_or("--placeholder requires a value")?;
                cli.placeholder = Some(value.clone());
                i += 1;
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{}'", flag).into());
            }
            path => {
                if cli.data_file.is_some() {
                    return Err(format!("unexpected argument '{}'", path).into());
                }
                cli.data_file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if cli.show_help {
        print!("{}", USAGE);
        return Ok(());
    }

    // Precedence: CLI > env var > config file > defaults
    let config = Config::load().with_overrides(cli.data_file.clone(), cli.placeholder.clone());

    let (dataset, source) = load_dataset(&config, cli.selections)?;

    // The dropdown reports each change on this channel
    let (change_tx, change_rx) = mpsc::unbounded_channel::<SelectionState>();
    let dropdown = CascadingDropdown::new(
        dataset.options,
        dataset.hierarchy,
        dataset.selection,
        Box::new(move |previous| {
            let _ = change_tx.send(previous);
        }),
    );
    log::log_selection("initial selection", dropdown.current_selection());

    if dropdown.hierarchy().is_empty() {
        log::log("Hierarchy is empty, nothing to select");
    }
    for level in dropdown.hierarchy() {
        if dropdown.options_for(level).is_empty() {
            log::log(&format!("Level '{}' has no options", level));
        }
    }

    let mut app = App::new(dropdown, config.placeholder(), source, config.show_change_log());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, change_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    write_selection(app.final_selection(), cli.output.as_deref())?;

    Ok(())
}

/// Load the configured dataset (or the demo) and overlay `--select` pairs.
///
/// Returns the dataset and a description of where it came from.
fn load_dataset(
    config: &Config,
    selections: Vec<(String, String)>,
) -> error::Result<(Dataset, String)> {
    let (dataset, source) = match config.data_file() {
        Some(path) => {
            log::log(&format!("Loading options from {}", path.display()));
            (Dataset::load(&path)?, path.display().to_string())
        }
        None => (Dataset::demo(), "built-in demo".to_string()),
    };
    Ok((dataset.with_selection(selections), source))
}

/// Print the selection as pretty JSON, or write it to `output`.
fn write_selection(selection: &SelectionState, output: Option<&Path>) -> error::Result<()> {
    let json = serde_json::to_string_pretty(selection)?;
    log::log(&format!("Final selection: {}", json));
    match output {
        Some(path) => std::fs::write(path, format!("{}\n", json))?,
        None => println!("{}", json),
    }
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut change_rx: mpsc::UnboundedReceiver<SelectionState>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        handlers::dispatch(app, action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some(previous) = change_rx.recv() => {
                app.record_change(previous);
            }
        }

        // Notifications raised by the action just handled
        while let Ok(previous) = change_rx.try_recv() {
            app.record_change(previous);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse_args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = parse_args(&args(&[
            "regions.toml",
            "-s",
            "country=usa",
            "--select",
            "state=texas",
            "--output",
            "out.json",
            "--placeholder",
            "(none)",
        ]))
        .unwrap();

        assert_eq!(cli.data_file, Some(PathBuf::from("regions.toml")));
        assert_eq!(
            cli.selections,
            vec![
                ("country".to_string(), "usa".to_string()),
                ("state".to_string(), "texas".to_string()),
            ]
        );
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.placeholder.as_deref(), Some("(none)"));
        assert!(!cli.show_help);
    }

    #[test]
    fn test_parse_help() {
        assert!(parse_args(&args(&["-h"])).unwrap().show_help);
    }

    #[test]
    fn test_load_dataset_from_cli_file_applies_selections() {
        let path = std::env::temp_dir().join(format!("cascader_main_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "hierarchy": ["size"], "options": {} }"#).unwrap();
        let config = Config::default().with_overrides(Some(path.clone()), None);

        let result = load_dataset(&config, vec![("size".to_string(), "xl".to_string())]);
        let _ = std::fs::remove_file(&path);

        let (dataset, source) = result.unwrap();
        assert_eq!(dataset.hierarchy, ["size"]);
        assert_eq!(dataset.selection["size"], "xl");
        assert_eq!(source, path.display().to_string());
    }

    #[test]
    fn test_load_dataset_reports_missing_file() {
        let config = Config::default()
            .with_overrides(Some(PathBuf::from("/nonexistent/cascader/data.toml")), None);

        let err = load_dataset(&config, vec![]).unwrap_err();
        assert!(matches!(err, error::CascaderError::Dataset(_)));
    }

    #[test]
    fn test_write_selection_to_file() {
        let path = std::env::temp_dir().join(format!("cascader_out_{}.json", std::process::id()));
        let mut selection = SelectionState::new();
        selection.insert("country".to_string(), "usa".to_string());

        write_selection(&selection, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let parsed: SelectionState = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, selection);
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_write_selection_reports_io_error() {
        let err = write_selection(
            &SelectionState::new(),
            Some(Path::new("/nonexistent/cascader/out.json")),
        )
        .unwrap_err();
        assert!(matches!(err, error::CascaderError::Io(_)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--select"])).is_err());
        assert!(parse_args(&args(&["--select", "country"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
        assert!(parse_args(&args(&["a.toml", "b.toml"])).is_err());
    }
}
