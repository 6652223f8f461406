use clap::{Parser, Subcommand};
use gurumi::{
    AppError, GurumiConfig, JsonPatternSource, PatternSource, PatternStore, Session,
    TerminalChecklist,
};
use gurumi::render::RecordingChecklist;
use gurumi::text::round_counter_text;
use gurumi::types::StepId;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "gurumi")]
#[command(about = "Crochet pattern checklists and printable PDFs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file; GURUMI_* variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a pattern to a PDF with a cover page
    Pdf {
        /// Pattern JSON file or saved project name
        pattern: String,

        /// Output file
        #[arg(short, long, default_value = "pattern.pdf")]
        output: PathBuf,

        /// Picture for the cover page
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Print the pattern as markdown-like text
    Text {
        /// Pattern JSON file or saved project name
        pattern: String,
    },

    /// Show the interactive checklist
    Checklist {
        /// Pattern JSON file or saved project name
        pattern: String,

        /// Print checklist widgets as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Expand the round range in a line into counters
    Counter { line: String },

    /// Save a pattern into the inventory
    Save {
        /// Pattern JSON file
        pattern: PathBuf,

        /// Picture to store with the project
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// List saved projects
    #[command(alias = "ls")]
    List,

    /// Check or uncheck a step of a saved project
    Toggle {
        /// Saved project name
        name: String,

        /// Step id such as 0_2
        step: StepId,
    },
}

fn load_config(path: Option<&Path>) -> Result<GurumiConfig, AppError> {
    let base = match path {
        Some(path) => GurumiConfig::from_file(path)?,
        None => GurumiConfig::default(),
    };
    base.with_overrides(|key| std::env::var(key).ok())
}

/// A pattern file on disk, otherwise a saved project of that name.
fn open_session(pattern: &str, store: &PatternStore) -> Result<Session, AppError> {
    if Path::new(pattern).is_file() {
        let record = JsonPatternSource::from_path(pattern).load()?;
        Ok(Session::with_pattern(record))
    } else {
        let mut session = Session::new();
        session.load(store, pattern)?;
        Ok(session)
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_deref())?;
    let store = PatternStore::new(&config.save_dir);

    match cli.command {
        Commands::Pdf {
            pattern,
            output,
            image,
        } => {
            let mut session = open_session(&pattern, &store)?;
            if let Some(image) = image {
                session.set_picture(Some(std::fs::read(image)?));
            }
            let bytes = session.render_pdf(&config)?;
            std::fs::write(&output, bytes)?;
            println!("Wrote {}", output.display());
        }
        Commands::Text { pattern } => {
            print!("{}", open_session(&pattern, &store)?.text()?);
        }
        Commands::Checklist { pattern, json } => {
            let session = open_session(&pattern, &store)?;
            if json {
                let recorded = session.render_checklist(RecordingChecklist::new())?;
                println!("{}", serde_json::to_string_pretty(&recorded)?);
            } else {
                let stdout = std::io::stdout();
                let color = stdout.is_terminal();
                let host = TerminalChecklist::new(stdout.lock()).with_color(color);
                session.render_checklist(host)?;
            }
        }
        Commands::Counter { line } => match round_counter_text(&line) {
            Some(counter) => println!("{}", counter),
            None => println!("No round range found"),
        },
        Commands::Save { pattern, image } => {
            let mut session = Session::with_pattern(JsonPatternSource::from_path(&pattern).load()?);
            if let Some(image) = image {
                session.set_picture(Some(std::fs::read(image)?));
            }
            let path = session.save(&store)?;
            println!("Saved {}", path.display());
        }
        Commands::List => {
            let saved = store.list()?;
            if saved.is_empty() {
                println!("No saved projects in {}", store.dir().display());
            }
            for entry in saved {
                println!("{:<24} {}", entry.name, entry.title);
            }
        }
        Commands::Toggle { name, step } => {
            let mut session = Session::new();
            session.load(&store, &name)?;
            let checked = session.toggle(step)?;
            session.save(&store)?;
            println!("{} {}", step, if checked { "done" } else { "open" });
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
