use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pdf_quiz::config::DEFAULT_API_URL;
use pdf_quiz::logging::{self, LogTarget};
use pdf_quiz::{App, ClientConfig, Difficulty, HttpBackend, QuizError, QuizOptions, QuizType};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pdf-quiz", version, about = "Turn a PDF into a timed quiz")]
struct Args {
    /// Base URL of the quiz backend
    #[arg(long, global = true, env = "PDF_QUIZ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where to write logs; `-` for stderr
    #[arg(long, global = true, env = "PDF_QUIZ_LOG")]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive quiz in the terminal (default)
    Play,
    /// Print what the backend finds in a PDF as JSON
    Analyze {
        pdf: PathBuf,
    },
    /// Generate a quiz from a PDF and print it as JSON
    Generate {
        pdf: PathBuf,
        #[arg(long = "type", default_value_t = QuizType::MultipleChoice)]
        quiz_type: QuizType,
        #[arg(long, default_value_t = 5)]
        count: u32,
        #[arg(long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        /// Write the quiz here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    let command = args.command.unwrap_or(Command::Play);

    // The TUI owns the terminal, so only one-shot commands default to stderr.
    let target = match (&args.log_file, &command) {
        (Some(value), _) => LogTarget::parse(value),
        (None, Command::Play) => LogTarget::default(),
        (None, _) => LogTarget::Stderr,
    };
    let default_level = match command {
        Command::Play => "info",
        _ => "warn",
    };
    logging::init(&target, default_level)?;

    let config = ClientConfig::new(&args.api_url)?;
    let backend = HttpBackend::new(&config)?;
    info!(api_url = config.api_url(), "backend configured");

    match command {
        Command::Play => pdf_quiz::client::run(backend, App::new()).await,
        Command::Analyze { pdf } => {
            let analysis = pdf_quiz::commands::analyze(&backend, &pdf).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }
        Command::Generate {
            pdf,
            quiz_type,
            count,
            difficulty,
            output,
        } => {
            let options = QuizOptions::new(quiz_type, count, difficulty);
            let quiz = pdf_quiz::commands::generate(&backend, &pdf, &options).await?;
            let json = serde_json::to_string_pretty(&quiz)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    info!(path = %path.display(), "quiz written");
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}
