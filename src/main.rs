use std::path::PathBuf;

use anyhow::Context;
use chillquill::protocol::{Conversation, prompts};
use chillquill::{
    Mascot, Quiz, STDIN_PATH, Settings, export_questions_json, extract_questions, markdown,
    quiz, read_text, render_response,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file (defaults to <config dir>/chillquill/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Assistant personality: chillian or oldgrumps
    #[arg(long, global = true)]
    mascot: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render assistant text as markup
    Render {
        /// Text file to read ("-" for stdin)
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,
    },
    /// Render assistant text as an interactive quiz when it is one, markup otherwise
    Respond {
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,
    },
    /// Print the questions extracted from assistant text as JSON
    Parse {
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,
    },
    /// Print interactive quiz markup, falling back to plain markup
    Html {
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,
    },
    /// Take a quiz in the terminal
    Take {
        /// Assistant text, or exported JSON with --json
        file: PathBuf,

        /// Read questions exported by `parse`
        #[arg(long)]
        json: bool,
    },
    /// Print the chat request body that would be sent to the assistant proxy
    Request {
        #[arg(value_enum)]
        kind: RequestKind,

        /// Note content ("-" for stdin)
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,

        /// Chat message (for `chat`)
        #[arg(long, default_value = "")]
        message: String,

        /// Number of questions (for `quiz`)
        #[arg(long, default_value_t = 5)]
        questions: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RequestKind {
    Chat,
    Enhance,
    Quiz,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(mascot) = &args.mascot {
        settings.mascot = Mascot::from_preference(mascot);
    }

    match args.command {
        Command::Render { file } => {
            println!("{}", markdown::render(&read_text(&file)?));
        }
        Command::Respond { file } => {
            println!("{}", render_response(&read_text(&file)?).markup());
        }
        Command::Parse { file } => {
            let questions = extract_questions(&read_text(&file)?);
            println!("{}", export_questions_json(&questions)?);
        }
        Command::Html { file } => {
            let text = read_text(&file)?;
            let questions = extract_questions(&text);
            if questions.is_empty() {
                println!("{}", markdown::render(&text));
            } else {
                println!("{}", quiz::html::render_quiz(&questions));
            }
        }
        Command::Take { file, json } => {
            let quiz = if json {
                Quiz::from_json(&file, settings.mascot)?
            } else {
                Quiz::from_text_file(&file, settings.mascot)?
            };
            if let Some(report) = quiz.run()? {
                println!("{report}");
            }
        }
        Command::Request {
            kind,
            file,
            message,
            questions,
        } => {
            let note = read_text(&file)?;
            let conversation = Conversation::new(settings.max_history_length);
            let request = match kind {
                RequestKind::Chat => {
                    let prompt =
                        prompts::chat_prompt(settings.mascot, &message, Some(&note), conversation.is_empty());
                    conversation.build_request(&prompt, None, true, &settings)
                }
                RequestKind::Enhance => {
                    let prompt = prompts::enhance_prompt(settings.mascot, &note)?;
                    conversation.build_request(&prompt, None, false, &settings)
                }
                RequestKind::Quiz => {
                    let prompt = prompts::quiz_prompt(settings.mascot, &note, questions)?;
                    conversation.build_request(&prompt, None, false, &settings)
                }
            };
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
