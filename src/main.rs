//! glyphdown - Command line entry point
//!
//! Converts drafts written in the markup dialect into styled Unicode text
//! ready to paste into a post.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, info};

use glyphdown::config::{load_config, load_config_from, Settings};
use glyphdown::error::{Error, Result};
use glyphdown::export::copy_text_to_clipboard;
use glyphdown::preview::hashtags;
use glyphdown::{convert, Template};

#[derive(Parser)]
#[command(name = "glyphdown")]
#[command(version, about = "Convert Markdown-style markup to styled Unicode text", long_about = None)]
#[command(after_help = "EXAMPLES:
    glyphdown convert post.md           Convert a draft and print it
    echo '**Hi**' | glyphdown convert   Convert from stdin
    glyphdown template tip --raw        Print the tip template's markup")]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a draft and print the result
    Convert {
        /// Draft to convert (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Also copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// List the hashtags found on stderr
        #[arg(long)]
        hashtags: bool,
    },

    /// Print a built-in template
    Template {
        /// Template name (defaults to the configured template)
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Print the markup instead of the converted text
        #[arg(long)]
        raw: bool,

        /// Also copy the printed text to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// List the built-in template names
    Templates,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    debug!("Using settings: {:?}", settings);

    match cli.command {
        Command::Convert {
            file,
            copy,
            hashtags,
        } => run_convert(file.as_deref(), copy, hashtags, &settings),
        Command::Template { name, raw, copy } => {
            run_template(name.as_deref(), raw, copy, &settings)
        }
        Command::Templates => {
            for template in Template::all() {
                println!("{}", template.name());
            }
            Ok(())
        }
    }
}

fn run_convert(file: Option<&Path>, copy: bool, show_tags: bool, settings: &Settings) -> Result<()> {
    let markup = read_draft(file)?;
    let output = convert(&markup);
    print_text(&output);

    if show_tags || settings.show_hashtags {
        for tag in hashtags(&output) {
            eprintln!("{tag}");
        }
    }
    if copy || settings.copy_to_clipboard {
        copy_text_to_clipboard(&output)?;
        info!("Copied converted text to clipboard");
    }
    Ok(())
}

fn run_template(name: Option<&str>, raw: bool, copy: bool, settings: &Settings) -> Result<()> {
    let template = match name {
        Some(name) => {
            Template::from_name(name).ok_or_else(|| Error::UnknownTemplate(name.to_string()))?
        }
        None => settings.default_template,
    };

    let text = if raw {
        template.text().to_string()
    } else {
        convert(template.text())
    };
    print_text(&text);

    if copy || settings.copy_to_clipboard {
        copy_text_to_clipboard(&text)?;
        info!("Copied template '{}' to clipboard", template.name());
    }
    Ok(())
}

/// Print `text`, ending with exactly the newline it already has or one added.
fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

/// Read the draft from `file`, or from stdin when no file is given.
fn read_draft(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut markup = String::new();
            std::io::stdin().read_to_string(&mut markup)?;
            Ok(markup)
        }
    }
}
