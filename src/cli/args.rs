// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the Granola credentials file (optional)
    #[arg(short, long, value_name = "CREDENTIALS", global = true)]
    pub credentials: Option<PathBuf>,

    /// Path to a granolaview TOML config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, show, search, or latest)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List recent documents
    List {
        /// Number of documents to fetch
        #[arg(short, long, value_name = "LIMIT")]
        limit: Option<usize>,

        /// Output documents as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a document's notes as Markdown
    Show {
        /// Document ID to show
        #[arg(value_name = "DOCUMENT_ID")]
        document_id: String,

        /// Show the transcript instead of the notes
        #[arg(short, long)]
        transcript: bool,
    },

    /// Search recent documents by title
    Search {
        /// Case-insensitive text to look for in titles
        #[arg(value_name = "QUERY")]
        query: String,

        /// Number of recent documents to search
        #[arg(short, long, value_name = "LIMIT")]
        limit: Option<usize>,

        /// Output matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the latest 1:1 meeting with a person
    Latest {
        /// Name as it appears in meeting titles
        #[arg(value_name = "PERSON")]
        person: String,

        /// Show the transcript instead of the notes
        #[arg(short, long)]
        transcript: bool,
    },
}
