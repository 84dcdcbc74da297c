use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lingo_types::AppEvent;

#[derive(Parser, Debug)]
#[command(name = "lingo", author, version, about = "Build a personal vocabulary and practice it.")]
pub struct Cli {
    /// JSON profile to load instead of ./lingo.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Whose vocabulary to work on, defaults to `default_owner` from the profile
    #[arg(long, global = true)]
    pub owner: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    Request(Request),

    /// Read commands from stdin until EOF or `quit`
    Shell,

    /// Write the default profile
    Init {
        /// Defaults to ./lingo.json
        path: Option<PathBuf>,
    },
}

/// Commands handled by the event loop
#[derive(Subcommand, Debug, PartialEq)]
pub enum Request {
    /// Fetch new words and add them to the vocabulary
    Generate,

    /// Show the vocabulary, newest first
    List,

    /// Delete every word of the owner
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Translate a piece of text
    Translate {
        text: Vec<String>,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },

    /// Score a sentence against target words and check its grammar
    Practice {
        sentence: Vec<String>,

        /// Comma separated targets, defaults to the whole vocabulary
        #[arg(long, value_delimiter = ',')]
        words: Vec<String>,
    },

    /// Show the current level
    Progress,
}

impl Request {
    pub fn into_event(self) -> AppEvent {
        match self {
            Request::Generate => AppEvent::GenerateVocabulary,
            Request::List => AppEvent::ListVocabulary,
            Request::Clear { yes } => AppEvent::ClearVocabulary { confirmed: yes },
            Request::Translate { text, from, to } => AppEvent::Translate {
                text: text.join(" "),
                from_lang: from,
                to_lang: to,
            },
            Request::Practice { sentence, words } => AppEvent::SubmitPractice {
                sentence: sentence.join(" "),
                words,
            },
            Request::Progress => AppEvent::ShowProgress,
        }
    }
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    #[command(flatten)]
    Request(Request),

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellLine {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}
