use crate::prompts::ContentKind;
use clap::{Parser, Subcommand, ValueEnum};

pub mod menu;
pub mod render;

/// `MarketMind` - marketing content generation over a hosted LLM.
#[derive(Parser, Debug)]
#[command(name = "marketmind")]
#[command(version = "0.1.0")]
#[command(
    about = "Generate ad campaigns, sales pitches and lead scores.",
    long_about = None
)]
pub struct Cli {
    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive numbered menu
    Menu,

    /// Start the HTTP gateway (web backend)
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Print generation totals, per-kind counts and recent activity
    Stats,

    /// List saved items of one kind, or show one in full
    Saved {
        kind: SavedKind,

        /// 1-based item number to show in full
        #[arg(short, long)]
        index: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SavedKind {
    Campaign,
    Pitch,
    Lead,
}

impl From<SavedKind> for ContentKind {
    fn from(kind: SavedKind) -> Self {
        match kind {
            SavedKind::Campaign => Self::Campaign,
            SavedKind::Pitch => Self::Pitch,
            SavedKind::Lead => Self::LeadScore,
        }
    }
}
