use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lumina_core::assistant::GenerateKind;
use lumina_core::export::ExportFormat;

#[derive(Parser)]
#[command(name = "lumina")]
#[command(about = "Notes, spaces, and assistant insights from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Quick capture: lumina "my note here"
    #[arg(trailing_var_arg = true)]
    pub note: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "add")]
    New {
        /// Note content; read from stdin when omitted and piped
        content: Vec<String>,
        /// Space ID or unique ID prefix to file the note under
        #[arg(long)]
        space: Option<String>,
        /// Note title (defaults to the first content line)
        #[arg(long)]
        title: Option<String>,
    },
    /// List notes
    List {
        /// Number of notes to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
        /// Only notes in this space (ID or unique ID prefix)
        #[arg(long)]
        space: Option<String>,
        /// Only notes carrying this tag
        #[arg(long)]
        tag: Option<String>,
        /// Only starred notes
        #[arg(long)]
        starred: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a note in full
    Show {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Edit a note in $EDITOR
    Edit {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Delete a note
    Delete {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Toggle a note's star
    Star {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Search notes
    Search {
        /// Search query
        query: String,
        /// Only starred notes
        #[arg(long)]
        starred: bool,
        /// Only notes carrying one of these tags
        #[arg(long)]
        tag: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add or remove note tags
    #[command(subcommand)]
    Tag(TagCommands),
    /// List all tags in use
    Tags,
    /// Manage spaces
    #[command(subcommand)]
    Space(SpaceCommands),
    /// Export notes and spaces
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormatArg::Json)]
        format: ExportFormatArg,
        /// Output file (defaults to lumina-export-<timestamp>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import notes and spaces from a JSON export
    Import {
        /// Export file to import
        file: PathBuf,
    },
    /// Generate content from a note
    Assist {
        /// Note ID or unique ID prefix
        id: String,
        /// Generation mode
        #[arg(long, value_enum, default_value_t = GenerateKindArg::Summarize)]
        kind: GenerateKindArg,
        /// Prompt for custom generation
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Fetch assistant insights (suggestions, topics, resources) for a note
    Insights {
        /// Note ID or unique ID prefix
        id: String,
    },
    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Initialize the data directory
    Init {
        /// Seed a small sample dataset when the store is empty
        #[arg(long)]
        sample: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current settings as JSON
    Show,
    /// Update a setting
    Set {
        /// Setting key: theme, font-size, default-view, auto-save,
        /// sync-enabled, notifications
        key: String,
        /// New value
        value: String,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Add a tag to a note
    Add {
        /// Note ID or unique ID prefix
        id: String,
        /// Tag to add
        tag: String,
    },
    /// Remove a tag from a note
    Rm {
        /// Note ID or unique ID prefix
        id: String,
        /// Tag to remove
        tag: String,
    },
}

#[derive(Subcommand)]
pub enum SpaceCommands {
    /// Create a space
    New {
        /// Space name
        name: String,
        /// Accent color label
        #[arg(long, default_value = "blue")]
        color: String,
        /// Icon label
        #[arg(long, default_value = "folder")]
        icon: String,
    },
    /// List spaces
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a space (member notes are kept and detached)
    Rm {
        /// Space ID or unique ID prefix
        id: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Markdown,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(format: ExportFormatArg) -> Self {
        match format {
            ExportFormatArg::Json => Self::Json,
            ExportFormatArg::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GenerateKindArg {
    Summarize,
    Expand,
    Structure,
    ActionItems,
    Code,
    Highlight,
    Custom,
}

impl From<GenerateKindArg> for GenerateKind {
    fn from(kind: GenerateKindArg) -> Self {
        match kind {
            GenerateKindArg::Summarize => Self::Summarize,
            GenerateKindArg::Expand => Self::Expand,
            GenerateKindArg::Structure => Self::Structure,
            GenerateKindArg::ActionItems => Self::ActionItems,
            GenerateKindArg::Code => Self::Code,
            GenerateKindArg::Highlight => Self::Highlight,
            GenerateKindArg::Custom => Self::Custom,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
