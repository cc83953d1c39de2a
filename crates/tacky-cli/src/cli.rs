use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tacky")]
#[command(about = "Boards, lists and cards you can drag around", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Directory holding the board data (or set TACKY_DATA_DIR)
    #[arg(short = 'f', long = "file", value_name = "DIR", env = "TACKY_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Board to open in the terminal view
    #[arg(long)]
    pub board: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Export a board to JSON
    Export(ExportArgs),
    /// Replace a board's contents from an exported file
    Import(ImportArgs),
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        wallpaper: Option<String>,
    },
    /// List all boards, newest first
    List,
    /// Get a specific board
    Get {
        #[arg(long)]
        id: String,
    },
    /// Rename a board or change its wallpaper
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        wallpaper: Option<String>,
    },
    /// Delete a board
    Delete {
        #[arg(long)]
        id: String,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Append a list to a board
    Add {
        #[arg(long)]
        board: String,
        #[arg(long)]
        title: String,
    },
    /// Rename a list
    Rename {
        #[arg(long)]
        board: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Delete a list and its cards
    Delete {
        #[arg(long)]
        board: String,
        #[arg(long)]
        id: String,
    },
    /// Move the list at one position to another
    Move {
        #[arg(long)]
        board: String,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Args)]
pub struct CardFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    /// Label colours, comma separated
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Append a card to a list
    Add {
        #[arg(long)]
        board: String,
        #[arg(long)]
        list: String,
        #[command(flatten)]
        fields: CardFields,
    },
    /// Change fields of a card
    Update {
        #[arg(long)]
        board: String,
        #[arg(long)]
        list: String,
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: CardFields,
    },
    /// Delete a card
    Delete {
        #[arg(long)]
        board: String,
        #[arg(long)]
        list: String,
        #[arg(long)]
        id: String,
    },
    /// Move a card by position, possibly to another list
    Move(CardMoveArgs),
}

#[derive(Args)]
pub struct CardMoveArgs {
    #[arg(long)]
    pub board: String,
    #[arg(long)]
    pub from_list: String,
    #[arg(long)]
    pub from_index: usize,
    #[arg(long)]
    pub to_list: String,
    #[arg(long)]
    pub to_index: usize,
}

// Export/Import commands
#[derive(Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub board: String,
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    #[arg(long)]
    pub board: String,
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}
