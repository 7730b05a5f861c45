use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "htable")]
#[command(about = "Render sortable HTML tables from JSON rows and a TOML column layout")]
#[command(version)]
#[command(after_help = "Examples:
  htable render --layout cols.toml --rows rows.json                 # Render a table
  htable render --layout cols.toml --rows - < rows.json             # Rows from stdin
  htable render --layout cols.toml --rows rows.json --query 'sort=name&order=desc'
  htable config show                                                # Show current configuration
  htable config set --empty-text 'Nothing here'                     # Change a default

Environment Variables:
  HTABLE_EMPTY_TEXT   Empty-state text when none is configured
  RUST_LOG            Log filter (e.g. RUST_LOG=htable_core=debug)")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a table to HTML
    Render(RenderArgs),
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set table defaults
    #[command(after_help = "Examples:
  htable config set --sort-field-name by --sort-order-name dir
  htable config set --empty-text 'No results'
  htable config set --escape false")]
    Set {
        /// Query parameter carrying the sort column id
        #[arg(long)]
        sort_field_name: Option<String>,
        /// Query parameter carrying the sort direction
        #[arg(long)]
        sort_order_name: Option<String>,
        /// Text shown when there are no rows
        #[arg(long)]
        empty_text: Option<String>,
        /// HTML-escape labels and text cells
        #[arg(long)]
        escape: Option<bool>,
    },
}

/// Arguments for rendering a table
#[derive(Args, Debug)]
#[command(after_help = "Examples:
  htable render --layout cols.toml --rows rows.json
  htable render --layout cols.toml --rows rows.json --param sort=name --param order=desc
  htable render --layout cols.toml --rows rows.json --output table.html")]
pub struct RenderArgs {
    /// TOML file declaring the columns
    #[arg(long, short = 'l', help_heading = "Input Options")]
    pub layout: PathBuf,

    /// JSON file holding an array of row objects ('-' for stdin)
    #[arg(long, short = 'r', help_heading = "Input Options")]
    pub rows: PathBuf,

    /// Query string of the incoming request (e.g. 'sort=name&order=desc&page=2')
    #[arg(long, short = 'q', help_heading = "Request Options")]
    pub query: Option<String>,

    /// Query parameters in key=value format (can be repeated)
    #[arg(long, action = clap::ArgAction::Append, help_heading = "Request Options")]
    pub param: Vec<String>,

    /// Text shown when there are no rows
    #[arg(long, help_heading = "Output Options")]
    pub empty_text: Option<String>,

    /// Write the HTML to a file instead of stdout
    #[arg(long, short = 'o', help_heading = "Output Options")]
    pub output: Option<PathBuf>,
}
