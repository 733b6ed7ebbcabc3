use clap::{Parser, Subcommand};

/// folio - a developer portfolio for the terminal
///
/// Without a subcommand, opens the interactive browser: a Home page with
/// skills and highlighted work, and a Tools page with the full project
/// catalog, category filters, and expandable cards.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// List project categories and exit
    #[arg(long)]
    pub list_categories: bool,

    /// List project titles and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Event poll interval for the interactive browser, in milliseconds
    ///
    /// Can also be set via the `FOLIO_TICK_MS` environment variable.
    #[arg(long, value_name = "MS", env = "FOLIO_TICK_MS", default_value = "100")]
    pub tick_rate: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the project catalog, optionally filtered by category
    Tools {
        /// Category label to filter by (exact match; "All" disables filtering)
        ///
        /// An unknown label prints nothing; it is not an error.
        #[arg(long, default_value = "All")]
        category: String,

        /// Emit the filtered catalog as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print one project in full, including its long description
    Show {
        /// Project id as listed by `tools`
        id: String,
    },
}
