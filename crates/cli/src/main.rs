mod chooser;
mod cmd;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use cmd::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "kegdex", version, about = "Index, search and tag keg knowledge bases")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options for locating the keg, shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Config file (default: $XDG_CONFIG_HOME/kegdex/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Named keg from the config, overriding `current`
    #[arg(long, global = true)]
    pub keg: Option<String>,

    /// Use this keg root directly and ignore the config file
    #[arg(long, global = true, conflicts_with_all = ["config", "keg"])]
    pub keg_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved keg
    Doctor,

    /// Rescan the keg and rewrite dex/nodes.json and dex/nodes.md
    Build {
        /// Print every node as it is indexed
        #[arg(short, long)]
        verbose: bool,
    },

    /// List every node in the dex
    List(ListArgs),

    /// Nodes whose title contains a keyword, ignoring case
    Titles {
        keyword: String,

        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Nodes whose title matches a regular expression
    Grep {
        pattern: String,

        /// Match without regard to case
        #[arg(short, long)]
        ignore_case: bool,

        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Pick a single node by title and print its id
    Choose {
        /// Keyword, or a regular expression with --regex
        query: String,

        #[arg(long)]
        regex: bool,
    },

    /// Print a random node
    Random {
        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print tag lines for comma-separated tag names
    Tags { names: String },

    /// Print when the keg last changed, according to the dex
    Updated,

    /// Print the lowest positive node id
    First,

    /// Print the highest node id
    Last,

    /// Print the id a new node would get
    Next,

    /// Move a node directory into the keg
    Import {
        dir: PathBuf,

        /// Node id to import as (default: the next free id)
        id: Option<u64>,
    },

    /// Create a temporary node directory and print its README path
    Draft,

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Order by node id instead of most recently changed first
    #[arg(long)]
    pub by_id: bool,
}

fn main() {
    let cli = Cli::parse();
    let global = &cli.global;

    match cli.command {
        Commands::Doctor => cmd::doctor::run(global),
        Commands::Build { verbose } => cmd::build::run(global, verbose),
        Commands::List(args) => cmd::list::run(global, args),
        Commands::Titles { keyword, format } => cmd::search::titles(global, &keyword, format),
        Commands::Grep { pattern, ignore_case, format } => {
            cmd::search::grep(global, &pattern, ignore_case, format)
        }
        Commands::Choose { query, regex } => cmd::search::choose(global, &query, regex),
        Commands::Random { format } => cmd::random::run(global, format),
        Commands::Tags { names } => cmd::tags::run(global, &names),
        Commands::Updated => cmd::ids::updated(global),
        Commands::First => cmd::ids::first(global),
        Commands::Last => cmd::ids::last(global),
        Commands::Next => cmd::ids::next(global),
        Commands::Import { dir, id } => cmd::import::run(global, &dir, id),
        Commands::Draft => cmd::import::draft(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "kegdex", &mut std::io::stdout());
        }
    }
}
