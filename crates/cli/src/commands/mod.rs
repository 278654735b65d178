use clap::Subcommand;
use poolprof_cache::SummaryReport;
use std::path::PathBuf;

pub mod merge;
pub mod render;
pub mod simulate;

use self::simulate::SimulateArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Drive a seeded random workload through in-memory pools and report usage
    #[command(visible_alias = "sim")]
    Simulate(SimulateArgs),

    /// Render a saved profile summary
    Render {
        /// JSON file holding a summary or a full report
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Pool name to show for a bare summary
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Sum saved profile summaries and render the result
    Merge {
        /// JSON files holding summaries or full reports
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

impl Commands {
    /// Run the command and return the report to print
    pub async fn execute(self) -> eyre::Result<SummaryReport> {
        match self {
            Commands::Simulate(args) => simulate::execute(args).await,
            Commands::Render { input, name } => render::execute(&input, name),
            Commands::Merge { files } => merge::execute(&files),
        }
    }
}
