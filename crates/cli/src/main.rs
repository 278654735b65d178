use clap::Parser;

mod commands;
mod format;
mod summary_file;

use commands::Commands;
use format::ReportFormat;

#[derive(Parser)]
#[command(name = "poolprof")]
#[command(about = "Profile how cache pools are used", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format for reports
    #[arg(long, value_enum, global = true, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    poolprof_utils::tracing::init()
        .map_err(|err| eyre::eyre!("failed to initialize logging: {err}"))?;

    let cli = Cli::parse();
    let report = cli.command.execute().await?;
    println!("{}", cli.format.render(&report)?.trim_end());
    Ok(())
}
