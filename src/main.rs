use clap::{Parser, Subcommand};

mod cmd;
mod money;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "cantax", version, about = "Canadian Income Tax Calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the markdown tax report
    Report(cmd::report::ReportCommand),
    /// Print per-city tax totals
    Summary(cmd::summary::SummaryCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Report(cmd) => cmd.exec(),
        Command::Summary(cmd) => cmd.exec(),
    }
}
