use clap::Parser;
use lchgrad::cli::{self, Cli, Commands};
use lchgrad::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config_path = cli.config;
    let config = || cli::load_config(config_path.as_deref());

    match cli.command {
        Commands::Slice(args) => cli::slice::run(args, &config()?, &printer)?,
        Commands::Gradient(args) => cli::gradient::run(args, &config()?, &printer)?,
        Commands::Encode(args) => cli::encode::run(args, &config()?, &printer)?,
        Commands::Decode(args) => cli::decode::run(args, &config()?, &printer)?,
        Commands::Convert(args) => cli::convert::run(args, &printer)?,
        Commands::Axes(args) => cli::axes::run(args, &config()?, &printer)?,
        Commands::Watch(args) => cli::watch::run(args, &config()?, &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}
