use clap::Parser;
use doctag::cli::{load_manifest, Cli, Commands};
use doctag::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Tags(args) => {
            let manifest = load_manifest(cli.config.as_deref(), &printer)?;
            doctag::cli::tags::run(args, &manifest, &printer)?
        }
        Commands::Describe(args) => doctag::cli::describe::run(args)?,
        Commands::Scan(args) => {
            let manifest = load_manifest(cli.config.as_deref(), &printer)?;
            doctag::cli::scan::run(args, &manifest, &printer)?
        }
        Commands::Completions(args) => doctag::cli::completions::run(args)?,
    }

    Ok(())
}
