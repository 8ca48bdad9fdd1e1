use {
    anyhow::Result,
    clap::{Args, Parser},
    log::error,
};

#[derive(Parser)]
#[command(
    name = "increment-version",
    about = "Bump the version recorded in a VERSION file and print it",
    version
)]
struct IncrementVersion {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    bump: increment_version::commands::bump_version::CommandArgs,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

fn main() {
    if let Err(err) = try_main() {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = IncrementVersion::parse();

    if cli.global.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    increment_version::commands::bump_version::run(cli.bump)?;

    Ok(())
}
