use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "gqlmerge",
    version,
    about = "Merges modular GraphQL SDL files into a single schema.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
