use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::OutputConfig;

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

pub fn run(args: CompletionsArgs, _output: OutputConfig) -> Result<()> {
    let mut cmd = super::Cli::command();
    generate(args.shell, &mut cmd, "fpa-finder", &mut std::io::stdout());
    Ok(())
}
