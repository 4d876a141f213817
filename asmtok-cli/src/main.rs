//! asmtok command-line entry point

use anyhow::Result;
use asmtok_cli::commands::Cli;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Missing mode arguments are usage errors: report and exit before any I/O
    let invocation = cli.resolve().unwrap_or_else(|err| err.exit());
    invocation.execute()
}
