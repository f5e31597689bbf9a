mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// wordsnip: apply learned BPE merge codes to text.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Args::try_parse_from(["wordsnip"]).is_err());
        assert!(Args::try_parse_from(["wordsnip", "frobnicate"]).is_err());
    }
}
