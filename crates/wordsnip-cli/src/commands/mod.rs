mod apply;
mod codes;

/// Subcommands for wordsnip
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Segment text with learned merge codes.
    Apply(apply::ApplyArgs),

    /// Summarize a codes file.
    Codes(codes::CodesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Apply(cmd) => cmd.run(),
            Commands::Codes(cmd) => cmd.run(),
        }
    }
}
