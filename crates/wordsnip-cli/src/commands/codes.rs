use std::{io::Write, path::PathBuf};

use wordsnip::{CodeTable, codes::load_codes_path};

use crate::{input_output::OutputArgs, logging::LogArgs};

/// Args for the codes command.
#[derive(clap::Args, Debug)]
pub struct CodesArgs {
    /// Merge codes file.
    #[arg(long, short)]
    codes: PathBuf,

    /// Number of merges to list, in rank order.
    #[arg(long, default_value_t = 10)]
    head: usize,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl CodesArgs {
    /// Run the codes command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let table = load_codes_path(&self.codes)?;
        let mut writer = self.output.open_writer()?;
        write_summary(&table, self.head, &mut writer)
    }
}

fn write_summary(
    table: &CodeTable,
    head: usize,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, "version: {}", table.version().unwrap_or("none"))?;
    writeln!(writer, "merges: {}", table.len())?;
    for (rank, pair) in table.iter().take(head).enumerate() {
        writeln!(writer, "{rank}\t{pair}")?;
    }
    writer.flush()?;
    Ok(())
}
