use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use wordsnip::{
    EncoderOptions,
    SubwordEncoder,
    encoders::{DropoutRate, MergeMode},
    types::DEFAULT_SEPARATOR,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the apply command.
#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    /// Merge codes file.
    #[arg(long, short)]
    codes: PathBuf,

    /// Vocabulary file of "<token> <count>" lines.
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Minimum count for a vocabulary entry to count as known.
    #[arg(long)]
    vocabulary_threshold: Option<u64>,

    /// Re-split merged subwords which are not in the vocabulary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    vocabulary_filter: bool,

    /// Continuation marker appended to non-final subwords.
    #[arg(long, short, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Strings which are never split.
    #[arg(long, num_args = 1..)]
    glossaries: Vec<String>,

    /// BPE-dropout probability in [0, 1).
    #[arg(long, default_value_t = 0.0)]
    dropout: f64,

    /// Seed for dropout draws; unseeded draws are not reproducible.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl ApplyArgs {
    /// Build the encoder options from the flags.
    fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::default()
            .with_separator(self.separator.clone())
            .with_glossaries(self.glossaries.iter().cloned())
            .with_vocabulary_threshold(self.vocabulary_threshold)
            .with_vocabulary_filter(self.vocabulary_filter)
    }

    /// Run the apply command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let rate = DropoutRate::new(self.dropout)?;
        let encoder = self
            .encoder_options()
            .load(&self.codes, self.vocabulary.as_deref())?;
        log::info!(
            "Loaded {} merges and {} vocabulary entries",
            encoder.codes().len(),
            encoder.vocabulary().len()
        );

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        let mut mode = MergeMode::dropout(rate, &mut *rng);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_apply(&mut reader, &mut writer, &encoder, &mut mode)
    }
}

/// Segment every line of `reader` into `writer`.
///
/// Line endings are kept. Lines which are not valid UTF-8 are logged
/// and skipped.
fn run_apply(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    encoder: &SubwordEncoder,
    mode: &mut MergeMode<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    let mut lineno = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                log::error!("line {lineno}: {err}");
                continue;
            }
        };

        writer.write_all(encoder.process_line_with_mode(line, mode).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
