use anyhow::{Context, Result};
use wasm_leb::leb128;
use wasm_leb_tools::Encoded;

/// Encode integers as unsigned LEB128.
///
/// This is the encoding of indices and vector lengths.
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(flatten)]
    general: wasm_leb_tools::GeneralOpts,

    #[clap(flatten)]
    output: wasm_leb_tools::OutputArg,

    /// Reject integers that don't fit in this many bits.
    #[clap(long, value_name = "BITS")]
    bits: Option<u32>,

    /// The integers to encode.
    #[clap(required = true, value_parser = wasm_leb_tools::parse_unsigned)]
    values: Vec<u64>,
}

impl Opts {
    pub fn general_opts(&self) -> &wasm_leb_tools::GeneralOpts {
        &self.general
    }

    pub fn run(&self) -> Result<()> {
        let mut encodings = Vec::with_capacity(self.values.len());
        for &n in &self.values {
            let bytes = match self.bits {
                Some(bits) => leb128::checked_unsigned(n, bits)
                    .with_context(|| format!("failed to encode {n}"))?
                    .collect(),
                None => wasm_leb::encode_unsigned_leb128(n),
            };
            log::debug!("{n} encodes to {} bytes", bytes.len());
            encodings.push(Encoded::plain(bytes));
        }
        self.output.emit(&self.general, &encodings)
    }
}
