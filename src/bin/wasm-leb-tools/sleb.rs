use anyhow::{Context, Result};
use wasm_leb::leb128;
use wasm_leb_tools::Encoded;

/// Encode integers as signed LEB128.
///
/// Each integer is printed on its own line as hex bytes. Integers may be
/// written in decimal or with a `0x`, `0o` or `0b` prefix, and negative ones
/// in any of these forms, such as `-0x80`. Options must come before the first
/// integer.
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(flatten)]
    general: wasm_leb_tools::GeneralOpts,

    #[clap(flatten)]
    output: wasm_leb_tools::OutputArg,

    /// Reject integers that don't fit in this many bits of two's complement.
    #[clap(long, value_name = "BITS")]
    bits: Option<u32>,

    /// The integers to encode.
    #[clap(
        required = true,
        allow_hyphen_values = true,
        value_parser = wasm_leb_tools::parse_signed
    )]
    values: Vec<i64>,
}

impl Opts {
    pub fn general_opts(&self) -> &wasm_leb_tools::GeneralOpts {
        &self.general
    }

    pub fn run(&self) -> Result<()> {
        let mut encodings = Vec::with_capacity(self.values.len());
        for &n in &self.values {
            let bytes = match self.bits {
                Some(bits) => leb128::checked_signed(n, bits)
                    .with_context(|| format!("failed to encode {n}"))?
                    .collect(),
                None => wasm_leb::encode_signed_leb128(n),
            };
            log::debug!("{n} encodes to {} bytes", bytes.len());
            encodings.push(Encoded::plain(bytes));
        }
        self.output.emit(&self.general, &encodings)
    }
}
