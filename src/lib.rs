//! Shared support for the `wasm-leb-tools` subcommands.

use anyhow::{bail, Context, Result};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Options shared by every subcommand.
#[derive(clap::Parser)]
pub struct GeneralOpts {
    /// Use verbose output (-v info, -vv debug, -vvv trace).
    #[clap(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration over whether terminal colors are used in output.
    ///
    /// Supports one of `auto|never|always|always-ansi`. The default is to
    /// detect what to do based on the terminal environment, for example by
    /// using `isatty`.
    #[clap(long = "color", default_value = "auto")]
    pub color: ColorChoice,
}

impl GeneralOpts {
    /// Initializes the logger based on the verbosity level. `RUST_LOG` still
    /// takes precedence when set.
    pub fn init_logger(&self) {
        let default = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
            .format_target(false)
            .init();
    }

    /// The color choice for stdout, with `auto` resolved against whether
    /// stdout is a terminal.
    pub fn stdout_color(&self) -> ColorChoice {
        match self.color {
            ColorChoice::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
            choice => choice,
        }
    }
}

/// The bytes produced for one input, and how many of them are a length
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The encoded bytes.
    pub bytes: Vec<u8>,
    /// The number of leading bytes that are a length prefix.
    pub prefix: usize,
}

impl Encoded {
    /// Bytes without a length prefix.
    pub fn plain(bytes: Vec<u8>) -> Self {
        Encoded {
            bytes,
            prefix: 0,
        }
    }
}

/// Where encoded bytes go.
#[derive(clap::Parser)]
pub struct OutputArg {
    /// Write the raw bytes of every encoding, back to back, to this file
    /// instead of printing them as hex.
    #[clap(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl OutputArg {
    /// Emit `encodings` either as hex lines on stdout or as raw bytes into the
    /// output file.
    pub fn emit(&self, general: &GeneralOpts, encodings: &[Encoded]) -> Result<()> {
        match &self.output {
            Some(path) => {
                let bytes = encodings
                    .iter()
                    .flat_map(|e| e.bytes.iter().copied())
                    .collect::<Vec<u8>>();
                std::fs::write(path, &bytes)
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                log::info!("wrote {} bytes to `{}`", bytes.len(), path.display());
            }
            None => {
                let mut stdout = StandardStream::stdout(general.stdout_color());
                for encoded in encodings {
                    write_hex(&mut stdout, encoded)?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Write `encoded` as space separated uppercase hex followed by a newline,
/// highlighting the length prefix.
pub fn write_hex(out: &mut dyn WriteColor, encoded: &Encoded) -> io::Result<()> {
    for (i, byte) in encoded.bytes.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        let is_prefix = i < encoded.prefix;
        if is_prefix {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        }
        write!(out, "{byte:02X}")?;
        if is_prefix {
            out.reset()?;
        }
    }
    writeln!(out)
}

/// Parse a signed integer, in decimal or with a `0x`/`0b`/`0o` prefix and an
/// optional leading `-`.
pub fn parse_signed(s: &str) -> Result<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = parse_magnitude(digits).with_context(|| format!("invalid integer `{s}`"))?;
    let value = if negative {
        0i128 - i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).with_context(|| format!("`{s}` does not fit in a 64-bit signed integer"))
}

/// Parse an unsigned integer, in decimal or with a `0x`/`0b`/`0o` prefix.
pub fn parse_unsigned(s: &str) -> Result<u64> {
    parse_magnitude(s).with_context(|| format!("invalid integer `{s}`"))
}

fn parse_magnitude(s: &str) -> Result<u64> {
    let s = s.replace('_', "");
    let (radix, digits) = if let Some(rest) = s.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = s.strip_prefix("0b") {
        (2, rest)
    } else if let Some(rest) = s.strip_prefix("0o") {
        (8, rest)
    } else {
        (10, &s[..])
    };
    if digits.is_empty() || digits.starts_with('+') {
        bail!("expected digits");
    }
    Ok(u64::from_str_radix(digits, radix)?)
}

/// If `query` looks like a number, parse it as a table code.
pub fn parse_code(query: &str) -> Option<Result<u8>> {
    if !query.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(parse_unsigned(query).and_then(|code| {
        u8::try_from(code).with_context(|| format!("code `{query}` does not fit in a byte"))
    }))
}
