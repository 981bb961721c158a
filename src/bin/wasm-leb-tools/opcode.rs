use anyhow::Result;
use std::io::Write;
use wasm_leb::Opcode;

/// Look up control instruction opcodes by name or by code.
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(flatten)]
    general: wasm_leb_tools::GeneralOpts,

    /// Print every known opcode instead.
    #[clap(long, conflicts_with = "queries")]
    list: bool,

    /// Opcode names, such as `BrIf`, or codes, such as `0x0d`.
    #[clap(required_unless_present = "list")]
    queries: Vec<String>,
}

impl Opts {
    pub fn general_opts(&self) -> &wasm_leb_tools::GeneralOpts {
        &self.general
    }

    pub fn run(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.list {
            for op in Opcode::ALL {
                writeln!(stdout, "0x{:02x} {op}", op.code())?;
            }
            return Ok(());
        }
        for query in &self.queries {
            match wasm_leb_tools::parse_code(query) {
                Some(code) => writeln!(stdout, "{}", Opcode::try_from(code?)?)?,
                None => writeln!(stdout, "0x{:02x}", query.parse::<Opcode>()?.code())?,
            }
        }
        Ok(())
    }
}
