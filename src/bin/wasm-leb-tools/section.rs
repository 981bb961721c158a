use anyhow::{Context, Result};
use std::io::Write;
use wasm_leb::SectionId;

/// Look up module section kinds by name or by id.
///
/// A numeric argument prints the name of that section id, anything else is
/// taken as a section name and prints its id.
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(flatten)]
    general: wasm_leb_tools::GeneralOpts,

    /// Print every known section kind instead.
    #[clap(long, conflicts_with = "queries")]
    list: bool,

    /// Section names, such as `Code`, or ids, such as `10`.
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
            for id in SectionId::ALL {
                writeln!(stdout, "{:>2} {id}", id.code())?;
            }
            return Ok(());
        }
        for query in &self.queries {
            let answer = match wasm_leb_tools::parse_code(query) {
                Some(code) => wasm_leb::code_to_name(code?)?.to_string(),
                None => wasm_leb::name_to_code(query)
                    .with_context(|| format!("failed to look up `{query}`"))?
                    .to_string(),
            };
            log::debug!("section `{query}` is `{answer}`");
            writeln!(stdout, "{answer}")?;
        }
        Ok(())
    }
}
