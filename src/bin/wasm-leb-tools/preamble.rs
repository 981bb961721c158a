use anyhow::Result;
use wasm_leb_tools::Encoded;

/// Print the magic number and version every module starts with.
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(flatten)]
    general: wasm_leb_tools::GeneralOpts,

    #[clap(flatten)]
    output: wasm_leb_tools::OutputArg,
}

impl Opts {
    pub fn general_opts(&self) -> &wasm_leb_tools::GeneralOpts {
        &self.general
    }

    pub fn run(&self) -> Result<()> {
        self.output
            .emit(&self.general, &[Encoded::plain(wasm_leb::PREAMBLE.to_vec())])
    }
}
