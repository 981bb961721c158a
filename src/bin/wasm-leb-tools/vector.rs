use anyhow::{Context, Result};
use std::io::Read;
use wasm_leb::{frame_vector, frame_vector_checked, leb128, ByteTree};
use wasm_leb_tools::Encoded;

/// Flatten a nested array of bytes and prefix it with its length.
///
/// The tree is written as JSON, for example `[1,[2,[3]]]`, and is read from
/// stdin when not given on the command line. The length prefix is
/// highlighted when colors are enabled.
#[derive(clap::Parser)]
pub struct Opts {
    #[clap(flatten)]
    general: wasm_leb_tools::GeneralOpts,

    #[clap(flatten)]
    output: wasm_leb_tools::OutputArg,

    /// Fail instead of recursing when arrays nest deeper than this.
    #[clap(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// The byte-tree to frame, as JSON.
    tree: Option<String>,
}

impl Opts {
    pub fn general_opts(&self) -> &wasm_leb_tools::GeneralOpts {
        &self.general
    }

    pub fn run(&self) -> Result<()> {
        let text = match &self.tree {
            Some(text) => text.clone(),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read byte-tree from stdin")?;
                text
            }
        };
        let tree: ByteTree =
            serde_json::from_str(&text).context("failed to parse byte-tree as JSON")?;
        log::debug!(
            "byte-tree has {} leaves nested {} deep",
            tree.leaf_count(),
            tree.depth()
        );

        let bytes = match self.max_depth {
            Some(limit) => frame_vector_checked(&tree, limit)?,
            None => frame_vector(&tree),
        };
        let prefix = leb128::encoded_len_unsigned(tree.leaf_count() as u64);
        self.output
            .emit(&self.general, &[Encoded { bytes, prefix }])
    }
}
