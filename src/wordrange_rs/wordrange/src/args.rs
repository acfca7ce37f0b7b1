/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::path::{Path, PathBuf};

use clap::Parser;

/// Path value that selects stdin or stdout instead of a file.
pub const STDIO_PATH: &str = "-";

/// Run `i <key>` and `r <lo> <hi>` commands against an AVL range tree.
///
/// Every `r` command writes the number of inserted keys in `[lo, hi]` to the
/// output, one count per line.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Options {
    /// File to read commands from. `-` reads from stdin.
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// File to write range counts to. `-` writes to stdout.
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,
}

impl Options {
    /// Returns `true` if commands are read from stdin.
    pub fn reads_stdin(&self) -> bool {
        is_stdio(&self.input)
    }

    /// Returns `true` if counts are written to stdout.
    pub fn writes_stdout(&self) -> bool {
        is_stdio(&self.output)
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}
