/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Command-file driver for [`avl_range_tree`].
//!
//! Reads `i <key>` and `r <lo> <hi>` lines, inserts keys into an
//! [`AvlRangeTree`] and writes one count per range query.
//!
//! ```
//! let input = b"i pear\ni apple\ni fig\nr apple fig\nr b e\n";
//! let mut output = Vec::new();
//!
//! let summary = wordrange::run(&input[..], &mut output).unwrap();
//!
//! assert_eq!(output, b"2\n0\n");
//! assert_eq!(summary.inserts, 3);
//! assert_eq!(summary.queries, 2);
//! ```

pub mod args;
pub mod command;
pub mod error;
pub mod logging;

use std::io::{self, BufRead, BufReader, BufWriter, Write};

use avl_range_tree::AvlRangeTree;
use tracing::{debug, warn};

pub use args::Options;
pub use command::{Command, Line, parse_line};
pub use error::{DriverError, ParseCommandError, Result};

/// What a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of `i` commands executed.
    pub inserts: usize,
    /// Number of `r` commands executed, which is also the number of lines written.
    pub queries: usize,
    /// Lines skipped because of an unknown command tag.
    pub skipped: usize,
    /// Keys stored in the tree at the end of the run.
    pub len: usize,
    /// Height of the tree at the end of the run.
    pub height: u32,
}

/// Execute every command read from `reader`, writing range counts to `writer`.
///
/// Blank lines are ignored and lines with an unknown command tag are skipped
/// with a warning. The run stops at the first line with a missing operand.
pub fn run(mut reader: impl BufRead, mut writer: impl Write) -> Result<RunSummary> {
    let mut tree = AvlRangeTree::new();
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = parse_line(&buf).map_err(|source| DriverError::Parse {
            line: line_number,
            source,
        })?;
        match line {
            Line::Blank => {}
            Line::Unknown { tag } => {
                warn!(
                    line = line_number,
                    tag = %String::from_utf8_lossy(tag),
                    "skipping line with unknown command"
                );
                summary.skipped += 1;
            }
            Line::Command(Command::Insert { key }) => {
                tree.insert(key);
                summary.inserts += 1;
            }
            Line::Command(Command::RangeCount { lo, hi }) => {
                let count = tree.range_count(lo, hi);
                debug!(
                    lo = %String::from_utf8_lossy(lo),
                    hi = %String::from_utf8_lossy(hi),
                    count,
                    "range query"
                );
                writeln!(writer, "{count}")?;
                summary.queries += 1;
            }
        }
    }
    writer.flush()?;

    summary.len = tree.len();
    summary.height = tree.height();
    Ok(summary)
}

/// Open the files named by `options` and [`run`] the commands in them.
///
/// A path of `-` selects stdin or stdout. The output file is created, or
/// truncated, only after the input was opened successfully.
pub fn run_with_options(options: &Options) -> Result<RunSummary> {
    let reader: Box<dyn BufRead> = if options.reads_stdin() {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(fs_err::File::open(&options.input)?))
    };

    let writer: Box<dyn Write> = if options.writes_stdout() {
        Box::new(io::stdout().lock())
    } else {
        Box::new(BufWriter::new(fs_err::File::create(&options.output)?))
    };

    run(reader, writer)
}
