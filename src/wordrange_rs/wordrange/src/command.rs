/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Parsing of command lines.
//!
//! A line is a sequence of tokens separated by ASCII whitespace. The first
//! token is the command tag:
//!
//! - `i <key>` inserts `key`.
//! - `r <lo> <hi>` counts the keys in `[lo, hi]`.
//!
//! Tokens after the last operand are ignored. Keys are raw bytes; they are not
//! required to be valid UTF-8.

use crate::error::ParseCommandError;

const INSERT_TAG: &[u8] = b"i";
const RANGE_COUNT_TAG: &[u8] = b"r";

/// A command that operates on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Insert a key.
    Insert { key: &'a [u8] },
    /// Count the stored keys between `lo` and `hi`, both inclusive.
    RangeCount { lo: &'a [u8], hi: &'a [u8] },
}

/// The result of parsing one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing but whitespace.
    Blank,
    /// A well-formed command.
    Command(Command<'a>),
    /// A line whose first token is not a known command tag.
    Unknown { tag: &'a [u8] },
}

/// Parse a single input line. A trailing `\n` or `\r\n` is treated as
/// whitespace.
pub fn parse_line(line: &[u8]) -> Result<Line<'_>, ParseCommandError> {
    let mut tokens = line
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());

    let Some(tag) = tokens.next() else {
        return Ok(Line::Blank);
    };

    let command = match tag {
        INSERT_TAG => {
            let [key] = operands::<1>(&mut tokens, "i")?;
            Command::Insert { key }
        }
        RANGE_COUNT_TAG => {
            let [lo, hi] = operands::<2>(&mut tokens, "r")?;
            Command::RangeCount { lo, hi }
        }
        _ => return Ok(Line::Unknown { tag }),
    };
    Ok(Line::Command(command))
}

/// Take exactly `N` operands from `tokens`.
fn operands<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a [u8]>,
    command: &'static str,
) -> Result<[&'a [u8]; N], ParseCommandError> {
    let mut out: [&[u8]; N] = [&[]; N];
    for (found, slot) in out.iter_mut().enumerate() {
        *slot = tokens.next().ok_or(ParseCommandError::MissingOperand {
            command,
            expected: N,
            found,
        })?;
    }
    Ok(out)
}
