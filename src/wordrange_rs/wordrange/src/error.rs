/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for the command driver.

/// A specialized Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Errors that abort a driver run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Reading commands or writing counts failed.
    ///
    /// Errors from opening files name the offending path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A command line could not be parsed.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        source: ParseCommandError,
    },
}

/// Errors for a single command line with a known tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    /// The command has fewer operands than it needs.
    #[error("`{command}` expects {expected} operand(s), found {found}")]
    MissingOperand {
        /// The command tag, `i` or `r`.
        command: &'static str,
        /// Number of operands the command takes.
        expected: usize,
        /// Number of operands present on the line.
        found: usize,
    },
}
