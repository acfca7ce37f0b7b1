/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A `tracing` subscriber that writes human-readable logs to stderr.
//!
//! # Configuring Logging Output
//!
//! Logging output can be configured by setting the `RUST_LOG` environment variable to a _filter_.
//! Without it, events at `info` and above are printed. For example, `RUST_LOG=wordrange=debug`
//! also prints every range query with its result.
//!
//! Stdout is left alone so that counts written with `--output -` are not interleaved with logs.
//!
//! For the directive syntax see the [`tracing_subscriber`] documentation.
//!
//! [`tracing_subscriber`]: https://docs.rs/tracing-subscriber/0.3.20/tracing_subscriber/filter/struct.EnvFilter.html#directives

use std::error::Error;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Initializes a global subscriber that writes to stderr if one is not already set.
///
/// # Errors
///
/// Returns an Error if the initialization was unsuccessful, likely because
/// a global subscriber was already installed by another call to `try_init`.
pub fn try_init() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
}
