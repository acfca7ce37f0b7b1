/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use wordrange::{Options, logging};

fn main() -> ExitCode {
    let options = Options::parse();

    if let Err(err) = logging::try_init() {
        eprintln!("Unable to install global tracing subscriber: {err}");
    }

    match wordrange::run_with_options(&options) {
        Ok(summary) => {
            info!(
                inserts = summary.inserts,
                queries = summary.queries,
                skipped = summary.skipped,
                len = summary.len,
                height = summary.height,
                "finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(input = %options.input.display(), "{err}");
            ExitCode::FAILURE
        }
    }
}
