// Copyright (c) Microsoft. All rights reserved.

use log::{log, Level};

/// Logs `err` and then each error in its `source()` chain on its own line.
pub fn log_failure(level: Level, err: &dyn std::error::Error) {
    log!(level, "{}", err);
    for cause in std::iter::successors(err.source(), |cause| cause.source()) {
        log!(level, "\tcaused by: {}", cause);
    }
}
