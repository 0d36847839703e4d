/*
 * Copyright (c) 2025 Yunshan Networks
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::sync::OnceLock;

use flexi_logger::{opt_format, FileSpec, FlexiLoggerError, Logger, LoggerHandle};

use crate::config::Config;

// None when a logger was already installed by the host or could not start
static LOGGER_HANDLE: OnceLock<Option<LoggerHandle>> = OnceLock::new();

/// Starts the process logger once. `RUST_LOG` overrides the configured level.
pub(crate) fn start(config: &Config) {
    LOGGER_HANDLE.get_or_init(|| match build(config) {
        Ok(handle) => Some(handle),
        Err(FlexiLoggerError::Log(_)) => None,
        Err(e) => {
            eprintln!("ntapi stub: logger start failed: {}", e);
            None
        }
    });
}

fn build(config: &Config) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(&config.log_level)?.format(opt_format);
    let logger = if config.log_file.is_empty() {
        logger.log_to_stderr()
    } else {
        logger
            .log_to_file(FileSpec::try_from(&config.log_file)?.suppress_timestamp())
            .append()
    };
    logger.start()
}

pub(crate) fn flush() {
    if let Some(Some(handle)) = LOGGER_HANDLE.get() {
        handle.flush();
    }
}
