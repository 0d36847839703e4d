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

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::consts::{NT_STATUS_TIMEOUT, NT_STATUS_TRYAGAIN};
use crate::types::NT_STATUS;

pub const CONFIG_PATH_ENV: &str = "NTAPI_STUB_CONFIG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("yaml config invalid: {0}")]
    YamlConfigInvalid(String),
    #[error("config file {path} unreadable: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
}

/// Status `NT_NetRxGet` answers with. Consumers' polling loops treat both as
/// "no packet yet"; `timeout` matches what older stand-in builds returned.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RxGetStatus {
    #[default]
    TryAgain,
    Timeout,
}

impl RxGetStatus {
    pub fn status(&self) -> NT_STATUS {
        match self {
            RxGetStatus::TryAgain => NT_STATUS_TRYAGAIN,
            RxGetStatus::Timeout => NT_STATUS_TIMEOUT,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub log_level: String,
    // empty for stderr
    pub log_file: String,
    pub rx_get_status: RxGetStatus,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_file: "".into(),
            rx_get_status: Default::default(),
        }
    }
}

impl Config {
    pub fn load_from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::load(&contents)
    }

    pub fn load<C: AsRef<str>>(contents: C) -> Result<Self, ConfigError> {
        let contents = contents.as_ref();
        if contents.trim().is_empty() {
            // parsing empty string leads to EOF error
            return Ok(Self::default());
        }
        let mut cfg: Self = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::YamlConfigInvalid(e.to_string()))?;
        if cfg.log_level.trim().is_empty() {
            cfg.log_level = DEFAULT_LOG_LEVEL.into();
        }
        Ok(cfg)
    }

    /// Loads the file named by `NTAPI_STUB_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Process-wide configuration, loaded on first use and fixed afterwards.
pub fn global() -> &'static Config {
    GLOBAL_CONFIG.get_or_init(|| {
        Config::from_env().unwrap_or_else(|e| {
            // the logger is configured from this very value, so stderr it is
            eprintln!("ntapi stub: {}, falling back to defaults", e);
            Config::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::load("").unwrap(), Config::default());
        assert_eq!(Config::load("  \n").unwrap(), Config::default());
    }

    #[test]
    fn load_kebab_case_keys() {
        let c = Config::load(
            "log-level: debug\nlog-file: /tmp/ntapi.log\nrx-get-status: timeout\n",
        )
        .unwrap();
        assert_eq!(c.log_level, "debug");
        assert_eq!(c.log_file, "/tmp/ntapi.log");
        assert_eq!(c.rx_get_status, RxGetStatus::Timeout);
        assert_eq!(c.rx_get_status.status(), NT_STATUS_TIMEOUT);
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let c = Config::load("rx-get-status: try-again\n").unwrap();
        assert_eq!(c.log_level, DEFAULT_LOG_LEVEL);
        assert!(c.log_file.is_empty());
        assert_eq!(c.rx_get_status.status(), NT_STATUS_TRYAGAIN);

        let c = Config::load("log-level: ''\n").unwrap();
        assert_eq!(c.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        assert!(matches!(
            Config::load("rx-get-status: sometimes\n"),
            Err(ConfigError::YamlConfigInvalid(_))
        ));
        assert!(matches!(
            Config::load("- not\n- a\n- map\n"),
            Err(ConfigError::YamlConfigInvalid(_))
        ));
    }

    #[test]
    fn read_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log-level: trace").unwrap();
        let c = Config::load_from_file(file.path()).unwrap();
        assert_eq!(c.log_level, "trace");
        assert_eq!(c.rx_get_status, RxGetStatus::TryAgain);
    }

    #[test]
    fn unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            Config::load_from_file(&missing),
            Err(ConfigError::Unreadable { .. })
        ));
    }
}
