use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::variables::{substitute, VariableMap};
use crate::error::ConfigError;

/// Directives read from one `testconfig.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestConfig {
    pub includes: Vec<String>,
    pub deletes: Vec<String>,
    pub arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TestConfig {
    fn apply(&mut self, key: &str, value: String) -> bool {
        match key {
            "inc" => self.includes.push(value),
            "del" => self.deletes.push(value),
            "arg" => self.arguments.push(value),
            "dsc" => self.description = Some(value),
            "link" => self.link = Some(value),
            _ => return false,
        }
        true
    }
}

/// Reads and parses the config at `path`. A missing file yields `Ok(None)`.
/// Bytes that are not valid UTF-8 are decoded as U+FFFD.
pub fn load_test_config(
    path: &Path,
    variables: &VariableMap,
) -> Result<Option<TestConfig>, ConfigError> {
    match fs::read(path) {
        Ok(bytes) => {
            parse_test_config(path, &String::from_utf8_lossy(&bytes), variables).map(Some)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::read(path, e)),
    }
}

/// Parses config `content`; `path` is only used for diagnostics. Lines end
/// at `\r\n`, `\n` or a lone `\r`.
pub fn parse_test_config(
    path: &Path,
    content: &str,
    variables: &VariableMap,
) -> Result<TestConfig, ConfigError> {
    let mut config = TestConfig::default();
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let content = content.replace("\r\n", "\n");

    for (index, line) in content.split(['\n', '\r']).enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ConfigError::malformed_line(path, index + 1, line))?;
        let key = key.trim();
        let value = substitute(value.trim(), variables);

        if !config.apply(key, value) {
            tracing::warn!(
                "Unrecognized option '{}' in file {}",
                key,
                path.display()
            );
        }
    }

    Ok(config)
}
