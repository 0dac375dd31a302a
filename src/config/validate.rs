// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile, ReceiveSection};
use crate::errors::{DropcatchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DropcatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_receive_section(&raw.receive)?;
        Ok(ConfigFile::new_unchecked(raw.receive))
    }
}

fn validate_receive_section(section: &ReceiveSection) -> Result<()> {
    if let Some(tool) = &section.tool {
        if tool.trim().is_empty() {
            return Err(DropcatchError::ConfigError(
                "[receive].tool must not be empty".to_string(),
            ));
        }
    }

    if section.max_cycles == Some(0) {
        return Err(DropcatchError::ConfigError(
            "[receive].max_cycles must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
