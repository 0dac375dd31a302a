// src/exec/invocation.rs

use std::fmt;

use crate::config::ReceiveSettings;

/// One call of the receiving tool: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// `<tool> file get <--wait|--loop> --conflict=<policy> [--verbose] <dir>`
    pub fn from_settings(settings: &ReceiveSettings) -> Self {
        let mut args = vec![
            "file".to_string(),
            "get".to_string(),
            settings.mode.as_flag().to_string(),
            format!("--conflict={}", settings.conflict),
        ];
        if settings.verbose {
            args.push("--verbose".to_string());
        }
        args.push(settings.dir.to_string_lossy().into_owned());

        Self {
            program: settings.tool.clone(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
