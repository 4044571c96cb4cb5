//! Path utility functions

use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the shared configuration file next to the executable
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Lookup key and config location of the running program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramIdentity {
    pub lookup_key: String,
    pub config_path: PathBuf,
}

impl ProgramIdentity {
    /// Derive the identity from `argv[0]` and the current executable
    pub fn detect() -> Result<Self> {
        let exe = env::current_exe()?;
        let invoked = env::args_os().next().map(PathBuf::from);
        Self::from_paths(invoked.as_deref(), &exe)
    }

    /// The key comes from the name the program was invoked as, so renamed
    /// copies and links each get their own section; the directory comes from
    /// the executable itself.
    pub fn from_paths(invoked: Option<&Path>, exe: &Path) -> Result<Self> {
        let lookup_key = invoked
            .and_then(lookup_key)
            .or_else(|| lookup_key(exe))
            .ok_or_else(|| anyhow!("cannot derive a program name from {}", exe.display()))?;

        let dir = exe
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        Ok(Self {
            lookup_key,
            config_path: config_path(dir),
        })
    }
}

/// File name without extension
pub fn lookup_key(program: &Path) -> Option<String> {
    program
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Get the configuration file path inside `dir`
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
