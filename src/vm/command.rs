//! VBoxManage command lines

use crate::config::ResolvedConfig;
use std::fmt;

/// What the user asked the VM to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmOperation {
    Start,
    Stop,
}

impl VmOperation {
    /// Verb used in status messages ("Failed to start VM")
    pub fn verb(self) -> &'static str {
        match self {
            VmOperation::Start => "start",
            VmOperation::Stop => "stop",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            VmOperation::Start => "started",
            VmOperation::Stop => "stopped",
        }
    }
}

/// One invocation of the control tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl VmCommand {
    /// `<tool> startvm <name> --type headless`
    pub fn start(config: &ResolvedConfig) -> Self {
        Self {
            program: config.tool_path.clone(),
            args: vec![
                "startvm".into(),
                config.vm_name.clone(),
                "--type".into(),
                "headless".into(),
            ],
        }
    }

    /// `<tool> controlvm <name> poweroff`
    pub fn stop(config: &ResolvedConfig) -> Self {
        Self {
            program: config.tool_path.clone(),
            args: vec!["controlvm".into(), config.vm_name.clone(), "poweroff".into()],
        }
    }

    pub fn for_operation(op: VmOperation, config: &ResolvedConfig) -> Self {
        match op {
            VmOperation::Start => Self::start(config),
            VmOperation::Stop => Self::stop(config),
        }
    }
}

/// Renders the command line the way a user would type it; the VM name
/// (second word) is always quoted.
impl fmt::Display for VmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote_if_needed(&self.program))?;
        for (i, arg) in self.args.iter().enumerate() {
            if i == 1 {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", quote_if_needed(arg))?;
            }
        }
        Ok(())
    }
}

fn quote_if_needed(word: &str) -> String {
    if word.is_empty() || word.contains(char::is_whitespace) {
        format!("\"{word}\"")
    } else {
        word.to_string()
    }
}
