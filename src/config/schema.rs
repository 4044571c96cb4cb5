//! Configuration schema definitions

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Key holding the VM name inside a section
pub const VM_NAME_FIELD: &str = "VMName";

/// Key holding the VBoxManage path inside a section
pub const TOOL_PATH_FIELD: &str = "VBoxManage";

/// Tool used when nothing overrides it; found through the OS search path
pub const DEFAULT_TOOL: &str = "VBoxManage";

/// VM name the generic tray ships with
pub const PLACEHOLDER_VM_NAME: &str = "Your_VM_Name";

/// The VM to control and the tool that controls it
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    #[serde(rename = "VMName")]
    pub vm_name: String,
    #[serde(rename = "VBoxManage")]
    pub tool_path: String,
}

impl ResolvedConfig {
    pub fn new(vm_name: impl Into<String>, tool_path: impl Into<String>) -> Self {
        Self {
            vm_name: vm_name.into(),
            tool_path: tool_path.into(),
        }
    }

    /// Named VM driven by the `VBoxManage` found on PATH
    pub fn with_default_tool(vm_name: impl Into<String>) -> Self {
        Self::new(vm_name, DEFAULT_TOOL)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::with_default_tool(PLACEHOLDER_VM_NAME)
    }
}

/// Where a program instance gets its VM settings from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Compiled in; resolving never touches the file system
    Fixed(ResolvedConfig),
    /// A section of a shared JSON file
    File { path: PathBuf, lookup_key: String },
}

/// JSON object entries in document order, duplicate keys kept.
///
/// `serde_json::Map` keeps only the last duplicate; lookups here take the first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Entries<V>(pub Vec<(String, V)>);

impl<V> Entries<V> {
    /// First value stored under `key`
    pub fn first(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// One top-level value of the config file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SectionValue {
    Object(Entries<serde_json::Value>),
    Other(serde_json::Value),
}

/// The whole config file: program name -> section
pub type ConfigDocument = Entries<SectionValue>;
