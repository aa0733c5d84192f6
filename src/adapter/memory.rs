use indexmap::IndexMap;

use super::OutputSink;

/// Collects outputs in memory, in the order they were set.
///
/// Backs `--format json`, where all outputs are printed as one JSON object.
#[derive(Debug, Default)]
pub struct MemorySink {
    outputs: IndexMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }

    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.outputs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    /// Render every output as a single JSON object of strings.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.outputs)
    }
}

impl OutputSink for MemorySink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), anyhow::Error> {
        self.outputs.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
