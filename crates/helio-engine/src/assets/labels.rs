use serde::{Deserialize, Serialize};

/// Identifies a registered label text.
/// Index into the label manifest; written into label instances as f32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LabelId(pub u32);

/// A single manifest entry: the text the host should rasterize for an ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Numeric ID referenced by label instances.
    pub id: u32,
    /// Text to rasterize (UTF-8; Turkish strings pass through unchanged).
    pub text: String,
}

/// Registry of label texts. The engine ships IDs over the wire; the host
/// fetches this table as JSON once at init and rasterizes each text.
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a label text, returning its ID.
    /// Registering the same text twice returns the existing ID.
    pub fn register(&mut self, text: &str) -> LabelId {
        if let Some(entry) = self.entries.iter().find(|e| e.text == text) {
            return LabelId(entry.id);
        }
        let id = self.entries.len() as u32;
        self.entries.push(LabelEntry {
            id,
            text: text.to_string(),
        });
        LabelId(id)
    }

    /// Look up the text for an ID.
    pub fn text(&self, id: LabelId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id.0)
            .map(|e| e.text.as_str())
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the manifest to JSON for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<LabelEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_assigns_sequential_ids() {
        let mut table = LabelTable::new();
        assert_eq!(table.register("ANA SAYFA"), LabelId(0));
        assert_eq!(table.register("HAKKIMDA"), LabelId(1));
        assert_eq!(table.register("DENEYİM"), LabelId(2));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn register_dedups_existing_text() {
        let mut table = LabelTable::new();
        let a = table.register("PROJELERİM");
        let b = table.register("PROJELERİM");
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn text_lookup() {
        let mut table = LabelTable::new();
        let id = table.register("İLETİŞİM");
        assert_eq!(table.text(id), Some("İLETİŞİM"));
        assert_eq!(table.text(LabelId(99)), None);
    }

    #[test]
    fn json_round_trip_keeps_utf8() {
        let mut table = LabelTable::new();
        table.register("YETENEKLER");
        table.register("Galaksi 1");
        let json = table.to_json().unwrap();
        let parsed = LabelTable::from_json(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.text(LabelId(1)), Some("Galaksi 1"));
    }
}
