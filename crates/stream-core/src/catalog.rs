// File: crates/stream-core/src/catalog.rs
// Summary: Fixed, ordered series catalog mapping names to display colours.

use crate::color::Rgba;
use crate::error::{Result, StreamError};

/// Index of a series within its catalog (stacking order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub usize);

impl SeriesId {
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesEntry {
    pub name: String,
    pub color: Rgba,
}

/// Ordered set of unique series names.
/// Contract: non-empty, names unique; order never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesCatalog {
    entries: Vec<SeriesEntry>,
}

impl SeriesCatalog {
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Rgba)>,
        S: Into<String>,
    {
        let mut out: Vec<SeriesEntry> = Vec::new();
        for (name, color) in entries {
            let name = name.into();
            if out.iter().any(|e| e.name == name) {
                return Err(StreamError::DuplicateSeries(name));
            }
            out.push(SeriesEntry { name, color });
        }
        if out.is_empty() {
            return Err(StreamError::EmptyCatalog);
        }
        Ok(Self { entries: out })
    }

    /// Build from `(name, "#rrggbb")` pairs.
    pub fn from_hex<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let parsed = entries
            .into_iter()
            .map(|(name, hex)| Rgba::from_hex(hex).map(|c| (name, c)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// The five LLM series of the reference dashboard.
    pub fn llm_models() -> Self {
        Self {
            entries: vec![
                entry("GPT-4", Rgba::rgb(0xe4, 0x1a, 0x1c)),
                entry("Gemini", Rgba::rgb(0x37, 0x7e, 0xb8)),
                entry("PaLM-2", Rgba::rgb(0x4d, 0xaf, 0x4a)),
                entry("Claude", Rgba::rgb(0x98, 0x4e, 0xa3)),
                entry("LLaMA-3.1", Rgba::rgb(0xff, 0x7f, 0x00)),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = SeriesId> + ExactSizeIterator {
        (0..self.entries.len()).map(SeriesId)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn get(&self, id: SeriesId) -> Option<&SeriesEntry> {
        self.entries.get(id.0)
    }

    /// Name of `id`; panics on an id from another catalog.
    pub fn name(&self, id: SeriesId) -> &str {
        &self.entries[id.0].name
    }

    pub fn color(&self, id: SeriesId) -> Rgba {
        self.entries[id.0].color
    }

    pub fn id_of(&self, name: &str) -> Option<SeriesId> {
        self.entries.iter().position(|e| e.name == name).map(SeriesId)
    }

    /// Like [`id_of`](Self::id_of) but reports unknown names as an error.
    pub fn require(&self, name: &str) -> Result<SeriesId> {
        self.id_of(name).ok_or_else(|| StreamError::UnknownSeries(name.to_string()))
    }
}

impl Default for SeriesCatalog {
    fn default() -> Self {
        Self::llm_models()
    }
}

fn entry(name: &str, color: Rgba) -> SeriesEntry {
    SeriesEntry { name: name.to_string(), color }
}
