//! String interning for vertex identifiers.
//!
//! Maps vertex name strings to dense integer IDs so distances, predecessors
//! and adjacency lists can live in plain `Vec`s.

use rustc_hash::FxHashMap;

/// Interned vertex ID (u32 for compact storage and fast hashing).
pub type VertexId = u32;

/// String interner that maps vertex names to integers.
#[derive(Debug, Clone)]
pub struct VertexInterner {
    to_int: FxHashMap<String, VertexId>,
    from_int: Vec<String>,
}

impl VertexInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Build an interner whose IDs follow the sorted order of `names`.
    ///
    /// Duplicates are collapsed. Sorting makes the numbering independent of
    /// `HashMap` iteration order.
    pub fn from_sorted<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sorted: Vec<&str> = names.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut interner = Self::with_capacity(sorted.len());
        for name in sorted {
            interner.intern(name);
        }
        interner
    }

    /// Intern a string, returning its integer ID.
    /// If already interned, returns the existing ID.
    pub fn intern(&mut self, s: &str) -> VertexId {
        if let Some(&id) = self.to_int.get(s) {
            return id;
        }
        let id = self.from_int.len() as VertexId;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        id
    }

    #[inline]
    pub fn get(&self, s: &str) -> Option<VertexId> {
        self.to_int.get(s).copied()
    }

    #[inline]
    pub fn resolve(&self, id: VertexId) -> Option<&str> {
        self.from_int.get(id as usize).map(|s| s.as_str())
    }

    /// Number of interned vertices.
    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }

    /// Iterate `(id, name)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.from_int
            .iter()
            .enumerate()
            .map(|(i, s)| (i as VertexId, s.as_str()))
    }
}

impl Default for VertexInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
