#![allow(dead_code)]

use tasksort::document::{DependencyDocument, DependencyPair};

/// Builder for `DependencyDocument` to simplify test setup.
pub struct DependencyDocumentBuilder {
    doc: DependencyDocument,
}

impl DependencyDocumentBuilder {
    pub fn new() -> Self {
        Self {
            doc: DependencyDocument::default(),
        }
    }

    /// `child` depends on `parent`.
    pub fn depends(mut self, child: &str, parent: &str) -> Self {
        self.doc.pairs.push(DependencyPair::new(parent, child));
        self
    }

    /// Each task in `chain` depends on the one before it.
    pub fn chain(mut self, chain: &[&str]) -> Self {
        for window in chain.windows(2) {
            self = self.depends(window[1], window[0]);
        }
        self
    }

    pub fn pairs(&self) -> &[DependencyPair] {
        &self.doc.pairs
    }

    pub fn build(self) -> DependencyDocument {
        self.doc
    }

    /// Render the document as JSON, as a user would write it on disk.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.doc).expect("dependency document serializes")
    }
}

impl Default for DependencyDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a pair list written as `(parent, child)` tuples.
pub fn pairs(list: &[(&str, &str)]) -> Vec<DependencyPair> {
    list.iter()
        .map(|(parent, child)| DependencyPair::new(*parent, *child))
        .collect()
}
