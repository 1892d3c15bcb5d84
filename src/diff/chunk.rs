//! Classification of diff runs into addressable, reviewable chunks.

use serde::{Deserialize, Serialize};

use super::engine::{DiffKind, DiffOp};

/// Maximum characters of neighboring unchanged text shown as preview context.
const CONTEXT_CHARS: usize = 30;

/// What kind of edit a chunk represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkKind {
    /// Text present in both versions
    Unchanged,
    /// Text only the proposal has
    Addition,
    /// Text only the original has
    Deletion,
    /// A deleted run paired with the inserted run that replaces it
    Replacement,
}

/// Opaque, batch-unique chunk identifier.
///
/// Ids are sequential per batch and seeded per batch, never derived from
/// chunk content (two chunks may carry identical text). Ids from different
/// batches are never comparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkId(String);

impl ChunkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequential chunk id generator for one batch.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate the next sequential id.
    pub fn next_id(&mut self) -> ChunkId {
        self.count += 1;
        ChunkId(format!("{}-{}", self.seed, self.count))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

/// One independently reviewable unit of a word-level diff.
///
/// Immutable once created for a batch; ordered by `sequence_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub kind: ChunkKind,
    /// Original-side text (proposal-side text for an `Addition`)
    pub text: String,
    /// Proposal-side text, set only for `Replacement`
    pub replacement_text: Option<String>,
    /// Trimmed excerpt of the nearest preceding unchanged text, for preview
    /// only; never feeds reconstruction
    pub context_before: String,
    /// Trimmed excerpt of the nearest following unchanged text
    pub context_after: String,
    /// Position of this chunk within its batch
    pub sequence_index: usize,
}

impl Chunk {
    /// True for chunks that carry an actual edit (anything but `Unchanged`).
    pub fn is_edit(&self) -> bool {
        self.kind != ChunkKind::Unchanged
    }
}

/// Merge cleaned diff runs into a chunk list.
///
/// An `Equal` run becomes `Unchanged`. A `Delete` immediately followed by an
/// `Insert` merges into one `Replacement`. A standalone `Delete` becomes
/// `Deletion`, a standalone `Insert` becomes `Addition`. Identical inputs
/// always produce byte-identical chunk sequences for a given id seed.
pub fn classify(ops: &[DiffOp], ids: &mut IdGenerator) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < ops.len() {
        let op = &ops[i];
        let (kind, text, replacement_text) = match op.kind {
            DiffKind::Equal => (ChunkKind::Unchanged, op.text(), None),
            DiffKind::Insert => (ChunkKind::Addition, op.text(), None),
            DiffKind::Delete => {
                if let Some(next) = ops.get(i + 1).filter(|next| next.kind == DiffKind::Insert) {
                    i += 1;
                    (ChunkKind::Replacement, op.text(), Some(next.text()))
                } else {
                    (ChunkKind::Deletion, op.text(), None)
                }
            }
        };
        chunks.push(Chunk {
            id: ids.next_id(),
            kind,
            text,
            replacement_text,
            context_before: String::new(),
            context_after: String::new(),
            sequence_index: chunks.len(),
        });
        i += 1;
    }

    attach_context(&mut chunks);
    chunks
}

/// Fill in preview context for edit chunks from their nearest unchanged
/// neighbors.
fn attach_context(chunks: &mut [Chunk]) {
    let unchanged: Vec<(usize, String)> = chunks
        .iter()
        .enumerate()
        .filter(|(_, c)| c.kind == ChunkKind::Unchanged)
        .map(|(i, c)| (i, c.text.clone()))
        .collect();

    for (i, chunk) in chunks.iter_mut().enumerate() {
        if !chunk.is_edit() {
            continue;
        }
        if let Some((_, text)) = unchanged.iter().rev().find(|(u, _)| *u < i) {
            chunk.context_before = tail_excerpt(text, CONTEXT_CHARS);
        }
        if let Some((_, text)) = unchanged.iter().find(|(u, _)| *u > i) {
            chunk.context_after = head_excerpt(text, CONTEXT_CHARS);
        }
    }
}

/// Last `max_chars` characters of `text`, trimmed.
fn tail_excerpt(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = chars.len().saturating_sub(max_chars);
    chars[start..].iter().collect::<String>().trim().to_string()
}

/// First `max_chars` characters of `text`, trimmed.
fn head_excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect::<String>().trim().to_string()
}
