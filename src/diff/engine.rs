//! Word-level diff between an original and a proposed token stream.
//!
//! The output is an ordered run list with two reconstruction identities:
//! concatenating the `Equal` and `Delete` runs reproduces the original, and
//! concatenating the `Equal` and `Insert` runs reproduces the proposal.
//! Inputs are short-form text (at most a few hundred tokens), so the plain
//! quadratic LCS table is fine.

use serde::{Deserialize, Serialize};

use super::token::Token;

/// Which side(s) of the diff a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffKind {
    /// Present in both the original and the proposal
    Equal,
    /// Present only in the proposal
    Insert,
    /// Present only in the original
    Delete,
}

/// A maximal run of consecutive tokens sharing one [`DiffKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub tokens: Vec<Token>,
}

impl DiffOp {
    fn new(kind: DiffKind) -> Self {
        Self {
            kind,
            tokens: Vec::new(),
        }
    }

    /// Concatenated text of this run's tokens.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Compute the word-level diff of `original` against `proposed`.
///
/// The longest common token prefix and suffix are pinned as `Equal` runs
/// before the LCS table is built, so among minimal alignments the one with
/// the longest leading/trailing equal runs always wins. That keeps chunk
/// boundaries stable on short text, where the table itself often has ties.
/// A cleanup pass then folds trivial single-token `Equal` runs (a space or
/// a punctuation mark) sandwiched between edits into the neighboring
/// delete/insert pair, so one conceptual edit stays one run pair.
pub fn compute_diff(original: &[Token], proposed: &[Token]) -> Vec<DiffOp> {
    let prefix = common_prefix_len(original, proposed);
    let o_rest = &original[prefix..];
    let p_rest = &proposed[prefix..];
    let suffix = common_suffix_len(o_rest, p_rest);

    let mut ops = Vec::new();
    push_run(&mut ops, DiffKind::Equal, &original[..prefix]);

    let o_mid = &o_rest[..o_rest.len() - suffix];
    let p_mid = &p_rest[..p_rest.len() - suffix];
    lcs_diff(o_mid, p_mid, &mut ops);

    push_run(&mut ops, DiffKind::Equal, &o_rest[o_rest.len() - suffix..]);

    let ops = coalesce(ops);
    cleanup(ops)
}

fn common_prefix_len(a: &[Token], b: &[Token]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len(a: &[Token], b: &[Token]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn push_run(ops: &mut Vec<DiffOp>, kind: DiffKind, tokens: &[Token]) {
    if tokens.is_empty() {
        return;
    }
    if let Some(last) = ops.last_mut() {
        if last.kind == kind {
            last.tokens.extend_from_slice(tokens);
            return;
        }
    }
    let mut op = DiffOp::new(kind);
    op.tokens.extend_from_slice(tokens);
    ops.push(op);
}

/// Standard LCS table over the unmatched middle, walked front-to-back.
/// On ties the walk prefers deletions, so a delete run always precedes the
/// insert run it pairs with (the classifier relies on that ordering).
fn lcs_diff(original: &[Token], proposed: &[Token], ops: &mut Vec<DiffOp>) {
    let n = original.len();
    let m = proposed.len();

    // lcs[i][j] = LCS length of original[i..] and proposed[j..]
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if original[i] == proposed[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && original[i] == proposed[j] {
            push_run(ops, DiffKind::Equal, std::slice::from_ref(&original[i]));
            i += 1;
            j += 1;
        } else if j == m || (i < n && lcs[i + 1][j] >= lcs[i][j + 1]) {
            push_run(ops, DiffKind::Delete, std::slice::from_ref(&original[i]));
            i += 1;
        } else {
            push_run(ops, DiffKind::Insert, std::slice::from_ref(&proposed[j]));
            j += 1;
        }
    }
}

/// Merge adjacent same-kind runs and drop empty ones.
fn coalesce(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut merged: Vec<DiffOp> = Vec::with_capacity(ops.len());
    for op in ops {
        if op.tokens.is_empty() {
            continue;
        }
        push_run(&mut merged, op.kind, &op.tokens);
    }
    merged
}

/// Fold trivial `Equal` runs into their edit neighbors.
///
/// An `Equal` run of exactly one whitespace or punctuation token, with a
/// non-`Equal` run on each side, gets carried on both sides of a single
/// delete/insert pair replacing the three runs. The original-side token
/// sequence (`Equal` + `Delete`) and proposal-side sequence (`Equal` +
/// `Insert`) are both unchanged by the fold, so the reconstruction
/// identities hold by construction.
fn cleanup(mut ops: Vec<DiffOp>) -> Vec<DiffOp> {
    loop {
        let Some(k) = find_foldable(&ops) else {
            return ops;
        };

        let next = ops.remove(k + 1);
        let trivial = ops.remove(k);
        let prev = ops.remove(k - 1);

        let mut deleted = DiffOp::new(DiffKind::Delete);
        let mut inserted = DiffOp::new(DiffKind::Insert);
        match prev.kind {
            DiffKind::Delete => deleted.tokens.extend_from_slice(&prev.tokens),
            DiffKind::Insert => inserted.tokens.extend_from_slice(&prev.tokens),
            DiffKind::Equal => unreachable!("fold neighbors are edits"),
        }
        deleted.tokens.extend_from_slice(&trivial.tokens);
        inserted.tokens.extend_from_slice(&trivial.tokens);
        match next.kind {
            DiffKind::Delete => deleted.tokens.extend_from_slice(&next.tokens),
            DiffKind::Insert => inserted.tokens.extend_from_slice(&next.tokens),
            DiffKind::Equal => unreachable!("fold neighbors are edits"),
        }

        ops.insert(k - 1, inserted);
        ops.insert(k - 1, deleted);
        ops = coalesce(ops);
    }
}

fn find_foldable(ops: &[DiffOp]) -> Option<usize> {
    (1..ops.len().saturating_sub(1)).find(|&k| {
        ops[k].kind == DiffKind::Equal
            && ops[k].tokens.len() == 1
            && ops[k].tokens[0].is_trivial()
            && ops[k - 1].kind != DiffKind::Equal
            && ops[k + 1].kind != DiffKind::Equal
    })
}
