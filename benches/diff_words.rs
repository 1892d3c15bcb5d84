//! Benchmarks for tokenization and word-level diffing
//!
//! Run with: cargo bench diff_words

use redraft::{classify, compute_diff, tokenize, IdGenerator, SuggestionBatch};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const ORIGINAL: &str = "Just shipped a new feature for our app, check out the blog post for \
    details and let me know what you think about the new design direction we took";
const PROPOSED: &str = "We just shipped a brand new feature for the app! Check out the blog \
    post for all the details, and tell me what you think of the design direction";

// ============================================================================
// Tokenization
// ============================================================================

#[divan::bench]
fn tokenize_tweet_length() {
    tokenize(divan::black_box(ORIGINAL));
}

#[divan::bench]
fn tokenize_300_words() {
    let text = "lorem ipsum dolor sit amet ".repeat(60);
    tokenize(divan::black_box(&text));
}

// ============================================================================
// Diff computation
// ============================================================================

#[divan::bench]
fn diff_tweet_rewrite() {
    let original = tokenize(ORIGINAL);
    let proposed = tokenize(PROPOSED);
    compute_diff(divan::black_box(&original), divan::black_box(&proposed));
}

#[divan::bench]
fn diff_identical_inputs() {
    let tokens = tokenize(ORIGINAL);
    compute_diff(divan::black_box(&tokens), divan::black_box(&tokens));
}

#[divan::bench]
fn classify_tweet_rewrite() {
    let ops = compute_diff(&tokenize(ORIGINAL), &tokenize(PROPOSED));
    classify(divan::black_box(&ops), &mut IdGenerator::from_seed("bench"));
}

// ============================================================================
// Full batch construction
// ============================================================================

#[divan::bench]
fn batch_from_tweet_rewrite() {
    SuggestionBatch::new(
        divan::black_box(ORIGINAL),
        divan::black_box(PROPOSED),
        &mut IdGenerator::from_seed("bench"),
    );
}
