//! Built-in example texts, one per emotion the model is trained on.

pub const SAMPLE_TEXTS: [&str; 4] = [
    "I'm so excited about this new opportunity! It's going to be amazing!",
    "I'm really worried about the upcoming presentation. What if something goes wrong?",
    "This is absolutely frustrating! Nothing is working as it should!",
    "I feel so lonely and disappointed. Nothing seems to go right anymore.",
];

/// Sample by zero-based index.
pub fn sample_text(index: usize) -> Option<&'static str> {
    SAMPLE_TEXTS.get(index).copied()
}
