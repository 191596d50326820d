//! Cuisine type normalization.
//!
//! Crowd-entered cuisine labels arrive in several spellings per category
//! (gendered forms, colloquial variants). Every write path and every
//! search filter runs through [`normalize`] so stored and queried values
//! always compare post-normalization.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Synonym table mapping spelling variants to one canonical label per
/// cuisine category. Built once, never mutated.
static TYPE_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Asian
        ("אסיאתי", "אסייתי"),
        ("אסייתית", "אסייתי"),
        ("אסייתי", "אסייתי"),
        // grilled meat
        ("בשרי", "בשרים"),
        ("בשרית", "בשרים"),
        ("על האש", "בשרים"),
        ("גריל", "בשרים"),
        ("בשרים", "בשרים"),
        // burgers
        ("בורגר", "המבורגר"),
        ("המבורגר", "המבורגר"),
        // Mizrahi
        ("מזרחית", "מזרחי"),
        ("מזרחי", "מזרחי"),
        // Italian
        ("איטלקית", "איטלקי"),
        ("איטלקי", "איטלקי"),
    ])
});

/// Maps a free-text cuisine label to its canonical form.
///
/// Trims surrounding whitespace first. Unrecognized labels pass through
/// trimmed but otherwise unchanged, so new categories need no code change.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    match TYPE_CANONICAL.get(trimmed) {
        Some(canonical) => (*canonical).to_string(),
        None => trimmed.to_string(),
    }
}
