//! Lexical prefilter: a cheap deterministic gate applied before any
//! model call.
//!
//! A text passes when it mentions polymers AND either an MD-method term
//! or a force-field/resolution term. Matching is case-insensitive and
//! word-boundary aware, so "MD" does not fire inside "MDMA". Pure
//! functions, no I/O; an empty string never matches anything and is a
//! normal rejection, not an error.

use std::sync::LazyLock;

use regex::Regex;

/// MD-method vocabulary: the method name plus named simulation packages.
static MD_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bmolecular dynamics\b|\bMD\b|\bMD simulations?\b|\bLAMMPS\b|\bGROMACS\b|\bNAMD\b",
    )
    .unwrap()
});

/// Force-field and resolution vocabulary.
static FF_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bforce[- ]field\b|\bOPLS\b|\bAMBER\b|\bCHARMM\b|\bCOMPASS\b|\bDREIDING\b|\bPCFF\b|\bGROMOS\b|\bTraPPE\b|\bMARTINI\b|\bReaxFF\b|\bcoarse[- ]grained\b|\bunited[- ]atom\b|\ball[- ]atom\b",
    )
    .unwrap()
});

/// Property vocabulary for the priority keyword boost. Independent of
/// the gate patterns above.
static PROPERTY_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bviscosit(?:y|ies)\b|\brheolog(?:y|ical)\b|\bglass transition\b|\bTg\b|\bdiffus(?:ion|ivity)\b|\bself[- ]diffus(?:ion|ivity)\b|\bYoung'?s modulus\b|\belastic modulus\b|\bstress[-–]strain\b|\bdensity\b|\bradius of gyration\b|\bRg\b|\bpermeabilit(?:y|ies)\b|\btransport\b|\bthermal conductivity\b|\bdielectric (?:constant|permittivity)\b|\bconductivity\b",
    )
    .unwrap()
});

/// Gate: polymer vocabulary AND (MD-method OR force-field vocabulary).
pub fn passes(text: &str) -> bool {
    // Substring containment on purpose: "copolymer", "polymeric" etc.
    // all count as polymer vocabulary.
    let has_polymer = text.to_lowercase().contains("polymer");
    has_polymer && (MD_TERMS.is_match(text) || FF_TERMS.is_match(text))
}

/// Property-term hit used for the priority keyword boost.
pub fn has_property_keywords(text: &str) -> bool {
    PROPERTY_TERMS.is_match(text)
}
