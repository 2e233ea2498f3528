// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Porter stemming for English.
//!
//! Reduces inflected words to a shared stem so that "computing", "computes" and
//! "compute" all land on the same index term. The algorithm is a fixed pipeline
//! of rewrite passes (1a, 1b, 1c, 2, 3, 4, 5a, 5b), each gated on the *measure*
//! of what remains of the word.
//!
//! Steps 2–4 are driven by ordered rule tables rather than conditionals: the
//! first rule whose suffix matches decides the outcome, whether or not its
//! measure condition holds. Table order therefore matters (`ational` must be
//! tried before `tional`, `ement` before `ment` before `ent`).
//!
//! # Measure
//!
//! Write a word as `[C](VC){m}[V]` where `C` is a run of consonants and `V` a
//! run of vowels. `m` is the measure. `tree` has m=0, `trouble` m=1,
//! `troubles` m=2. A letter is a vowel if it is one of `aeiou`, or a `y`
//! preceded by a consonant.
//!
//! No rule ever makes a word longer than it was, and no state survives a call.

/// When a rule's extra condition on the remaining stem applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Only the measure gate.
    None,
    /// Stem must also end in `s` or `t` (step 4's `-ion`).
    EndsWithSOrT,
}

/// One suffix rewrite: `suffix → replacement` when `measure(stem) >= min_measure`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub min_measure: usize,
    pub condition: Condition,
}

const fn rule(suffix: &'static str, replacement: &'static str, min_measure: usize) -> Rule {
    Rule {
        suffix,
        replacement,
        min_measure,
        condition: Condition::None,
    }
}

/// Step 2: double suffixes to single ones.
pub const STEP2_RULES: &[Rule] = &[
    rule("ational", "ate", 1),
    rule("tional", "tion", 1),
    rule("enci", "ence", 1),
    rule("anci", "ance", 1),
    rule("izer", "ize", 1),
    rule("abli", "able", 1),
    rule("alli", "al", 1),
    rule("entli", "ent", 1),
    rule("eli", "e", 1),
    rule("ousli", "ous", 1),
    rule("ization", "ize", 1),
    rule("ation", "ate", 1),
    rule("ator", "ate", 1),
    rule("alism", "al", 1),
    rule("iveness", "ive", 1),
    rule("fulness", "ful", 1),
    rule("ousness", "ous", 1),
    rule("aliti", "al", 1),
    rule("iviti", "ive", 1),
    rule("biliti", "ble", 1),
];

/// Step 3: -ic-, -full, -ness etc.
pub const STEP3_RULES: &[Rule] = &[
    rule("icate", "ic", 1),
    rule("ative", "", 1),
    rule("alize", "al", 1),
    rule("iciti", "ic", 1),
    rule("ical", "ic", 1),
    rule("ful", "", 1),
    rule("ness", "", 1),
];

/// Step 4: strip residual suffixes from long stems.
pub const STEP4_RULES: &[Rule] = &[
    rule("al", "", 2),
    rule("ance", "", 2),
    rule("ence", "", 2),
    rule("er", "", 2),
    rule("ic", "", 2),
    rule("able", "", 2),
    rule("ible", "", 2),
    rule("ant", "", 2),
    rule("ement", "", 2),
    rule("ment", "", 2),
    rule("ent", "", 2),
    Rule {
        suffix: "ion",
        replacement: "",
        min_measure: 2,
        condition: Condition::EndsWithSOrT,
    },
    rule("ou", "", 2),
    rule("ism", "", 2),
    rule("ate", "", 2),
    rule("iti", "", 2),
    rule("ous", "", 2),
    rule("ive", "", 2),
    rule("ize", "", 2),
];

/// Stem a lowercase word.
///
/// Words of two characters or fewer come back unchanged.
///
/// ```
/// use sitesearch::stem;
///
/// assert_eq!(stem("running"), "run");
/// assert_eq!(stem("caresses"), "caress");
/// assert_eq!(stem("generalization"), "gener");
/// ```
pub fn stem(word: &str) -> String {
    let mut w: Vec<char> = word.chars().collect();
    if w.len() <= 2 {
        return word.to_string();
    }

    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    apply_rules(&mut w, STEP2_RULES);
    apply_rules(&mut w, STEP3_RULES);
    apply_rules(&mut w, STEP4_RULES);
    step5a(&mut w);
    step5b(&mut w);

    w.into_iter().collect()
}

// ============================================================================
// PREDICATES
// ============================================================================

fn is_consonant(w: &[char], i: usize) -> bool {
    match w[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => {
            // Classes alternate along a run of y's, starting from the letter before the run.
            let start = w[..i].iter().rposition(|&c| c != 'y').map_or(0, |p| p + 1);
            let first_is_consonant = start == 0 || !is_consonant(w, start - 1);
            first_is_consonant == ((i - start) % 2 == 0)
        }
        _ => true,
    }
}

/// Consonant flag for every position, in one left-to-right pass.
fn consonant_mask(w: &[char]) -> Vec<bool> {
    let mut mask: Vec<bool> = Vec::with_capacity(w.len());
    for (i, &c) in w.iter().enumerate() {
        let consonant = match c {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !mask[i - 1],
            _ => true,
        };
        mask.push(consonant);
    }
    mask
}

/// Number of vowel-run → consonant-run transitions after the leading consonants.
pub fn measure(w: &[char]) -> usize {
    let mask = consonant_mask(w);
    let n = mask.len();
    let mut i = 0;
    let mut m = 0;

    while i < n && mask[i] {
        i += 1;
    }
    while i < n {
        while i < n && !mask[i] {
            i += 1;
        }
        if i >= n {
            break;
        }
        while i < n && mask[i] {
            i += 1;
        }
        m += 1;
    }
    m
}

fn has_vowel(w: &[char]) -> bool {
    consonant_mask(w).iter().any(|&consonant| !consonant)
}

fn ends_with_double_consonant(w: &[char]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// consonant-vowel-consonant ending, final consonant not w, x or y.
fn ends_cvc(w: &[char]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 1)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 3)
        && !matches!(w[n - 1], 'w' | 'x' | 'y')
}

fn ends_with(w: &[char], suffix: &str) -> bool {
    let len = suffix.chars().count();
    len <= w.len() && w[w.len() - len..].iter().copied().eq(suffix.chars())
}

fn replace_suffix(w: &mut Vec<char>, suffix_len: usize, replacement: &str) {
    w.truncate(w.len() - suffix_len);
    w.extend(replacement.chars());
}

// ============================================================================
// STEPS
// ============================================================================

/// Plurals: sses → ss, ies → i, ss → ss, s → ∅.
fn step1a(w: &mut Vec<char>) {
    if ends_with(w, "sses") || ends_with(w, "ies") {
        w.truncate(w.len() - 2);
    } else if ends_with(w, "s") && !ends_with(w, "ss") {
        w.pop();
    }
}

/// -eed, -ed, -ing.
fn step1b(w: &mut Vec<char>) {
    if ends_with(w, "eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            w.pop();
        }
        return;
    }

    for suffix in ["ed", "ing"] {
        if ends_with(w, suffix) {
            let stem_len = w.len() - suffix.len();
            if has_vowel(&w[..stem_len]) {
                w.truncate(stem_len);
                step1b_fixup(w);
            }
            return;
        }
    }
}

/// Repair the stem left behind by removing -ed/-ing.
fn step1b_fixup(w: &mut Vec<char>) {
    if ends_with(w, "at") || ends_with(w, "bl") || ends_with(w, "iz") {
        w.push('e');
    } else if ends_with_double_consonant(w) && !matches!(w.last(), Some('l' | 's' | 'z')) {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push('e');
    }
}

/// Terminal y → i when the stem has a vowel.
fn step1c(w: &mut [char]) {
    let n = w.len();
    if n > 1 && w[n - 1] == 'y' && has_vowel(&w[..n - 1]) {
        w[n - 1] = 'i';
    }
}

/// First matching suffix decides; the rewrite happens only if its gate passes.
fn apply_rules(w: &mut Vec<char>, rules: &[Rule]) {
    let Some(rule) = rules.iter().find(|r| ends_with(w, r.suffix)) else {
        return;
    };

    let suffix_len = rule.suffix.chars().count();
    let stem = &w[..w.len() - suffix_len];
    let condition_holds = match rule.condition {
        Condition::None => true,
        Condition::EndsWithSOrT => matches!(stem.last(), Some('s' | 't')),
    };

    if condition_holds && measure(stem) >= rule.min_measure {
        replace_suffix(w, suffix_len, rule.replacement);
    }
}

/// Drop a final e when the stem is long enough, or m=1 without a cvc ending.
fn step5a(w: &mut Vec<char>) {
    if w.last() != Some(&'e') {
        return;
    }
    let stem = &w[..w.len() - 1];
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
        w.pop();
    }
}

/// -ll → -l for long words.
fn step5b(w: &mut Vec<char>) {
    if ends_with(w, "ll") && measure(w) > 1 {
        w.pop();
    }
}
