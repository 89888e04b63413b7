pub mod defs;

use defs::{MINOR_WORDS, NAME_FIXES, PAY_PLANS, SHORT_FORM_RULES, ShortFormRule};

/// Data-quality sentinels emitted upstream; they pass through casing
/// untouched.
const PASSTHROUGH: &[&str] = &["REDACTED", "INVALID", "NO DATA REPORTED"];

/// Resolve a raw entity name to its canonical display form. Resolution
/// order is fixed: exact correction-table hit, case-insensitive hit, then
/// the same two lookups against the title-cased form, falling back to the
/// title-cased form itself. A name that already is a canonical form is
/// returned unchanged, which makes the whole operation idempotent.
pub fn canonicalize(raw: &str) -> String {
    if NAME_FIXES.iter().any(|&(_, canonical)| canonical == raw) {
        return raw.to_string();
    }
    if let Some(fixed) = lookup_fix(raw) {
        return fixed.to_string();
    }
    let tc = title_case(raw);
    if let Some(fixed) = lookup_fix(&tc) {
        return fixed.to_string();
    }
    tc
}

fn lookup_fix(name: &str) -> Option<&'static str> {
    // Exact hits win over case-insensitive ones.
    for &(from, to) in NAME_FIXES {
        if from == name {
            return Some(to);
        }
    }
    for &(from, to) in NAME_FIXES {
        if from.eq_ignore_ascii_case(name) {
            return Some(to);
        }
    }
    None
}

/// Title-case a name: capitalize each word, keep minor words lowercase
/// except in leading position, case hyphen-joined segments independently.
/// Repairs the source data's `U.s.` casing artifact and its `Nat`
/// truncation of "National".
pub fn title_case(raw: &str) -> String {
    if raw.is_empty() || PASSTHROUGH.contains(&raw) {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len() + 8);
    let mut word = String::new();
    let mut first_word = true;
    let mut chars = raw.chars().peekable();
    loop {
        let next = chars.next();
        let is_separator = match next {
            Some(c) if c.is_whitespace() => true,
            Some('-') => chars.peek().is_some_and(|n| n.is_ascii_alphabetic()),
            Some(_) => false,
            None => true,
        };
        if !is_separator {
            if let Some(c) = next {
                word.push(c);
            }
            continue;
        }
        if !word.is_empty() {
            push_cased_word(&mut out, &word, first_word);
            first_word = false;
            word.clear();
        }
        match next {
            Some(c) => out.push(c),
            None => break,
        }
    }

    out.replace("U.s.", "U.S.")
}

fn push_cased_word(out: &mut String, word: &str, first_word: bool) {
    let lower = word.to_ascii_lowercase();
    if !first_word && MINOR_WORDS.contains(&lower.as_str()) {
        out.push_str(&lower);
        return;
    }
    let mut cased = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(c) = chars.next() {
        cased.extend(c.to_uppercase());
    }
    for c in chars {
        cased.extend(c.to_lowercase());
    }
    if cased == "Nat" {
        out.push_str("National");
    } else {
        out.push_str(&cased);
    }
}

/// Compact display form of a canonical name: ordered acronym and
/// prefix-strip rules, first match wins, unmatched names pass through.
/// Never longer than its input.
pub fn short_form(canonical: &str) -> String {
    for rule in SHORT_FORM_RULES {
        match *rule {
            ShortFormRule::Acronym { full, abbr } => {
                if canonical == full {
                    return abbr.to_string();
                }
            }
            ShortFormRule::StripPrefix(prefix) => {
                if let Some(rest) = canonical.strip_prefix(prefix) {
                    if !rest.is_empty() {
                        return rest.to_string();
                    }
                }
            }
        }
    }
    canonical.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeParts {
    pub plan: String,
    pub level: String,
    pub plan_name: String,
}

/// Split a pay grade like `GS-13` into plan code, level, and the canonical
/// plan name. Unknown plan codes fall back to the code itself.
pub fn explain_grade(grade: &str) -> GradeParts {
    if grade.is_empty() {
        return GradeParts {
            plan: String::new(),
            level: String::new(),
            plan_name: String::new(),
        };
    }
    let parts: Vec<&str> = grade.split('-').collect();
    let plan = parts.first().copied().unwrap_or("").to_string();
    let level = parts.get(1).copied().unwrap_or("").to_string();
    let plan_name = PAY_PLANS
        .iter()
        .find(|(code, _)| *code == plan)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| plan.clone());
    GradeParts {
        plan,
        level,
        plan_name,
    }
}
