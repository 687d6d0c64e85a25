//! Text normalization for narrative text and trait bodies
//!
//! The upstream dataset leaves two kinds of noise in descriptions:
//! trailing license boilerplate, and stray underscore characters from
//! malformed italic markup. The cleanup rules run in a fixed order
//! (truncate boilerplate, strip underscore artifacts, tidy whitespace)
//! because the later rules rely on the earlier ones having removed
//! ambiguity. The later rules can also reveal a marker the truncation
//! scan missed (a doubled space or underscore inside the marker text),
//! so the pass repeats until the text stops changing. The result is
//! idempotent: normalizing already normalized text is a no-op.

/// Normalize text using the given boilerplate marker list
pub(crate) fn normalize_text(text: &str, markers: &[String]) -> String {
    let mut current = rule_pass(text, markers);
    loop {
        let next = rule_pass(&current, markers);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One pass of the ordered cleanup rules
///
/// A pass that changes the text always shortens it or removes an
/// underscore, so the fixpoint loop above terminates.
fn rule_pass(text: &str, markers: &[String]) -> String {
    let truncated = truncate_boilerplate(text, markers);
    let stripped = strip_underscore_artifacts(truncated);
    tidy_whitespace(&stripped)
}

/// Truncate the text at the earliest occurrence of any boilerplate marker
fn truncate_boilerplate<'a>(text: &'a str, markers: &[String]) -> &'a str {
    let cut = markers
        .iter()
        .filter(|m| !m.is_empty())
        .filter_map(|m| text.find(m.as_str()))
        .min();

    match cut {
        Some(pos) => &text[..pos],
        None => text,
    }
}

/// Remove underscore markup artifacts
///
/// An underscore is an artifact when it sits at a string edge, next to
/// whitespace, or next to another underscore; those are dropped. An
/// underscore immediately before a capital letter mid-word is replaced
/// with a space. Underscores genuinely interior to a word are kept.
fn strip_underscore_artifacts(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }

        let prev = if i == 0 { None } else { Some(chars[i - 1]) };
        let next = chars.get(i + 1).copied();

        let isolated = prev.map_or(true, |p| p.is_whitespace() || p == '_')
            || next.map_or(true, |n| n.is_whitespace() || n == '_');

        if isolated {
            continue;
        }

        if next.map_or(false, |n| n.is_uppercase()) {
            out.push(' ');
            continue;
        }

        out.push(c);
    }

    out
}

/// Collapse whitespace runs to a single space, drop whitespace before
/// `.` and `,`, and trim the ends
fn tidy_whitespace(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(" .", ".").replace(" ,", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["Open Game License".to_string()]
    }

    fn norm(s: &str) -> String {
        normalize_text(s, &markers())
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(norm("A simple creature."), "A simple creature.");
    }

    #[test]
    fn test_boilerplate_truncation() {
        assert_eq!(
            norm("A dragon breathes fire. Open Game License v1.0a..."),
            "A dragon breathes fire."
        );
    }

    #[test]
    fn test_earliest_marker_wins() {
        let markers = vec!["BBB".to_string(), "AAA".to_string()];
        assert_eq!(normalize_text("text AAA mid BBB end", &markers), "text");
    }

    #[test]
    fn test_isolated_underscore_collapsed() {
        assert_eq!(norm("a _ b"), "a b");
        assert_eq!(
            norm("wings._ Sea dragons are large."),
            "wings. Sea dragons are large."
        );
    }

    #[test]
    fn test_leading_and_trailing_underscores_stripped() {
        assert_eq!(norm("_emphasized text_"), "emphasized text");
        assert_eq!(norm("__ doubled __"), "doubled");
    }

    #[test]
    fn test_underscore_before_capital_becomes_space() {
        assert_eq!(norm("deeps_Sea dragons"), "deeps Sea dragons");
    }

    #[test]
    fn test_interior_underscore_kept() {
        assert_eq!(norm("the snake_like tail"), "the snake_like tail");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(norm("too   many\n\nspaces"), "too many spaces");
    }

    #[test]
    fn test_space_before_punctuation_removed() {
        assert_eq!(norm("a pause , then an end ."), "a pause, then an end.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   "), "");
    }

    #[test]
    fn test_obscured_marker_still_truncates() {
        // Whitespace collapse and underscore stripping can reveal a
        // marker the first truncation scan missed
        assert_eq!(norm("A dragon. Open  Game License v1.0a"), "A dragon.");
        assert_eq!(norm("A dragon. Open_Game License v1.0a"), "A dragon.");
    }

    #[test]
    fn test_idempotent_on_samples() {
        let samples = [
            "wings._ Sea dragons are large.",
            "_lead_ and _trail_",
            "a _ b _ c",
            "spaced  .  out  ,  text",
            "A dragon. Open Game License v1.0a",
            "A dragon. Open  Game License v1.0a",
            "A dragon. Open_Game License v1.0a",
            "word_Capital and snake_case",
        ];
        for s in samples {
            let once = norm(s);
            assert_eq!(norm(&once), once, "not idempotent for {:?}", s);
        }
    }
}
