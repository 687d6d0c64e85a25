//! Trait boundary tokenizer
//!
//! Upstream descriptions mark trait boundaries with paired `**` delimiters
//! wrapping the trait name, immediately followed by the trait's prose body
//! until the next delimiter pair or end of string. The tokenizer splits on
//! the delimiter pairs; everything before the first delimiter is narrative,
//! and a trailing unpaired delimiter segment is narrative too (an unclosed
//! bold marker must never produce a dangling trait, and never a panic).

/// Trait boundary delimiter used by the upstream dataset
const DELIMITER: &str = "**";

/// A segment of the raw description
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Narrative text, not trait material
    Narrative(String),
    /// A delimiter-wrapped name candidate and its following body candidate
    Candidate {
        /// Text inside the delimiter pair
        name: String,
        /// Text between this pair and the next (or end of string)
        body: String,
    },
}

/// Split a raw description into narrative and candidate segments
pub(crate) fn tokenize(raw: &str) -> Vec<Segment> {
    let parts: Vec<&str> = raw.split(DELIMITER).collect();

    // No delimiters at all: the entire string is narrative
    if parts.len() == 1 {
        return vec![Segment::Narrative(raw.to_string())];
    }

    let mut segments = Vec::new();
    if !parts[0].is_empty() {
        segments.push(Segment::Narrative(parts[0].to_string()));
    }

    // Odd-indexed parts sit inside a delimiter pair (name candidates),
    // the part after each closes the pair (body candidate). A final
    // odd-indexed part with nothing after it is an unclosed marker.
    let mut i = 1;
    while i < parts.len() {
        if i + 1 < parts.len() {
            segments.push(Segment::Candidate {
                name: parts[i].to_string(),
                body: parts[i + 1].to_string(),
            });
            i += 2;
        } else {
            segments.push(Segment::Narrative(parts[i].to_string()));
            i += 1;
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiters_is_all_narrative() {
        let segments = tokenize("A simple creature with no special traits.");
        assert_eq!(
            segments,
            vec![Segment::Narrative(
                "A simple creature with no special traits.".to_string()
            )]
        );
    }

    #[test]
    fn test_single_pair() {
        let segments = tokenize("Intro. **Mindless.** No mind at all.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::Narrative("Intro. ".to_string()));
        assert_eq!(
            segments[1],
            Segment::Candidate {
                name: "Mindless.".to_string(),
                body: " No mind at all.".to_string(),
            }
        );
    }

    #[test]
    fn test_multiple_pairs() {
        let segments = tokenize("A. **X.** one **Y.** two");
        assert_eq!(segments.len(), 3);
        assert!(matches!(&segments[1], Segment::Candidate { name, .. } if name == "X."));
        assert!(matches!(&segments[2], Segment::Candidate { name, body } if name == "Y." && body == " two"));
    }

    #[test]
    fn test_unclosed_delimiter_is_narrative() {
        let segments = tokenize("A beast. **Unfinished trait with no closing marker");
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[1],
            Segment::Narrative("Unfinished trait with no closing marker".to_string())
        );
    }

    #[test]
    fn test_leading_delimiter() {
        let segments = tokenize("**First.** body text here");
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Candidate { name, .. } if name == "First."));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![Segment::Narrative(String::new())]);
    }

    #[test]
    fn test_adjacent_delimiters_do_not_panic() {
        // "****" splits into empty candidate material
        let segments = tokenize("a ****");
        assert_eq!(segments.len(), 2);
    }
}
