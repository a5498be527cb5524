//! Payload normalization
//!
//! Canonicalizes raw payload text before signature matching so that trivial
//! evasion tricks (case variation, whitespace padding, SQL line comments) do
//! not hide an attack from the rule set.
//!
//! The steps run in a fixed order; each step feeds the next:
//! 1. lowercase
//! 2. collapse whitespace runs into a single space
//! 3. strip from the first `--` through the end of the string
//! 4. trim

/// Normalize a raw payload for signature matching.
///
/// Total over all inputs: any string in, a string out, including the empty
/// string. Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    // Collapse each run of whitespace (space, tab, newline, ...) to one space.
    let mut collapsed = String::with_capacity(lowered.len());
    let mut prev_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !prev_space {
                collapsed.push(' ');
            }
            prev_space = true;
        } else {
            collapsed.push(c);
            prev_space = false;
        }
    }

    // Strip SQL line comments. Newlines were already collapsed to spaces, so
    // everything from the first `--` onward is comment content.
    if let Some(idx) = collapsed.find("--") {
        collapsed.truncate(idx);
    }

    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("UnIoN SeLeCT"), "union select");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("union\t\n  select"), "union select");
        assert_eq!(normalize("a \t b\r\nc"), "a b c");
    }

    #[test]
    fn test_strips_line_comment() {
        assert_eq!(normalize("admin'-- drop everything"), "admin'");
        assert_eq!(normalize("x -- y -- z"), "x");
    }

    #[test]
    fn test_comment_strip_runs_after_collapse() {
        // The newline does not end the comment: whitespace collapsing removes
        // line boundaries before the comment strip runs.
        assert_eq!(normalize("safe--hidden\nDROP TABLE users"), "safe");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("  hello  "), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "UnIoN   SeLeCT",
            "admin'-- drop everything",
            "  plain text  ",
            "../../etc/passwd",
            "<ScRiPt>alert(1)</sCrIpT>",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_multibyte_input() {
        assert_eq!(normalize("héllo\u{3000}wörld"), "héllo wörld");
    }
}
