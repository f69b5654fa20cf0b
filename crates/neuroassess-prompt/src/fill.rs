//! Single-pass `{name}` placeholder substitution.
//!
//! Values are copied into the output as-is and never re-scanned, so text that
//! happens to contain `{another_placeholder}` cannot alter the template.
//! Braces that do not name a known variable are kept literally.
//!
//! ```rust
//! use neuroassess_prompt::fill::fill;
//!
//! let text = fill("Q: {question} {unknown}", &[("question", "why {question}?")]);
//! assert_eq!(text, "Q: why {question}? {unknown}");
//! ```

/// Replace every `{name}` in `template` whose `name` appears in `vars`.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + vars.iter().map(|(_, value)| value.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_each_occurrence() {
        let text = fill("{a}-{b}-{a}", &[("a", "1"), ("b", "2")]);
        assert_eq!(text, "1-2-1");
    }

    #[test]
    fn keeps_unmatched_braces() {
        assert_eq!(fill("{ open", &[("open", "x")]), "{ open");
        assert_eq!(fill("close }", &[]), "close }");
        assert_eq!(fill("{{a}}", &[("a", "x")]), "{x}");
    }

    #[test]
    fn empty_value_removes_placeholder() {
        assert_eq!(fill("[{history}]", &[("history", "")]), "[]");
    }
}
