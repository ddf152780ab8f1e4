//! Classification of extracted effect blocks.
//!
//! Two lexical rules, both evaluated on every block:
//!
//! - **missing dependency array**: the effect calls state setters but its
//!   declaration has no second-argument array, so it re-runs after every
//!   render it schedules.
//! - **self-referential dependency**: the effect sets state that is listed
//!   in its own dependency array, so each run re-triggers itself.
//!
//! Both produce Critical findings. The Warning level exists in the data
//! model for future heuristics; the current rule set never emits it. The
//! classifier is a total function over arbitrary block text and never
//! errors.

use lazy_static::lazy_static;
use regex::Regex;

use super::extract::EffectBlock;
use super::types::{Finding, Level};

lazy_static! {
    /// A state-setter invocation: `set` + uppercase letter + identifier
    /// tail, followed by a call paren.
    static ref SETTER_CALL: Regex =
        Regex::new(r"\b(set[A-Z][A-Za-z0-9_]*)\s*\(").unwrap();

    /// A trailing dependency array closing the effect call:
    /// `, [entries])` with an optional semicolon.
    static ref TRAILING_DEPS: Regex =
        Regex::new(r",\s*\[([^\]]*)\]\s*\)\s*;?\s*$").unwrap();
}

/// Derive zero or more findings from one extracted block.
pub fn classify_block(block: &EffectBlock, file: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let text = &block.text;

    let setters = setter_names(text);
    let deps = TRAILING_DEPS.captures(text);

    // No dependency array at all: one finding per block, regardless of how
    // many setters appear.
    if deps.is_none() && !setters.is_empty() {
        findings.push(Finding {
            level: Level::Critical,
            file: file.to_string(),
            start_line: block.start_line,
            end_line: block.end_line,
            message: "useEffect with state setters but no dependency array".to_string(),
            suggestion: "Add an empty dependency array [] if the effect should run once, \
                         or list the values the effect depends on"
                .to_string(),
        });
    }

    // Dependency array present: flag every setter whose state name appears
    // in the array. An empty array has no entries and never fires.
    if let Some(caps) = deps {
        let entries: Vec<String> = caps[1]
            .split(',')
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        for &name in &setters {
            let state = name["set".len()..].to_lowercase();
            if entries.iter().any(|e| e.contains(&state)) {
                findings.push(Finding {
                    level: Level::Critical,
                    file: file.to_string(),
                    start_line: block.start_line,
                    end_line: block.end_line,
                    message: format!(
                        "{} modifies state that's in the dependency array",
                        name
                    ),
                    suggestion: "Remove the value from the dependency array or use an \
                                 empty array []"
                        .to_string(),
                });
            }
        }
    }

    findings
}

/// Distinct state-setter names in the block, in first-occurrence order.
fn setter_names(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    for caps in SETTER_CALL.captures_iter(text) {
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> EffectBlock {
        EffectBlock {
            text: text.to_string(),
            start_line: 1,
            end_line: text.lines().count().max(1),
        }
    }

    #[test]
    fn test_missing_deps_fires() {
        let b = block("useEffect(() => {\n  setName('x');\n});");
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Level::Critical);
        assert!(findings[0].message.contains("no dependency array"));
        assert_eq!(findings[0].file, "app.tsx");
        assert_eq!(findings[0].start_line, 1);
        assert_eq!(findings[0].end_line, 3);
    }

    #[test]
    fn test_missing_deps_fires_once_per_block() {
        let b = block("useEffect(() => {\n  setA(1);\n  setB(2);\n  setC(3);\n});");
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_empty_deps_never_fires() {
        let b = block("useEffect(() => {\n  setCount(0);\n}, []);");
        let findings = classify_block(&b, "app.tsx");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_self_referential_dep_fires() {
        let b = block("useEffect(() => {\n  setCount(count + 1);\n}, [count]);");
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, Level::Critical);
        assert!(findings[0].message.contains("setCount"));
    }

    #[test]
    fn test_self_referential_single_line() {
        let b = block("useEffect(() => { setCount(count + 1); }, [count]);");
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("setCount"));
    }

    #[test]
    fn test_unrelated_dep_does_not_fire() {
        let b = block("useEffect(() => {\n  setCount(user.id);\n}, [user]);");
        let findings = classify_block(&b, "app.tsx");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_multiple_self_referential_setters() {
        let b = block(
            "useEffect(() => {\n  setCount(count + 1);\n  setTotal(total + count);\n}, [count, total]);",
        );
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().any(|f| f.message.contains("setCount")));
        assert!(findings.iter().any(|f| f.message.contains("setTotal")));
    }

    #[test]
    fn test_repeated_setter_reported_once() {
        let b = block("useEffect(() => {\n  setCount(1);\n  setCount(2);\n}, [count]);");
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_dep_substring_match() {
        // `pageCount` contains `count`: the substring heuristic flags it.
        let b = block("useEffect(() => {\n  setCount(pageCount);\n}, [pageCount]);");
        let findings = classify_block(&b, "app.tsx");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_no_setters_no_findings() {
        let b = block("useEffect(() => {\n  console.log('mounted');\n});");
        let findings = classify_block(&b, "app.tsx");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_total_over_arbitrary_text() {
        let b = block("not even javascript {{{ ]] )) ,");
        let findings = classify_block(&b, "junk.ts");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_lowercase_set_is_not_a_setter() {
        // `settings(` and `setup(` do not match the setter pattern.
        let b = block("useEffect(() => {\n  settings();\n  setup();\n});");
        let findings = classify_block(&b, "app.tsx");
        assert!(findings.is_empty());
    }
}
