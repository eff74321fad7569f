//! Regex pattern tester feature
//!
//! Patterns use the `regex` crate dialect: no look-around and no
//! backreferences. Flags follow the familiar `gimsux` letters.

use chrono::Utc;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::ToolFeature;
use crate::core::history::SavedList;
use crate::core::storage::{keys, KeyValueStore};
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::types::{
    generate_id, HighlightSegment, NamedGroup, PatternTestResult, RegexMatch, SavedPattern, ToolDescriptor,
};

mod library;

pub use library::{common_pattern, regex_block, PatternTemplate, RegexBlock, COMMON_PATTERNS, REGEX_BLOCKS};

/// Upper bound on the compiled program size for user patterns
const COMPILED_SIZE_LIMIT: usize = 1 << 20;

// ============================================================================
// Flags
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexFlags {
    /// `g`: report every match instead of the first
    pub global: bool,
    /// `i`
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries
    pub multi_line: bool,
    /// `s`: `.` matches newlines
    pub dot_all: bool,
    /// `x`: whitespace and `#` comments in the pattern are ignored
    pub verbose: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self {
            global: true,
            case_insensitive: false,
            multi_line: false,
            dot_all: false,
            verbose: false,
        }
    }
}

impl RegexFlags {
    /// Parses flag letters. `u` is accepted and ignored since matching is
    /// always Unicode-aware. Unknown or repeated letters are rejected.
    pub fn parse(flags: &str) -> ToolResult<Self> {
        let mut parsed = Self {
            global: false,
            ..Self::default()
        };
        let mut seen = String::new();

        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(ToolError::InvalidInput(format!("Duplicate flag '{}'", flag)));
            }
            seen.push(flag);

            match flag {
                'g' => parsed.global = true,
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_all = true,
                'x' => parsed.verbose = true,
                'u' => {}
                other => return Err(ToolError::InvalidInput(format!("Unsupported flag '{}'", other))),
            }
        }
        Ok(parsed)
    }

    pub fn compile(&self, pattern: &str) -> ToolResult<Regex> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_all)
            .ignore_whitespace(self.verbose)
            .size_limit(COMPILED_SIZE_LIMIT)
            .build()
            .map_err(|e| ToolError::InvalidPattern(e.to_string()))
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.verbose, 'x'),
        ];
        for (enabled, letter) in letters {
            if enabled {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Matching
// ============================================================================

fn to_match(regex: &Regex, captures: &regex::Captures<'_>) -> Option<RegexMatch> {
    let whole = captures.get(0)?;
    let groups = captures
        .iter()
        .skip(1)
        .map(|group| group.map(|m| m.as_str().to_string()))
        .collect();
    let named_groups = regex
        .capture_names()
        .flatten()
        .map(|name| NamedGroup {
            name: name.to_string(),
            value: captures.name(name).map(|m| m.as_str().to_string()),
        })
        .collect();

    Some(RegexMatch {
        start: whole.start(),
        end: whole.end(),
        text: whole.as_str().to_string(),
        groups,
        named_groups,
    })
}

/// Runs `pattern` over `text`. An empty pattern matches nothing.
pub fn test_pattern(pattern: &str, flags: &RegexFlags, text: &str) -> ToolResult<PatternTestResult> {
    if pattern.is_empty() {
        return Ok(PatternTestResult {
            matches: Vec::new(),
            match_count: 0,
        });
    }

    let regex = flags.compile(pattern)?;
    let matches: Vec<RegexMatch> = if flags.global {
        regex
            .captures_iter(text)
            .filter_map(|captures| to_match(&regex, &captures))
            .collect()
    } else {
        regex
            .captures(text)
            .and_then(|captures| to_match(&regex, &captures))
            .into_iter()
            .collect()
    };

    debug!(flags = %flags, match_count = matches.len(), "Tested pattern");
    Ok(PatternTestResult {
        match_count: matches.len(),
        matches,
    })
}

/// Splits `text` into alternating plain and matched segments. Empty and
/// overlapping matches are skipped, as are offsets outside `text` or off a
/// char boundary.
pub fn highlight(text: &str, matches: &[RegexMatch]) -> Vec<HighlightSegment> {
    let mut sorted: Vec<&RegexMatch> = matches.iter().collect();
    sorted.sort_by_key(|m| m.start);

    let mut segments = Vec::new();
    let mut last = 0;
    for m in sorted {
        if m.start >= m.end || m.start < last || !text.is_char_boundary(m.start) || !text.is_char_boundary(m.end) {
            continue;
        }
        if m.start > last {
            segments.push(HighlightSegment {
                text: text[last..m.start].to_string(),
                is_match: false,
            });
        }
        segments.push(HighlightSegment {
            text: text[m.start..m.end].to_string(),
            is_match: true,
        });
        last = m.end;
    }
    if last < text.len() {
        segments.push(HighlightSegment {
            text: text[last..].to_string(),
            is_match: false,
        });
    }
    segments
}

// ============================================================================
// Pattern breakdown
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenExplanation {
    pub token: String,
    pub explanation: String,
}

fn explain_char(c: char) -> &'static str {
    match c {
        '^' => "Start of line/string",
        '$' => "End of line/string",
        '.' => "Any character except newline",
        '*' => "Zero or more of the preceding character",
        '+' => "One or more of the preceding character",
        '?' => "Zero or one of the preceding character",
        '|' => "OR operator",
        '(' => "Start of capturing group",
        ')' => "End of capturing group",
        '[' => "Start of character class",
        ']' => "End of character class",
        '{' => "Start of quantifier",
        '}' => "End of quantifier",
        c if c.is_ascii_alphanumeric() => "Literal character",
        _ => "Special character",
    }
}

/// Character-by-character reading of a pattern, pairing escapes
pub fn explain_pattern(pattern: &str) -> Vec<TokenExplanation> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                chars.next();
                let explanation = match next {
                    'd' => "Any digit (0-9)",
                    'w' => "Any word character (a-z, A-Z, 0-9, _)",
                    's' => "Any whitespace character",
                    'D' => "Any character that is not a digit",
                    'W' => "Any non-word character",
                    'S' => "Any character that is not whitespace",
                    'b' => "Word boundary",
                    _ => "Escaped character",
                };
                tokens.push(TokenExplanation {
                    token: format!("\\{}", next),
                    explanation: explanation.to_string(),
                });
                continue;
            }
        }
        tokens.push(TokenExplanation {
            token: c.to_string(),
            explanation: explain_char(c).to_string(),
        });
    }
    tokens
}

// ============================================================================
// Saved patterns
// ============================================================================

pub struct RegexSession {
    patterns: SavedList<SavedPattern>,
}

impl RegexSession {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            patterns: SavedList::new(store, keys::REGEX_PATTERNS),
        }
    }

    pub fn save(&self, name: &str, pattern: &str, flags: &RegexFlags, description: &str) -> ToolResult<SavedPattern> {
        if pattern.is_empty() {
            return Err(ToolError::InvalidInput("Cannot save an empty pattern".to_string()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ToolError::InvalidInput("Please enter a name for your pattern".to_string()));
        }

        let saved = SavedPattern {
            id: generate_id(),
            name: name.to_string(),
            pattern: pattern.to_string(),
            flags: flags.to_string(),
            description: description.trim().to_string(),
            date: Utc::now(),
        };
        self.patterns.add(saved.clone())?;
        Ok(saved)
    }

    pub fn patterns(&self) -> ToolResult<Vec<SavedPattern>> {
        self.patterns.list()
    }

    pub fn delete(&self, id: &str) -> ToolResult<bool> {
        self.patterns.remove(id)
    }
}

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Clone)]
pub struct RegexTesterFeature;

impl ToolFeature for RegexTesterFeature {
    fn id(&self) -> &'static str {
        "regex_tester"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            id: self.id().to_string(),
            name: "Regex Pattern Tester".to_string(),
            description: "Test, validate and debug your regular expressions with real-time feedback".to_string(),
            path: "/regex-pattern-tester".to_string(),
            icon: "🔍".to_string(),
        }
    }

    fn storage_keys(&self) -> &'static [&'static str] {
        &[keys::REGEX_PATTERNS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::InMemoryStore;
    use pretty_assertions::assert_eq;

    fn flags(letters: &str) -> RegexFlags {
        RegexFlags::parse(letters).unwrap()
    }

    #[test]
    fn test_flag_parsing() {
        let parsed = flags("gimsux");
        assert!(parsed.global && parsed.case_insensitive && parsed.multi_line && parsed.dot_all && parsed.verbose);
        assert_eq!(parsed.to_string(), "gimsx");

        assert!(!flags("").global);
        assert_eq!(RegexFlags::default().to_string(), "g");
        assert!(matches!(RegexFlags::parse("gy"), Err(ToolError::InvalidInput(_))));
        assert!(matches!(RegexFlags::parse("gg"), Err(ToolError::InvalidInput(_))));
    }

    #[test]
    fn test_global_and_first_match() {
        let all = test_pattern(r"\d+", &flags("g"), "a1 b22 c333").unwrap();
        assert_eq!(all.match_count, 3);
        let texts: Vec<&str> = all.matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "22", "333"]);
        assert_eq!((all.matches[1].start, all.matches[1].end), (4, 6));

        let first = test_pattern(r"\d+", &flags(""), "a1 b22 c333").unwrap();
        assert_eq!(first.match_count, 1);
        assert_eq!(first.matches[0].text, "1");
    }

    #[test]
    fn test_case_and_multiline_flags() {
        assert_eq!(test_pattern("hello", &flags("g"), "Hello hello").unwrap().match_count, 1);
        assert_eq!(test_pattern("hello", &flags("gi"), "Hello hello").unwrap().match_count, 2);

        let text = "one\ntwo";
        assert_eq!(test_pattern("^t", &flags("g"), text).unwrap().match_count, 0);
        assert_eq!(test_pattern("^t", &flags("gm"), text).unwrap().match_count, 1);
        assert_eq!(test_pattern("one.two", &flags("g"), text).unwrap().match_count, 0);
        assert_eq!(test_pattern("one.two", &flags("gs"), text).unwrap().match_count, 1);
    }

    #[test]
    fn test_groups() {
        let result = test_pattern(r"(?P<key>\w+)=(\d+)?", &flags("g"), "a=1 b=").unwrap();
        assert_eq!(result.match_count, 2);
        assert_eq!(result.matches[0].groups, vec![Some("a".to_string()), Some("1".to_string())]);
        assert_eq!(result.matches[1].groups, vec![Some("b".to_string()), None]);
        assert_eq!(
            result.matches[0].named_groups,
            vec![NamedGroup {
                name: "key".to_string(),
                value: Some("a".to_string())
            }]
        );
    }

    #[test]
    fn test_empty_and_invalid_patterns() {
        let empty = test_pattern("", &flags("g"), "anything").unwrap();
        assert_eq!(empty.match_count, 0);

        assert!(matches!(
            test_pattern("(unclosed", &flags("g"), "x"),
            Err(ToolError::InvalidPattern(_))
        ));
        // Look-around is outside the supported dialect
        assert!(test_pattern("a(?=b)", &flags("g"), "ab").is_err());
    }

    #[test]
    fn test_highlight() {
        let text = "a1 b22";
        let result = test_pattern(r"\d+", &flags("g"), text).unwrap();
        let segments = highlight(text, &result.matches);
        let parts: Vec<(&str, bool)> = segments.iter().map(|s| (s.text.as_str(), s.is_match)).collect();
        assert_eq!(parts, vec![("a", false), ("1", true), (" b", false), ("22", true)]);

        assert_eq!(
            highlight("plain", &[]),
            vec![HighlightSegment {
                text: "plain".to_string(),
                is_match: false
            }]
        );
        let empty_matches = test_pattern("x*", &flags("g"), "ab").unwrap();
        assert_eq!(highlight("ab", &empty_matches.matches).len(), 1);
    }

    #[test]
    fn test_highlight_skips_misaligned_offsets() {
        let span = |start, end| RegexMatch {
            start,
            end,
            text: String::new(),
            groups: Vec::new(),
            named_groups: Vec::new(),
        };
        let text = "é1";
        let plain = vec![HighlightSegment {
            text: text.to_string(),
            is_match: false,
        }];
        assert_eq!(highlight(text, &[span(1, 2)]), plain);
        assert_eq!(highlight(text, &[span(0, 1)]), plain);
        assert_eq!(highlight(text, &[span(2, 9)]), plain);
        assert_eq!(highlight(text, &[span(3, 2)]), plain);

        let parts: Vec<(String, bool)> = highlight(text, &[span(1, 2), span(2, 3)])
            .into_iter()
            .map(|s| (s.text, s.is_match))
            .collect();
        assert_eq!(parts, vec![("é".to_string(), false), ("1".to_string(), true)]);
    }

    #[test]
    fn test_common_patterns_match_their_examples() {
        for template in COMMON_PATTERNS {
            let result = test_pattern(template.pattern, &flags("g"), template.example).unwrap();
            assert_eq!(result.match_count, 1, "{}", template.id);
        }
        assert!(common_pattern("ipv4").is_some());
        assert!(common_pattern("password").is_none());
        assert_eq!(regex_block("any-digit").unwrap().pattern, r"\d");
    }

    #[test]
    fn test_explain_pattern() {
        let tokens = explain_pattern(r"^\d+a\.");
        let pairs: Vec<(&str, &str)> = tokens
            .iter()
            .map(|t| (t.token.as_str(), t.explanation.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("^", "Start of line/string"),
                (r"\d", "Any digit (0-9)"),
                ("+", "One or more of the preceding character"),
                ("a", "Literal character"),
                (r"\.", "Escaped character"),
            ]
        );
        assert_eq!(explain_pattern("\\")[0].explanation, "Special character");
    }

    #[test]
    fn test_saved_patterns() {
        let session = RegexSession::new(Arc::new(InMemoryStore::new()));
        assert!(session.save("Digits", "", &flags("g"), "").is_err());
        assert!(session.save(" ", r"\d", &flags("g"), "").is_err());

        let saved = session.save("Digits", r"\d+", &flags("gi"), " numbers ").unwrap();
        assert_eq!(saved.flags, "gi");
        assert_eq!(saved.description, "numbers");
        assert_eq!(RegexFlags::parse(&saved.flags).unwrap(), flags("ig"));

        assert_eq!(session.patterns().unwrap().len(), 1);
        assert!(session.delete(&saved.id).unwrap());
        assert!(session.patterns().unwrap().is_empty());
    }
}
