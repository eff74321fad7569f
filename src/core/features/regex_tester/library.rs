use serde::Serialize;

/// A ready-made pattern with a sample input it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// A token the pattern builder can append
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegexBlock {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
}

pub const COMMON_PATTERNS: &[PatternTemplate] = &[
    PatternTemplate {
        id: "email",
        name: "Email Address",
        pattern: r"^[\w.\-]+@([\w-]+\.)+[\w-]{2,4}$",
        description: "Matches a valid email address format",
        example: "example@domain.com",
    },
    PatternTemplate {
        id: "phone",
        name: "Phone Number (US)",
        pattern: r"^(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$",
        description: "Matches US phone numbers in various formats",
        example: "(123) 456-7890",
    },
    PatternTemplate {
        id: "url",
        name: "URL",
        pattern: r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)",
        description: "Matches URLs (http or https)",
        example: "https://www.example.com",
    },
    PatternTemplate {
        id: "date",
        name: "Date (MM/DD/YYYY)",
        pattern: r"^(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])/(19|20)\d{2}$",
        description: "Matches dates in MM/DD/YYYY format",
        example: "01/31/2023",
    },
    PatternTemplate {
        id: "time",
        name: "Time (24-hour)",
        pattern: r"^([01]\d|2[0-3]):([0-5]\d)$",
        description: "Matches time in 24-hour format (HH:MM)",
        example: "13:45",
    },
    PatternTemplate {
        id: "ipv4",
        name: "IPv4 Address",
        pattern: r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
        description: "Matches a valid IPv4 address",
        example: "192.168.1.1",
    },
    PatternTemplate {
        id: "zipcode",
        name: "Zip Code (US)",
        pattern: r"^\d{5}(?:[-\s]\d{4})?$",
        description: "Matches US zip codes (5 digits or 5+4 format)",
        example: "12345-6789",
    },
];

pub const REGEX_BLOCKS: &[RegexBlock] = &[
    RegexBlock {
        id: "any-digit",
        name: "Any Digit",
        pattern: r"\d",
        description: "Matches any digit (0-9)",
    },
    RegexBlock {
        id: "any-non-digit",
        name: "Any Non-Digit",
        pattern: r"\D",
        description: "Matches any character that is not a digit",
    },
    RegexBlock {
        id: "any-word-char",
        name: "Any Word Character",
        pattern: r"\w",
        description: "Matches any word character (alphanumeric + underscore)",
    },
    RegexBlock {
        id: "any-non-word-char",
        name: "Any Non-Word Character",
        pattern: r"\W",
        description: "Matches any non-word character",
    },
    RegexBlock {
        id: "any-whitespace",
        name: "Any Whitespace",
        pattern: r"\s",
        description: "Matches any whitespace character (spaces, tabs, line breaks)",
    },
    RegexBlock {
        id: "any-non-whitespace",
        name: "Any Non-Whitespace",
        pattern: r"\S",
        description: "Matches any character that is not a whitespace",
    },
    RegexBlock {
        id: "any-char",
        name: "Any Character",
        pattern: ".",
        description: "Matches any character except line breaks",
    },
    RegexBlock {
        id: "zero-or-more",
        name: "Zero or More",
        pattern: "*",
        description: "Matches 0 or more of the preceding character",
    },
    RegexBlock {
        id: "one-or-more",
        name: "One or More",
        pattern: "+",
        description: "Matches 1 or more of the preceding character",
    },
    RegexBlock {
        id: "zero-or-one",
        name: "Zero or One",
        pattern: "?",
        description: "Matches 0 or 1 of the preceding character",
    },
    RegexBlock {
        id: "start-of-line",
        name: "Start of Line",
        pattern: "^",
        description: "Matches the start of a line",
    },
    RegexBlock {
        id: "end-of-line",
        name: "End of Line",
        pattern: "$",
        description: "Matches the end of a line",
    },
    RegexBlock {
        id: "digit-range",
        name: "Digit Range",
        pattern: "[0-9]",
        description: "Matches any digit from 0 to 9",
    },
    RegexBlock {
        id: "letter-range-lower",
        name: "Lowercase Letters",
        pattern: "[a-z]",
        description: "Matches any lowercase letter from a to z",
    },
    RegexBlock {
        id: "letter-range-upper",
        name: "Uppercase Letters",
        pattern: "[A-Z]",
        description: "Matches any uppercase letter from A to Z",
    },
    RegexBlock {
        id: "not-in-range",
        name: "Not in Range",
        pattern: "[^...]",
        description: "Matches any character not in the brackets",
    },
    RegexBlock {
        id: "or",
        name: "Or",
        pattern: "|",
        description: "Matches either the expression before or after the |",
    },
    RegexBlock {
        id: "group",
        name: "Group",
        pattern: "(...)",
        description: "Groups multiple tokens together and captures the matched substring",
    },
    RegexBlock {
        id: "non-capturing-group",
        name: "Non-Capturing Group",
        pattern: "(?:...)",
        description: "Groups multiple tokens together without capturing the match",
    },
    RegexBlock {
        id: "exact-count",
        name: "Exact Count",
        pattern: "{n}",
        description: "Matches exactly n occurrences of the preceding character",
    },
    RegexBlock {
        id: "min-max-count",
        name: "Min-Max Count",
        pattern: "{min,max}",
        description: "Matches between min and max occurrences of the preceding character",
    },
];

pub fn common_pattern(id: &str) -> Option<&'static PatternTemplate> {
    COMMON_PATTERNS.iter().find(|template| template.id == id)
}

pub fn regex_block(id: &str) -> Option<&'static RegexBlock> {
    REGEX_BLOCKS.iter().find(|block| block.id == id)
}
