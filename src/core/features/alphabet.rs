//! Alphabet generator feature
//!
//! Random letter combinations built from vowel and consonant pools.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use super::decision::shuffle;
use super::ToolFeature;
use crate::core::history::BoundedHistory;
use crate::core::random::{random_index, RandomSource};
use crate::core::storage::{keys, KeyValueStore};
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::settings::AlphabetSettings;
use crate::shared::types::{generate_id, GenerationHistoryItem, ToolDescriptor};

pub const VOWELS: &str = "aeiou";
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
pub const EXPORT_FILE_NAME: &str = "alphabet-combinations.txt";

/// Length used when no length range is set
pub const FIXED_LENGTH: usize = 5;

/// Longest combination, and the upper bound of every count range
pub const MAX_LENGTH: usize = 30;

/// Most combinations per generation
pub const MAX_COUNT: usize = 100;

/// Attempts allowed per requested combination before giving up on uniqueness
const ATTEMPTS_PER_COMBINATION: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn validate(&self, what: &str) -> ToolResult<()> {
        if self.min > self.max {
            return Err(ToolError::InvalidInput(format!(
                "Minimum {} ({}) exceeds maximum ({})",
                what, self.min, self.max
            )));
        }
        if self.max > MAX_LENGTH {
            return Err(ToolError::InvalidInput(format!(
                "Maximum {} ({}) exceeds {}",
                what, self.max, MAX_LENGTH
            )));
        }
        Ok(())
    }

    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        let span = self.max.saturating_sub(self.min).saturating_add(1);
        self.min.saturating_add(random_index(rng, span))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Uppercase,
    Lowercase,
    #[default]
    Mixed,
    Capitalize,
}

/// Disabled options are `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Without a range every combination is `FIXED_LENGTH` letters
    pub length: Option<CountRange>,
    /// Without a range each combination gets one to three vowels
    pub vowels: Option<CountRange>,
    /// Without a range consonants fill the rest
    pub consonants: Option<CountRange>,
    /// Without a mode combinations are lowercase
    pub case: Option<CaseMode>,
    /// Letters added back to the pools after exclusion
    pub include_chars: Option<String>,
    pub exclude_chars: Option<String>,
    pub count: usize,
    pub allow_duplicates: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: Some(CountRange::new(5, 10)),
            vowels: None,
            consonants: None,
            case: Some(CaseMode::Mixed),
            include_chars: None,
            exclude_chars: None,
            count: 5,
            allow_duplicates: false,
        }
    }
}

impl GeneratorOptions {
    fn validate(&self) -> ToolResult<()> {
        if !(1..=MAX_COUNT).contains(&self.count) {
            return Err(ToolError::InvalidInput(format!(
                "Count must be between 1 and {}, got {}",
                MAX_COUNT, self.count
            )));
        }
        if let Some(length) = &self.length {
            length.validate("length")?;
            if length.max == 0 {
                return Err(ToolError::InvalidInput("Length must be at least 1".to_string()));
            }
        }
        if let Some(vowels) = &self.vowels {
            vowels.validate("vowel count")?;
        }
        if let Some(consonants) = &self.consonants {
            consonants.validate("consonant count")?;
        }
        Ok(())
    }
}

/// Vowel and consonant pools after exclusions and inclusions
#[derive(Debug, Clone, PartialEq)]
struct CharacterPools {
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl CharacterPools {
    fn build(options: &GeneratorOptions) -> Self {
        let excluded = options.exclude_chars.as_deref().unwrap_or("").to_lowercase();
        let keep = |c: &char| !excluded.contains(*c);
        let mut vowels: Vec<char> = VOWELS.chars().filter(keep).collect();
        let mut consonants: Vec<char> = CONSONANTS.chars().filter(keep).collect();

        for c in options.include_chars.as_deref().unwrap_or("").to_lowercase().chars() {
            if VOWELS.contains(c) && !vowels.contains(&c) {
                vowels.push(c);
            } else if CONSONANTS.contains(c) && !consonants.contains(&c) {
                consonants.push(c);
            }
        }

        Self { vowels, consonants }
    }
}

fn pick_from<R: RandomSource + ?Sized>(pool: &[char], what: &str, rng: &mut R) -> ToolResult<char> {
    if pool.is_empty() {
        return Err(ToolError::InvalidInput(format!("No {} left after exclusions", what)));
    }
    Ok(pool[random_index(rng, pool.len())])
}

fn apply_case<R: RandomSource + ?Sized>(letters: &[char], case: Option<CaseMode>, rng: &mut R) -> String {
    match case {
        Some(CaseMode::Uppercase) => letters.iter().collect::<String>().to_uppercase(),
        None | Some(CaseMode::Lowercase) => letters.iter().collect::<String>().to_lowercase(),
        Some(CaseMode::Mixed) => letters
            .iter()
            .map(|c| {
                if rng.next_f64() > 0.5 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect(),
        Some(CaseMode::Capitalize) => letters
            .iter()
            .enumerate()
            .map(|(i, c)| if i == 0 { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect(),
    }
}

fn generate_one<R: RandomSource + ?Sized>(
    options: &GeneratorOptions,
    pools: &CharacterPools,
    rng: &mut R,
) -> ToolResult<String> {
    let length = options.length.map_or(FIXED_LENGTH, |range| range.draw(rng));
    let vowel_count = match options.vowels {
        Some(range) => range.draw(rng),
        None => 1 + random_index(rng, 3),
    }
    .min(length);
    let consonant_count = match options.consonants {
        Some(range) => range.draw(rng).min(length - vowel_count),
        None => length - vowel_count,
    };

    let mut letters = Vec::with_capacity(length);
    for _ in 0..vowel_count {
        letters.push(pick_from(&pools.vowels, "vowels", rng)?);
    }
    for _ in 0..consonant_count {
        letters.push(pick_from(&pools.consonants, "consonants", rng)?);
    }

    let all: Vec<char> = pools.vowels.iter().chain(&pools.consonants).copied().collect();
    for _ in letters.len()..length {
        letters.push(pick_from(&all, "letters", rng)?);
    }

    let letters = shuffle(&letters, rng);
    Ok(apply_case(&letters, options.case, rng))
}

/// Generates `options.count` combinations
pub fn generate<R: RandomSource + ?Sized>(options: &GeneratorOptions, rng: &mut R) -> ToolResult<Vec<String>> {
    options.validate()?;
    let pools = CharacterPools::build(options);

    let mut results: Vec<String> = Vec::with_capacity(options.count);
    let max_attempts = options.count.saturating_mul(ATTEMPTS_PER_COMBINATION);
    let mut attempts = 0;
    while results.len() < options.count {
        if attempts == max_attempts {
            warn!(
                requested = options.count,
                generated = results.len(),
                "Ran out of unique combinations"
            );
            return Err(ToolError::InvalidInput(format!(
                "Could only generate {} unique combinations of {} requested",
                results.len(),
                options.count
            )));
        }
        attempts += 1;

        let combination = generate_one(options, &pools, rng)?;
        if !options.allow_duplicates && results.contains(&combination) {
            continue;
        }
        results.push(combination);
    }

    debug!(count = results.len(), attempts, "Generated combinations");
    Ok(results)
}

/// One combination per line, as written to `EXPORT_FILE_NAME`
pub fn export_text(combinations: &[String]) -> String {
    combinations.join("\n")
}

// ============================================================================
// Session
// ============================================================================

/// Generation with persisted history
pub struct AlphabetSession {
    history: BoundedHistory<GenerationHistoryItem>,
}

impl AlphabetSession {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: &AlphabetSettings) -> Self {
        Self {
            history: BoundedHistory::new(store, keys::ALPHABET_HISTORY, settings.history_limit),
        }
    }

    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        options: &GeneratorOptions,
        rng: &mut R,
    ) -> ToolResult<Vec<String>> {
        let combinations = generate(options, rng)?;
        self.history.push(GenerationHistoryItem {
            id: generate_id(),
            date: Utc::now(),
            combinations: combinations.clone(),
        })?;
        Ok(combinations)
    }

    pub fn history(&self) -> ToolResult<Vec<GenerationHistoryItem>> {
        self.history.items()
    }

    /// Combinations of an earlier generation
    pub fn load(&self, id: &str) -> ToolResult<Option<Vec<String>>> {
        Ok(self.history.get(id)?.map(|item| item.combinations))
    }

    pub fn clear_history(&self) -> ToolResult<()> {
        self.history.clear()
    }
}

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Clone)]
pub struct AlphabetGeneratorFeature;

impl ToolFeature for AlphabetGeneratorFeature {
    fn id(&self) -> &'static str {
        "alphabet_generator"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            id: self.id().to_string(),
            name: "Alphabet Generator".to_string(),
            description: "Generate custom alphabets and character sets for your projects".to_string(),
            path: "/random-word-generator".to_string(),
            icon: "🔤".to_string(),
        }
    }

    fn storage_keys(&self) -> &'static [&'static str] {
        &[keys::ALPHABET_HISTORY]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seeded_source;
    use crate::core::storage::InMemoryStore;

    fn is_vowel(c: char) -> bool {
        VOWELS.contains(c.to_ascii_lowercase())
    }

    #[test]
    fn test_default_options_generate_unique_combinations() {
        let mut rng = seeded_source(1);
        let combinations = generate(&GeneratorOptions::default(), &mut rng).unwrap();
        assert_eq!(combinations.len(), 5);
        for combination in &combinations {
            assert!((5..=10).contains(&combination.chars().count()), "{}", combination);
            assert!(combination.chars().all(|c| c.is_ascii_alphabetic()));
        }
        let mut unique = combinations.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), combinations.len());
    }

    #[test]
    fn test_vowel_and_consonant_counts() {
        let options = GeneratorOptions {
            length: Some(CountRange::new(6, 6)),
            vowels: Some(CountRange::new(2, 2)),
            consonants: Some(CountRange::new(4, 4)),
            case: Some(CaseMode::Lowercase),
            count: 20,
            allow_duplicates: true,
            ..GeneratorOptions::default()
        };
        let mut rng = seeded_source(2);
        for combination in generate(&options, &mut rng).unwrap() {
            assert_eq!(combination.len(), 6);
            assert_eq!(combination.chars().filter(|c| is_vowel(*c)).count(), 2);
            assert_eq!(combination, combination.to_lowercase());
        }
    }

    #[test]
    fn test_vowels_never_exceed_length() {
        let options = GeneratorOptions {
            length: Some(CountRange::new(2, 2)),
            vowels: Some(CountRange::new(4, 4)),
            count: 3,
            allow_duplicates: true,
            ..GeneratorOptions::default()
        };
        for combination in generate(&options, &mut || 0.3).unwrap() {
            assert_eq!(combination.len(), 2);
        }
    }

    #[test]
    fn test_case_modes() {
        let base = GeneratorOptions {
            length: Some(CountRange::new(8, 8)),
            count: 1,
            ..GeneratorOptions::default()
        };

        let upper = GeneratorOptions { case: Some(CaseMode::Uppercase), ..base.clone() };
        let word = generate(&upper, &mut seeded_source(3)).unwrap().remove(0);
        assert_eq!(word, word.to_uppercase());

        let capitalized = GeneratorOptions { case: Some(CaseMode::Capitalize), ..base.clone() };
        let word = generate(&capitalized, &mut seeded_source(3)).unwrap().remove(0);
        assert!(word.chars().next().unwrap().is_ascii_uppercase());
        assert_eq!(&word[1..], word[1..].to_lowercase());

        let unset = GeneratorOptions { case: None, ..base };
        let word = generate(&unset, &mut seeded_source(3)).unwrap().remove(0);
        assert_eq!(word, word.to_lowercase());
    }

    #[test]
    fn test_exclusions_and_inclusions() {
        let options = GeneratorOptions {
            exclude_chars: Some("AEIOUbcd".to_string()),
            include_chars: Some("E".to_string()),
            case: Some(CaseMode::Lowercase),
            count: 10,
            allow_duplicates: true,
            ..GeneratorOptions::default()
        };
        let pools = CharacterPools::build(&options);
        assert_eq!(pools.vowels, vec!['e']);
        assert!(!pools.consonants.contains(&'b'));

        for combination in generate(&options, &mut seeded_source(4)).unwrap() {
            assert!(combination.chars().all(|c| !"aioubcd".contains(c)), "{}", combination);
        }
    }

    #[test]
    fn test_emptied_pool_is_rejected() {
        let options = GeneratorOptions {
            exclude_chars: Some(VOWELS.to_string()),
            ..GeneratorOptions::default()
        };
        assert!(matches!(generate(&options, &mut || 0.5), Err(ToolError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_options() {
        let zero = GeneratorOptions { count: 0, ..GeneratorOptions::default() };
        assert!(generate(&zero, &mut || 0.5).is_err());

        let reversed = GeneratorOptions {
            length: Some(CountRange::new(9, 3)),
            ..GeneratorOptions::default()
        };
        assert!(generate(&reversed, &mut || 0.5).is_err());
    }

    #[test]
    fn test_oversized_requests_are_rejected() {
        let unbounded_length = GeneratorOptions {
            length: Some(CountRange::new(0, usize::MAX)),
            count: 1,
            ..GeneratorOptions::default()
        };
        assert!(matches!(
            generate(&unbounded_length, &mut || 0.5),
            Err(ToolError::InvalidInput(_))
        ));

        let unbounded_vowels = GeneratorOptions {
            vowels: Some(CountRange::new(1, usize::MAX)),
            ..GeneratorOptions::default()
        };
        assert!(matches!(
            generate(&unbounded_vowels, &mut || 0.5),
            Err(ToolError::InvalidInput(_))
        ));

        let huge_count = GeneratorOptions { count: usize::MAX, ..GeneratorOptions::default() };
        assert!(matches!(generate(&huge_count, &mut || 0.5), Err(ToolError::InvalidInput(_))));

        let too_many = GeneratorOptions { count: MAX_COUNT + 1, ..GeneratorOptions::default() };
        assert!(generate(&too_many, &mut || 0.5).is_err());

        let at_limits = GeneratorOptions {
            length: Some(CountRange::new(MAX_LENGTH, MAX_LENGTH)),
            count: MAX_COUNT,
            allow_duplicates: true,
            ..GeneratorOptions::default()
        };
        let combinations = generate(&at_limits, &mut seeded_source(6)).unwrap();
        assert_eq!(combinations.len(), MAX_COUNT);
        assert!(combinations.iter().all(|c| c.len() == MAX_LENGTH));
    }

    #[test]
    fn test_count_range_draw_saturates() {
        let range = CountRange::new(0, usize::MAX);
        assert_eq!(range.draw(&mut || 0.0), 0);
        let top = CountRange::new(usize::MAX, usize::MAX);
        assert_eq!(top.draw(&mut || 0.9), usize::MAX);
    }

    #[test]
    fn test_duplicate_retries_are_bounded() {
        // A constant source yields the same combination every time
        let options = GeneratorOptions { count: 2, ..GeneratorOptions::default() };
        assert!(matches!(generate(&options, &mut || 0.5), Err(ToolError::InvalidInput(_))));

        let allowed = GeneratorOptions { allow_duplicates: true, ..options };
        let combinations = generate(&allowed, &mut || 0.5).unwrap();
        assert_eq!(combinations[0], combinations[1]);
    }

    #[test]
    fn test_export_text() {
        let combinations = vec!["abc".to_string(), "def".to_string()];
        assert_eq!(export_text(&combinations), "abc\ndef");
    }

    #[test]
    fn test_session_records_history() {
        let session = AlphabetSession::new(
            Arc::new(InMemoryStore::new()),
            &AlphabetSettings { history_limit: 2 },
        );
        let mut rng = seeded_source(5);
        for _ in 0..3 {
            session.generate(&GeneratorOptions::default(), &mut rng).unwrap();
        }
        let history = session.history().unwrap();
        assert_eq!(history.len(), 2);

        let loaded = session.load(&history[0].id).unwrap().unwrap();
        assert_eq!(loaded, history[0].combinations);

        session.clear_history().unwrap();
        assert!(session.history().unwrap().is_empty());
    }
}
