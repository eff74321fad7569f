use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::{
    draw_cards, flip_coins, pick_excluding_previous, random_numbers, roll_dice, shuffle, unique_sample, DeckKind,
    DiceKind, MIN_OPTIONS,
};
use crate::core::history::{BoundedHistory, SavedList};
use crate::core::random::RandomSource;
use crate::core::storage::{keys, load_json, save_json, KeyValueStore};
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::settings::DecisionSettings;
use crate::shared::types::{
    generate_id, DecisionHistoryItem, DecisionMethod, DecisionOption, DecisionSet, WeightedDraw,
};

/// Decision tools with persisted history, saved option sets and settings
pub struct DecisionSession {
    store: Arc<dyn KeyValueStore>,
    settings: DecisionSettings,
    history: BoundedHistory<DecisionHistoryItem>,
    sets: SavedList<DecisionSet>,
}

impl DecisionSession {
    /// Settings saved by an earlier session win over `defaults`
    pub fn new(store: Arc<dyn KeyValueStore>, defaults: &DecisionSettings) -> ToolResult<Self> {
        let settings = load_json::<DecisionSettings>(store.as_ref(), keys::DECISION_SETTINGS)?
            .unwrap_or_else(|| defaults.clone());

        Ok(Self {
            history: BoundedHistory::new(store.clone(), keys::DECISION_HISTORY, settings.max_history_items),
            sets: SavedList::new(store.clone(), keys::DECISION_SETS),
            store,
            settings,
        })
    }

    pub fn settings(&self) -> &DecisionSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: DecisionSettings) -> ToolResult<()> {
        save_json(self.store.as_ref(), keys::DECISION_SETTINGS, &settings)?;
        self.history = BoundedHistory::new(self.store.clone(), keys::DECISION_HISTORY, settings.max_history_items);
        self.settings = settings;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------------

    pub fn record(
        &self,
        method: DecisionMethod,
        options: &[DecisionOption],
        result: String,
        result_option: Option<DecisionOption>,
    ) -> ToolResult<DecisionHistoryItem> {
        let item = DecisionHistoryItem {
            id: generate_id(),
            date: Utc::now(),
            method,
            options: options.to_vec(),
            result,
            result_option,
        };
        self.history.push(item.clone())?;
        Ok(item)
    }

    pub fn history(&self) -> ToolResult<Vec<DecisionHistoryItem>> {
        self.history.items()
    }

    pub fn clear_history(&self) -> ToolResult<()> {
        self.history.clear()
    }

    /// Label of the most recent picked option, if any
    pub fn previous_result(&self) -> ToolResult<Option<String>> {
        Ok(self
            .history
            .items()?
            .into_iter()
            .next()
            .and_then(|item| item.result_option)
            .map(|option| option.label))
    }

    // ------------------------------------------------------------------------
    // Recorded decisions
    // ------------------------------------------------------------------------

    /// Weighted pick for the wheel or the quick pick, honoring
    /// `exclude_previous_results`
    pub fn pick<R: RandomSource + ?Sized>(
        &self,
        method: DecisionMethod,
        options: &[DecisionOption],
        rng: &mut R,
    ) -> ToolResult<WeightedDraw> {
        let previous = if self.settings.exclude_previous_results {
            self.previous_result()?
        } else {
            None
        };

        let draw = pick_excluding_previous(options, previous.as_deref(), rng)?;
        self.record(method, options, draw.selected.label.clone(), Some(draw.selected.clone()))?;
        Ok(draw)
    }

    pub fn shuffle<R: RandomSource + ?Sized>(
        &self,
        options: &[DecisionOption],
        rng: &mut R,
    ) -> ToolResult<Vec<DecisionOption>> {
        if options.is_empty() {
            return Err(ToolError::EmptyOptionSet);
        }
        let shuffled = shuffle(options, rng);
        let labels: Vec<&str> = shuffled.iter().map(|option| option.label.as_str()).collect();
        self.record(DecisionMethod::Shuffle, options, labels.join(", "), None)?;
        Ok(shuffled)
    }

    pub fn roll_dice<R: RandomSource + ?Sized>(&self, kind: DiceKind, count: usize, rng: &mut R) -> ToolResult<String> {
        let roll = roll_dice(kind, count, rng)?;
        let summary = roll.summary();
        self.record_outcome(DecisionMethod::Dice, summary.clone())?;
        Ok(summary)
    }

    pub fn flip_coins<R: RandomSource + ?Sized>(
        &self,
        count: usize,
        heads_label: &str,
        tails_label: &str,
        rng: &mut R,
    ) -> ToolResult<String> {
        let flip = flip_coins(count, heads_label, tails_label, rng)?;
        let summary = flip.summary(heads_label, tails_label);
        self.record_outcome(DecisionMethod::Coin, summary.clone())?;
        Ok(summary)
    }

    pub fn draw_cards<R: RandomSource + ?Sized>(
        &self,
        deck: DeckKind,
        count: usize,
        rng: &mut R,
    ) -> ToolResult<String> {
        let summary = draw_cards(deck, count, rng)?.join(", ");
        self.record_outcome(DecisionMethod::Cards, summary.clone())?;
        Ok(summary)
    }

    pub fn generate_numbers<R: RandomSource + ?Sized>(
        &self,
        min: i64,
        max: i64,
        count: usize,
        unique: bool,
        rng: &mut R,
    ) -> ToolResult<Vec<i64>> {
        let numbers = if unique {
            unique_sample(min, max, count, rng)?
        } else {
            random_numbers(min, max, count, rng)?
        };
        let text: Vec<String> = numbers.iter().map(i64::to_string).collect();
        self.record_outcome(DecisionMethod::Numbers, text.join(", "))?;
        Ok(numbers)
    }

    /// Modes without an option list store the outcome as a single option
    fn record_outcome(&self, method: DecisionMethod, summary: String) -> ToolResult<DecisionHistoryItem> {
        let option = DecisionOption::new(summary.clone(), 1.0);
        self.record(method, std::slice::from_ref(&option), summary, None)
    }

    // ------------------------------------------------------------------------
    // Saved sets
    // ------------------------------------------------------------------------

    pub fn save_set(&self, name: &str, options: &[DecisionOption], method: DecisionMethod) -> ToolResult<DecisionSet> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ToolError::InvalidInput("Please enter a name for this set".to_string()));
        }
        if options.len() < MIN_OPTIONS {
            return Err(ToolError::InvalidInput(format!(
                "A set needs at least {} options",
                MIN_OPTIONS
            )));
        }

        let set = DecisionSet {
            id: generate_id(),
            name: name.to_string(),
            options: options.to_vec(),
            method,
            date: Utc::now(),
        };
        self.sets.add(set.clone())?;
        Ok(set)
    }

    pub fn sets(&self) -> ToolResult<Vec<DecisionSet>> {
        self.sets.list()
    }

    pub fn delete_set(&self, id: &str) -> ToolResult<bool> {
        self.sets.remove(id)
    }

    pub fn export_sets_json(&self) -> ToolResult<String> {
        Ok(serde_json::to_string_pretty(&self.sets.list()?)?)
    }

    /// Prepends every set in a JSON array export. Returns how many were imported.
    pub fn import_sets(&self, json: &str) -> ToolResult<usize> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_array() {
            warn!("Rejected decision set import that is not a JSON array");
            return Err(ToolError::InvalidInput("Invalid format: expected a list of sets".to_string()));
        }

        let imported: Vec<DecisionSet> = serde_json::from_value(value)?;
        let count = imported.len();
        self.sets.prepend_all(imported)?;
        info!(count, "Imported decision sets");
        Ok(count)
    }
}

/// "random-decision-sets-2024-05-01.json"
pub fn export_file_name(date: NaiveDate) -> String {
    format!("random-decision-sets-{}.json", date.format("%Y-%m-%d"))
}
