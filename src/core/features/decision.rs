//! Random decision maker feature
//!
//! Weighted picks, shuffles and sampling over caller-owned option lists.
//! Every draw takes an injected `RandomSource`; the functions here never
//! touch global randomness and never mutate their input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::str::FromStr;
use tracing::debug;

use super::ToolFeature;
use crate::core::random::{random_index, RandomSource};
use crate::core::storage::keys;
use crate::shared::error::{ToolError, ToolResult};
use crate::shared::types::{CoinFlip, DecisionOption, DiceRoll, ToolDescriptor, WeightedDraw, WheelSlice};

mod session;

pub use session::{export_file_name, DecisionSession};

/// Fewest options a decision list may hold
pub const MIN_OPTIONS: usize = 2;

// ============================================================================
// Weighted selection
// ============================================================================

fn check_weights(options: &[DecisionOption]) -> ToolResult<f64> {
    if options.is_empty() {
        return Err(ToolError::EmptyOptionSet);
    }
    for option in options {
        if !option.weight.is_finite() || option.weight <= 0.0 {
            return Err(ToolError::InvalidWeight {
                option_id: option.id.clone(),
                weight: option.weight,
            });
        }
    }
    Ok(options.iter().map(|option| option.weight).sum())
}

/// Walks `candidates` (indices into `options`) accumulating weight and
/// selects the first whose cumulative weight reaches `r`
fn walk_cumulative(options: &[DecisionOption], candidates: &[usize], r: f64) -> WeightedDraw {
    let mut cumulative = 0.0;
    for &index in candidates {
        cumulative += options[index].weight;
        if r <= cumulative {
            return WeightedDraw {
                selected: options[index].clone(),
                index,
                cumulative_weight: cumulative,
            };
        }
    }

    // Rounding (or a source value outside [0, 1)) left nothing selected
    let index = candidates[candidates.len() - 1];
    WeightedDraw {
        selected: options[index].clone(),
        index,
        cumulative_weight: cumulative,
    }
}

/// Picks one option with probability proportional to its weight
pub fn pick_weighted<R: RandomSource + ?Sized>(
    options: &[DecisionOption],
    rng: &mut R,
) -> ToolResult<WeightedDraw> {
    let total = check_weights(options)?;
    let r = rng.next_f64() * total;
    let candidates: Vec<usize> = (0..options.len()).collect();

    let draw = walk_cumulative(options, &candidates, r);
    debug!(index = draw.index, label = %draw.selected.label, "Weighted pick");
    Ok(draw)
}

/// Weighted pick that skips options labelled like the previous result.
/// Falls back to every option when that would leave none.
pub fn pick_excluding_previous<R: RandomSource + ?Sized>(
    options: &[DecisionOption],
    previous_label: Option<&str>,
    rng: &mut R,
) -> ToolResult<WeightedDraw> {
    check_weights(options)?;

    let mut candidates: Vec<usize> = (0..options.len())
        .filter(|&i| Some(options[i].label.as_str()) != previous_label)
        .collect();
    if candidates.is_empty() {
        candidates = (0..options.len()).collect();
    }

    let total: f64 = candidates.iter().map(|&i| options[i].weight).sum();
    let r = rng.next_f64() * total;

    let draw = walk_cumulative(options, &candidates, r);
    debug!(
        index = draw.index,
        excluded = options.len() - candidates.len(),
        "Weighted pick excluding previous result"
    );
    Ok(draw)
}

// ============================================================================
// Shuffling and sampling
// ============================================================================

/// Fisher-Yates shuffle of a copy of `items`
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = random_index(rng, i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Up-front allocation cap for `unique_sample`; larger samples grow on demand
const MAX_SAMPLE_RESERVATION: usize = 1024;

fn normalize_range(min: i64, max: i64) -> (i64, i64) {
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}

/// `count` distinct integers from `[min, max]`, sorted ascending.
///
/// Draws from a virtually shrinking pool: only displaced slots are stored,
/// so memory is proportional to `count` rather than the range width.
pub fn unique_sample<R: RandomSource + ?Sized>(
    min: i64,
    max: i64,
    count: usize,
    rng: &mut R,
) -> ToolResult<Vec<i64>> {
    let (low, high) = normalize_range(min, max);
    let range = high as i128 - low as i128 + 1;
    if count as i128 > range {
        return Err(ToolError::RangeTooSmall {
            min: low,
            max: high,
            count,
        });
    }

    let reserved = count.min(MAX_SAMPLE_RESERVATION);
    let mut displaced: HashMap<i128, i128> = HashMap::with_capacity(reserved);
    let mut sample = Vec::with_capacity(reserved);
    for i in 0..count as i128 {
        let remaining = range - i;
        let offset = ((rng.next_f64() * remaining as f64).floor() as i128).clamp(0, remaining - 1);
        let j = i + offset;

        let picked = displaced.get(&j).copied().unwrap_or(j);
        let replacement = displaced.get(&i).copied().unwrap_or(i);
        displaced.insert(j, replacement);

        sample.push((low as i128 + picked) as i64);
    }

    sample.sort_unstable();
    Ok(sample)
}

fn require_count(count: usize, what: &str) -> ToolResult<()> {
    if count == 0 {
        return Err(ToolError::InvalidInput(format!("Number of {} must be at least 1", what)));
    }
    Ok(())
}

/// `count` integers from `[min, max]`, repetition allowed
pub fn random_numbers<R: RandomSource + ?Sized>(
    min: i64,
    max: i64,
    count: usize,
    rng: &mut R,
) -> ToolResult<Vec<i64>> {
    require_count(count, "numbers")?;
    let (low, high) = normalize_range(min, max);
    let range = high as i128 - low as i128 + 1;

    let mut numbers = Vec::with_capacity(count.min(MAX_SAMPLE_RESERVATION));
    for _ in 0..count {
        let offset = ((rng.next_f64() * range as f64).floor() as i128).clamp(0, range - 1);
        numbers.push((low as i128 + offset) as i64);
    }
    Ok(numbers)
}

// ============================================================================
// Dice, coins and cards
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DiceKind {
    pub const ALL: [DiceKind; 7] = [
        DiceKind::D4,
        DiceKind::D6,
        DiceKind::D8,
        DiceKind::D10,
        DiceKind::D12,
        DiceKind::D20,
        DiceKind::D100,
    ];

    pub fn sides(self) -> u32 {
        match self {
            DiceKind::D4 => 4,
            DiceKind::D6 => 6,
            DiceKind::D8 => 8,
            DiceKind::D10 => 10,
            DiceKind::D12 => 12,
            DiceKind::D20 => 20,
            DiceKind::D100 => 100,
        }
    }

    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.sides() == sides)
    }
}

impl FromStr for DiceKind {
    type Err = ToolError;

    /// Accepts "d6" style names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(['d', 'D'])
            .and_then(|sides| sides.parse().ok())
            .and_then(Self::from_sides)
            .ok_or_else(|| ToolError::InvalidInput(format!("Unsupported dice type: {}", s)))
    }
}

pub fn roll_dice<R: RandomSource + ?Sized>(kind: DiceKind, count: usize, rng: &mut R) -> ToolResult<DiceRoll> {
    require_count(count, "dice")?;
    let sides = kind.sides();
    let values: Vec<u32> = (0..count)
        .map(|_| random_index(rng, sides as usize) as u32 + 1)
        .collect();
    let total = values.iter().sum();
    Ok(DiceRoll { sides, values, total })
}

impl DiceRoll {
    /// "3, 5 (Total: 8)"
    pub fn summary(&self) -> String {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        format!("{} (Total: {})", values.join(", "), self.total)
    }
}

/// Flips `count` coins; a draw below 0.5 lands on heads
pub fn flip_coins<R: RandomSource + ?Sized>(
    count: usize,
    heads_label: &str,
    tails_label: &str,
    rng: &mut R,
) -> ToolResult<CoinFlip> {
    require_count(count, "coins")?;
    let mut heads = 0;
    let results = (0..count)
        .map(|_| {
            if rng.next_f64() < 0.5 {
                heads += 1;
                heads_label.to_string()
            } else {
                tails_label.to_string()
            }
        })
        .collect();
    Ok(CoinFlip {
        results,
        heads,
        tails: count - heads,
    })
}

impl CoinFlip {
    /// "Heads, Tails (Heads: 1, Tails: 1)"; a single coin shows only its side
    pub fn summary(&self, heads_label: &str, tails_label: &str) -> String {
        let joined = self.results.join(", ");
        if self.results.len() > 1 {
            format!(
                "{} ({}: {}, {}: {})",
                joined, heads_label, self.heads, tails_label, self.tails
            )
        } else {
            joined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    /// 52 playing cards
    Standard,
    /// The 22 major arcana
    Tarot,
}

const SUITS: [&str; 4] = ["♠️", "♥️", "♦️", "♣️"];
const CARD_VALUES: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

impl DeckKind {
    /// Unshuffled deck
    pub fn cards(self) -> Vec<String> {
        match self {
            DeckKind::Standard => SUITS
                .iter()
                .flat_map(|suit| CARD_VALUES.iter().map(move |value| format!("{}{}", value, suit)))
                .collect(),
            DeckKind::Tarot => MAJOR_ARCANA.iter().map(|card| card.to_string()).collect(),
        }
    }
}

/// Shuffles the deck and deals `min(count, deck size)` cards
pub fn draw_cards<R: RandomSource + ?Sized>(deck: DeckKind, count: usize, rng: &mut R) -> ToolResult<Vec<String>> {
    require_count(count, "cards")?;
    let mut shuffled = shuffle(&deck.cards(), rng);
    shuffled.truncate(count);
    Ok(shuffled)
}

// ============================================================================
// Wheel
// ============================================================================

/// Slices proportional to weight, laid out clockwise from angle 0
pub fn wheel_slices(options: &[DecisionOption]) -> ToolResult<Vec<WheelSlice>> {
    let total = check_weights(options)?;
    let mut start_angle = 0.0;
    Ok(options
        .iter()
        .map(|option| {
            let sweep_angle = option.weight / total * TAU;
            let slice = WheelSlice {
                option_id: option.id.clone(),
                start_angle,
                sweep_angle,
            };
            start_angle += sweep_angle;
            slice
        })
        .collect())
}

/// Option under `angle` (radians, any winding)
pub fn option_at_angle(options: &[DecisionOption], angle: f64) -> ToolResult<(usize, &DecisionOption)> {
    if !angle.is_finite() {
        return Err(ToolError::InvalidValue { value: angle });
    }
    let slices = wheel_slices(options)?;
    let normalized = angle.rem_euclid(TAU);

    let index = slices
        .iter()
        .position(|slice| normalized >= slice.start_angle && normalized < slice.start_angle + slice.sweep_angle)
        .unwrap_or(options.len() - 1);
    Ok((index, &options[index]))
}

// ============================================================================
// Option list editing
// ============================================================================

/// Two equally weighted options, "Option 1" and "Option 2"
pub fn default_options() -> Vec<DecisionOption> {
    (1..=MIN_OPTIONS)
        .map(|n| DecisionOption::new(format!("Option {}", n), 1.0))
        .collect()
}

/// Appends "Option N" with weight 1
pub fn add_option(options: &mut Vec<DecisionOption>) -> &DecisionOption {
    let label = format!("Option {}", options.len() + 1);
    options.push(DecisionOption::new(label, 1.0));
    &options[options.len() - 1]
}

/// Removes an option, keeping at least `MIN_OPTIONS`
pub fn remove_option(options: &mut Vec<DecisionOption>, id: &str) -> ToolResult<()> {
    if options.len() <= MIN_OPTIONS {
        return Err(ToolError::InvalidInput(format!(
            "At least {} options are required",
            MIN_OPTIONS
        )));
    }
    options.retain(|option| option.id != id);
    Ok(())
}

pub fn equalize_weights(options: &mut [DecisionOption]) {
    for option in options {
        option.weight = 1.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Swaps the option at `index` with its neighbour. Returns false at the edges.
pub fn move_option(options: &mut [DecisionOption], index: usize, direction: MoveDirection) -> bool {
    let target = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < options.len() => index + 1,
        _ => return false,
    };
    options.swap(index, target);
    true
}

// ============================================================================
// Feature Implementation
// ============================================================================

#[derive(Clone)]
pub struct DecisionMakerFeature;

impl ToolFeature for DecisionMakerFeature {
    fn id(&self) -> &'static str {
        "decision_maker"
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            id: self.id().to_string(),
            name: "Random Decision Maker".to_string(),
            description: "Let algorithms make random choices when you're stuck deciding".to_string(),
            path: "/random-decision-maker".to_string(),
            icon: "🎲".to_string(),
        }
    }

    fn storage_keys(&self) -> &'static [&'static str] {
        &[keys::DECISION_HISTORY, keys::DECISION_SETS, keys::DECISION_SETTINGS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::{seeded_source, SequenceSource};
    use std::collections::HashSet;

    fn options(weights: &[f64]) -> Vec<DecisionOption> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| DecisionOption::with_id(format!("o{}", i), format!("Option {}", i + 1), w))
            .collect()
    }

    #[test]
    fn test_pick_walks_cumulative_weights() {
        let opts = options(&[1.0, 3.0]);
        // total 4: r = 0.2 * 4 = 0.8 <= 1
        assert_eq!(pick_weighted(&opts, &mut || 0.2).unwrap().index, 0);
        // r = 0.5 * 4 = 2 > 1, <= 4
        let draw = pick_weighted(&opts, &mut || 0.5).unwrap();
        assert_eq!(draw.index, 1);
        assert_eq!(draw.cumulative_weight, 4.0);
    }

    #[test]
    fn test_pick_boundary_goes_to_first() {
        let opts = options(&[1.0, 1.0]);
        assert_eq!(pick_weighted(&opts, &mut || 0.5).unwrap().index, 0);
    }

    #[test]
    fn test_pick_falls_back_to_last() {
        let opts = options(&[1.0, 2.0, 3.0]);
        assert_eq!(pick_weighted(&opts, &mut || 1.5).unwrap().index, 2);
        assert_eq!(pick_weighted(&opts, &mut || f64::NAN).unwrap().index, 2);
    }

    #[test]
    fn test_pick_rejects_bad_input() {
        assert_eq!(pick_weighted(&[], &mut || 0.5), Err(ToolError::EmptyOptionSet));

        let mut opts = options(&[1.0, 0.0]);
        assert_eq!(
            pick_weighted(&opts, &mut || 0.5),
            Err(ToolError::InvalidWeight {
                option_id: "o1".to_string(),
                weight: 0.0
            })
        );
        opts[1].weight = f64::INFINITY;
        assert!(pick_weighted(&opts, &mut || 0.5).is_err());
        opts[1].weight = -2.0;
        assert!(pick_weighted(&opts, &mut || 0.5).is_err());
    }

    #[test]
    fn test_pick_excluding_previous() {
        let opts = options(&[1.0, 1.0, 2.0]);
        // Without "Option 1": candidates o1 (1) and o2 (2), total 3
        let draw = pick_excluding_previous(&opts, Some("Option 1"), &mut || 0.0).unwrap();
        assert_eq!(draw.index, 1);
        let draw = pick_excluding_previous(&opts, Some("Option 1"), &mut || 0.9).unwrap();
        assert_eq!(draw.index, 2);

        // Every option excluded: use all of them
        let single = options(&[1.0]);
        let draw = pick_excluding_previous(&single, Some("Option 1"), &mut || 0.3).unwrap();
        assert_eq!(draw.index, 0);

        let draw = pick_excluding_previous(&opts, None, &mut || 0.0).unwrap();
        assert_eq!(draw.index, 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let items: Vec<u32> = (0..20).collect();
        let mut rng = seeded_source(7);
        let shuffled = shuffle(&items, &mut rng);

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_with_zero_source_rotates() {
        // j is always 0: each step swaps the tail element to the front
        let shuffled = shuffle(&[1, 2, 3], &mut || 0.0);
        assert_eq!(shuffled, vec![2, 3, 1]);
        assert!(shuffle::<u8, _>(&[], &mut || 0.0).is_empty());
    }

    #[test]
    fn test_unique_sample() {
        let mut rng = seeded_source(11);
        let sample = unique_sample(1, 10, 10, &mut rng).unwrap();
        assert_eq!(sample, (1..=10).collect::<Vec<_>>());

        let sample = unique_sample(50, -50, 30, &mut rng).unwrap();
        assert_eq!(sample.len(), 30);
        assert_eq!(sample.iter().collect::<HashSet<_>>().len(), 30);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert!(sample.iter().all(|v| (-50..=50).contains(v)));

        assert!(unique_sample(0, 0, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_unique_sample_range_too_small() {
        assert_eq!(
            unique_sample(1, 3, 4, &mut || 0.5),
            Err(ToolError::RangeTooSmall { min: 1, max: 3, count: 4 })
        );
    }

    #[test]
    fn test_unique_sample_grows_past_reservation() {
        let count = MAX_SAMPLE_RESERVATION * 4;
        let sample = unique_sample(i64::MIN, i64::MAX, count, &mut seeded_source(13)).unwrap();
        assert_eq!(sample.len(), count);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));

        let dense = unique_sample(1, count as i64, count, &mut seeded_source(14)).unwrap();
        assert_eq!(dense, (1..=count as i64).collect::<Vec<_>>());
    }

    #[test]
    fn test_unique_sample_full_i64_range() {
        let sample = unique_sample(i64::MIN, i64::MAX, 3, &mut SequenceSource::new(vec![0.0, 0.999999, 0.5]))
            .unwrap();
        assert_eq!(sample.len(), 3);
        assert_eq!(sample[0], i64::MIN);
    }

    #[test]
    fn test_random_numbers() {
        let numbers = random_numbers(10, 1, 4, &mut SequenceSource::new(vec![0.0, 0.999, 0.5, 1.0])).unwrap();
        assert_eq!(numbers, vec![1, 10, 6, 10]);
        assert!(random_numbers(1, 10, 0, &mut || 0.5).is_err());
        let many = random_numbers(0, 9, MAX_SAMPLE_RESERVATION * 2, &mut seeded_source(15)).unwrap();
        assert_eq!(many.len(), MAX_SAMPLE_RESERVATION * 2);
    }

    #[test]
    fn test_roll_dice() {
        let roll = roll_dice(DiceKind::D6, 3, &mut SequenceSource::new(vec![0.0, 0.5, 0.99])).unwrap();
        assert_eq!(roll.values, vec![1, 4, 6]);
        assert_eq!(roll.total, 11);
        assert_eq!(roll.summary(), "1, 4, 6 (Total: 11)");
        assert!(roll_dice(DiceKind::D20, 0, &mut || 0.5).is_err());
    }

    #[test]
    fn test_dice_kind_parsing() {
        assert_eq!("d20".parse::<DiceKind>().unwrap(), DiceKind::D20);
        assert_eq!("D100".parse::<DiceKind>().unwrap(), DiceKind::D100);
        assert!("d7".parse::<DiceKind>().is_err());
        assert!("six".parse::<DiceKind>().is_err());
    }

    #[test]
    fn test_flip_coins() {
        let flip = flip_coins(3, "Heads", "Tails", &mut SequenceSource::new(vec![0.1, 0.5, 0.49])).unwrap();
        assert_eq!(flip.results, vec!["Heads", "Tails", "Heads"]);
        assert_eq!((flip.heads, flip.tails), (2, 1));
        assert_eq!(flip.summary("Heads", "Tails"), "Heads, Tails, Heads (Heads: 2, Tails: 1)");

        let single = flip_coins(1, "Yes", "No", &mut || 0.9).unwrap();
        assert_eq!(single.summary("Yes", "No"), "No");
    }

    #[test]
    fn test_draw_cards() {
        assert_eq!(DeckKind::Standard.cards().len(), 52);
        assert_eq!(DeckKind::Tarot.cards().len(), 22);
        assert_eq!(DeckKind::Standard.cards()[0], "A♠️");

        let mut rng = seeded_source(3);
        let hand = draw_cards(DeckKind::Tarot, 30, &mut rng).unwrap();
        assert_eq!(hand.len(), 22);
        assert_eq!(hand.iter().collect::<HashSet<_>>().len(), 22);
    }

    #[test]
    fn test_wheel_slices_and_angle_lookup() {
        let opts = options(&[1.0, 3.0]);
        let slices = wheel_slices(&opts).unwrap();
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].sweep_angle - TAU / 4.0).abs() < 1e-12);
        assert!((slices[1].start_angle - TAU / 4.0).abs() < 1e-12);

        assert_eq!(option_at_angle(&opts, 0.1).unwrap().0, 0);
        assert_eq!(option_at_angle(&opts, 2.0).unwrap().0, 1);
        assert_eq!(option_at_angle(&opts, TAU + 0.1).unwrap().0, 0);
        assert_eq!(option_at_angle(&opts, -0.1).unwrap().0, 1);
        assert!(option_at_angle(&opts, f64::NAN).is_err());
    }

    #[test]
    fn test_option_editing() {
        let mut opts = default_options();
        assert_eq!(opts.len(), 2);
        let first_id = opts[0].id.clone();
        assert!(remove_option(&mut opts, &first_id).is_err());

        let added = add_option(&mut opts).clone();
        assert_eq!(added.label, "Option 3");

        assert!(move_option(&mut opts, 2, MoveDirection::Up));
        assert_eq!(opts[1].label, "Option 3");
        assert!(!move_option(&mut opts, 0, MoveDirection::Up));
        assert!(!move_option(&mut opts, 2, MoveDirection::Down));

        opts[0].weight = 5.0;
        equalize_weights(&mut opts);
        assert!(opts.iter().all(|o| o.weight == 1.0));

        remove_option(&mut opts, &added.id).unwrap();
        assert_eq!(opts.len(), 2);
    }
}
