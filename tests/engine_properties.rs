//! Behavioural properties of the conversion and decision engines,
//! exercised through the public crate surface.

use jvst_tools::core::features::decision::{pick_excluding_previous, wheel_slices};
use jvst_tools::core::features::unit_converter::{builtin_registry, CategoryKind, UnitScale};
use jvst_tools::core::random::{seeded_source, SequenceSource};
use jvst_tools::shared::types::DecisionOption;
use jvst_tools::{
    convert_unit, list_categories, list_units, pick_weighted, search_units, shuffle, unique_sample, ToolError,
};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64, context: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}

fn option(id: &str, weight: f64) -> DecisionOption {
    DecisionOption::with_id(id, id.to_uppercase(), weight)
}

// ============================================================================
// Unit conversion
// ============================================================================

#[test]
fn round_trip_holds_for_every_unit_pair() {
    for category in list_categories() {
        let id = category.id.as_str();
        for a in &category.units {
            for b in &category.units {
                let forward = match convert_unit(id, b.id, a.id, 12.5) {
                    Ok(value) => value,
                    Err(ToolError::IncompatibleUnits { .. }) => continue,
                    Err(e) => panic!("{}: {} -> {} failed: {}", id, b.id, a.id, e),
                };
                let back = convert_unit(id, a.id, b.id, forward).unwrap();
                assert_close(back, 12.5, &format!("{} {} <-> {}", id, a.id, b.id));
            }
        }
    }
}

#[test]
fn identity_is_exact_in_every_category() {
    let value = 0.1 + 0.2;
    for category in list_categories() {
        for unit in &category.units {
            assert_eq!(convert_unit(category.id.as_str(), unit.id, unit.id, value).unwrap(), value);
        }
    }
}

#[test]
fn linear_conversions_follow_factor_ratio() {
    for category in list_categories().iter().filter(|c| c.kind == CategoryKind::Linear) {
        for a in &category.units {
            for b in &category.units {
                let (UnitScale::Linear(fa), UnitScale::Linear(fb)) = (a.scale, b.scale) else {
                    panic!("non-linear unit {} in linear category", a.id);
                };
                if a.id == b.id {
                    continue;
                }
                let result = convert_unit(category.id.as_str(), a.id, b.id, 1.0).unwrap();
                assert_eq!(result, fa / fb, "{} {} -> {}", category.id, a.id, b.id);
            }
        }
    }
}

#[test]
fn temperature_fixed_points() {
    assert_eq!(convert_unit("temperature", "C", "F", 0.0).unwrap(), 32.0);
    assert_eq!(convert_unit("temperature", "C", "F", 100.0).unwrap(), 212.0);
    assert_eq!(convert_unit("temperature", "C", "K", 0.0).unwrap(), 273.15);
}

#[test]
fn unknown_identifiers_are_reported() {
    assert_eq!(
        convert_unit("length", "xx", "m", 1.0),
        Err(ToolError::UnknownUnit {
            category: "length".to_string(),
            unit: "xx".to_string()
        })
    );
    assert_eq!(
        convert_unit("nosuch", "m", "m", 1.0),
        Err(ToolError::UnknownCategory {
            category: "nosuch".to_string()
        })
    );
    assert!(matches!(list_units("nosuch"), Err(ToolError::UnknownCategory { .. })));
}

#[test]
fn non_finite_values_are_rejected_after_lookup() {
    assert!(matches!(
        convert_unit("length", "m", "km", f64::NAN),
        Err(ToolError::InvalidValue { .. })
    ));
    // Unit lookup comes first
    assert!(matches!(
        convert_unit("length", "xx", "km", f64::INFINITY),
        Err(ToolError::UnknownUnit { .. })
    ));
}

#[test]
fn search_requires_two_characters() {
    assert_eq!(search_units("m").count(), 0);
    assert_eq!(search_units("").count(), 0);
    assert!(search_units("met").any(|(unit, _)| unit.id == "m" && unit.name == "Meter"));

    let search = search_units("meter");
    let first_pass: Vec<&str> = search.clone().map(|(unit, _)| unit.id).collect();
    assert!(first_pass.contains(&"m"));
    let second_pass: Vec<&str> = search.map(|(unit, _)| unit.id).collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn builtin_catalog_is_shared() {
    assert_eq!(builtin_registry().categories().len(), list_categories().len());
    assert!(!list_units("length").unwrap().is_empty());
}

// ============================================================================
// Decisions
// ============================================================================

#[test]
fn weighted_pick_converges_to_weight_share() {
    let options = vec![option("a", 1.0), option("b", 3.0)];
    let draws = 10_000;
    let mut rng = SequenceSource::uniform_grid(draws);

    let second = (0..draws)
        .filter(|_| pick_weighted(&options, &mut rng).unwrap().index == 1)
        .count();
    let share = second as f64 / draws as f64;
    assert!((share - 0.75).abs() < 0.01, "share was {}", share);
}

#[test]
fn weighted_pick_boundary_selects_first_option() {
    let options = vec![option("a", 1.0), option("b", 1.0)];
    let draw = pick_weighted(&options, &mut || 0.5).unwrap();
    assert_eq!(draw.selected.id, "a");
    assert_eq!(draw.cumulative_weight, 1.0);
}

#[test]
fn weighted_pick_falls_back_to_last_option() {
    let options = vec![option("a", 1.0), option("b", 1.0), option("c", 1.0)];
    assert_eq!(pick_weighted(&options, &mut || 1.5).unwrap().selected.id, "c");
}

#[test]
fn empty_and_invalid_weights_are_rejected() {
    assert_eq!(pick_weighted(&[], &mut || 0.5), Err(ToolError::EmptyOptionSet));
    assert!(matches!(
        pick_weighted(&[option("a", f64::NAN)], &mut || 0.5),
        Err(ToolError::InvalidWeight { .. })
    ));
    assert!(wheel_slices(&[option("a", -1.0)]).is_err());
    assert!(pick_excluding_previous(&[], Some("A"), &mut || 0.5).is_err());
}

#[test]
fn shuffle_preserves_the_multiset() {
    let items = vec!["x", "y", "y", "z", "w"];
    let mut rng = seeded_source(99);
    for _ in 0..20 {
        let mut shuffled = shuffle(&items, &mut rng);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort_unstable();
        let mut expected = items.clone();
        expected.sort_unstable();
        assert_eq!(shuffled, expected);
    }
}

#[test]
fn unique_sample_rejects_small_ranges() {
    assert_eq!(
        unique_sample(1, 3, 4, &mut || 0.5),
        Err(ToolError::RangeTooSmall { min: 1, max: 3, count: 4 })
    );
    let sample = unique_sample(3, 1, 3, &mut seeded_source(5)).unwrap();
    assert_eq!(sample, vec![1, 2, 3]);
}
