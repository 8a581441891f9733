//! Loadout evaluation tests

use std::io;
use std::sync::{Arc, Mutex};

use engine_loadout_core::loadout::{
    evaluate, evaluate_loadout, Capabilities, Component, ComponentSlot, EngineItemType,
};
use engine_loadout_core::stats::{tier_value, Stat, StatProfile};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn slot(stat: Stat) -> ComponentSlot {
    ComponentSlot::empty(Capabilities::only(stat))
}

/// One slot per stat, all empty
fn minimal_bay() -> Vec<ComponentSlot> {
    Stat::ALL.iter().map(|stat| slot(*stat)).collect()
}

#[test]
fn test_empty_slot_counts_as_baseline_and_component_above_it() {
    let baseline = StatProfile::new(0.3, 0.3, 0.3);
    let mut slots = vec![
        slot(Stat::Acceleration),
        slot(Stat::Acceleration).with_occupant(Component::new(1, 2)),
    ];
    slots.push(slot(Stat::TopSpeed));
    slots.push(slot(Stat::FuelEconomy));

    let result = evaluate(&baseline, &slots);
    // (max(0, 0.3) + max(2 * 0.6, 0.3)) / 2
    assert_close(result.acceleration_boost_percent, 0.75);
    assert_close(result.top_speed_boost_percent, 0.3);
    assert_close(result.fuel_economy_boost_percent, 0.3);
    assert!(result.is_usable);
}

#[test]
fn test_weak_component_does_not_lower_baseline() {
    let baseline = StatProfile::new(2.0, 2.0, 2.0);
    let slots = vec![
        slot(Stat::Acceleration).with_occupant(Component::new(3, 1)),
        slot(Stat::TopSpeed).with_occupant(Component::new(2, 1)),
        slot(Stat::FuelEconomy).with_occupant(Component::new(1, 1)),
    ];

    let result = evaluate(&baseline, &slots);
    assert_close(result.acceleration_boost_percent, 2.0);
    assert_close(result.top_speed_boost_percent, 2.0);
    assert_close(result.fuel_economy_boost_percent, 2.0);
}

#[test]
fn test_broken_component_contributes_nothing() {
    let baseline = StatProfile::new(0.0, 0.3, 0.3);
    let mut slots = minimal_bay();
    slots[0] = slot(Stat::Acceleration).with_occupant(Component::broken(3, 10));

    let result = evaluate(&baseline, &slots);
    assert_close(result.acceleration_boost_percent, 0.0);
    assert!(!result.is_usable);
}

#[test]
fn test_zero_top_speed_makes_engine_unusable() {
    let baseline = StatProfile::new(0.0, 0.0, 0.0);
    let slots = vec![
        slot(Stat::Acceleration).with_occupant(Component::new(3, 1)),
        slot(Stat::TopSpeed),
        slot(Stat::FuelEconomy).with_occupant(Component::new(3, 1)),
    ];

    let result = evaluate(&baseline, &slots);
    assert!(result.acceleration_boost_percent > 0.0);
    assert!(result.fuel_economy_boost_percent > 0.0);
    assert_eq!(result.top_speed_boost_percent, 0.0);
    assert!(!result.is_usable);
}

#[test]
fn test_all_positive_boosts_are_usable() {
    let baseline = StatProfile::new(0.0, 0.0, 0.0);
    let slots: Vec<ComponentSlot> = Stat::ALL
        .iter()
        .map(|stat| slot(*stat).with_occupant(Component::new(1, 1)))
        .collect();

    let result = evaluate(&baseline, &slots);
    assert_close(result.acceleration_boost_percent, 0.6);
    assert!(result.is_usable);
}

#[test]
fn test_capability_without_slots_is_zero_and_unusable() {
    let baseline = StatProfile::new(1.0, 1.0, 1.0);
    let slots = vec![slot(Stat::Acceleration), slot(Stat::TopSpeed)];

    let result = evaluate(&baseline, &slots);
    assert_eq!(result.fuel_economy_boost_percent, 0.0);
    assert!(!result.fuel_economy_boost_percent.is_nan());
    assert!(!result.is_usable);
}

#[test]
fn test_no_slots_at_all() {
    let result = evaluate(&StatProfile::new(1.0, 1.0, 1.0), &[]);
    for stat in Stat::ALL {
        assert_eq!(result.boost(stat), 0.0);
    }
    assert!(!result.is_usable);
}

#[test]
fn test_multi_capability_slot_counts_for_each_stat() {
    let baseline = StatProfile::new(0.3, 0.3, 0.3);
    let slots = vec![
        ComponentSlot::for_item_type(EngineItemType::Piston).with_occupant(Component::new(3, 1)),
        ComponentSlot::for_item_type(EngineItemType::Crankshaft),
        ComponentSlot::for_item_type(EngineItemType::Valve),
    ];

    let result = evaluate(&baseline, &slots);
    // Piston is the only acceleration slot
    assert_close(result.acceleration_boost_percent, 1.0);
    // Piston and crankshaft share top speed
    assert_close(result.top_speed_boost_percent, 0.65);
    assert_close(result.fuel_economy_boost_percent, 0.3);
}

#[test]
fn test_quantity_scales_item_value() {
    let baseline = StatProfile::new(0.0, 0.0, 0.0);
    let mut slots = minimal_bay();
    slots[1] = slot(Stat::TopSpeed).with_occupant(Component::new(2, 3));

    let result = evaluate(&baseline, &slots);
    assert_close(result.top_speed_boost_percent, 2.4);
}

#[test]
fn test_custom_tier_table() {
    let baseline = StatProfile::new(0.0, 0.0, 0.0);
    let slots = vec![slot(Stat::Acceleration).with_occupant(Component::new(5, 1))];

    let doubled = evaluate_loadout(&baseline, &slots, |tier| tier as f32 * 2.0);
    assert_close(doubled.acceleration_boost_percent, 10.0);

    let standard = evaluate_loadout(&baseline, &slots, tier_value);
    assert_close(standard.acceleration_boost_percent, 1.0);
}

#[test]
fn test_standard_tier_table() {
    assert_eq!(tier_value(1), 0.6);
    assert_eq!(tier_value(2), 0.8);
    assert_eq!(tier_value(3), 1.0);
    assert_eq!(tier_value(999), 1.0);
}

#[test]
fn test_evaluation_is_repeatable() {
    let baseline = StatProfile::new(0.3, 0.3, 0.3);
    let slots = vec![
        ComponentSlot::for_item_type(EngineItemType::Carburetor).with_occupant(Component::new(2, 1)),
        ComponentSlot::for_item_type(EngineItemType::SparkPlug).with_occupant(Component::new(1, 1)),
    ];

    assert_eq!(evaluate(&baseline, &slots), evaluate(&baseline, &slots));
}

/// In-memory log sink for a scoped subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_stat_without_slots_is_logged_at_debug() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let baseline = StatProfile::new(1.0, 1.0, 1.0);
    let slots = vec![slot(Stat::Acceleration), slot(Stat::TopSpeed)];
    let result = tracing::subscriber::with_default(subscriber, || evaluate(&baseline, &slots));

    assert!(!result.is_usable);
    let output = logs.contents();
    assert!(output.contains("no slot contributes to stat"), "{output}");
    assert!(output.contains("stat=fuel economy"), "{output}");
    assert!(!output.contains("stat=acceleration"), "{output}");
}
