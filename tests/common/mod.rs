#![allow(dead_code)]

use race_analytics::RaceRecord;

/// Small grid with distinct points, laps and grid slots.
pub fn sample_grid() -> Vec<RaceRecord> {
    vec![
        RaceRecord::new(1, "Lewis Hamilton", 25.0, 2, 58),
        RaceRecord::new(4, "Fernando Alonso", 12.0, 7, 56),
        RaceRecord::new(830, "Max Verstappen", 26.0, 1, 59),
        RaceRecord::new(846, "Lando Norris", 18.0, 3, 57),
        RaceRecord::new(857, "Oscar Piastri", 15.5, 4, 55),
        RaceRecord::new(844, "Charles Leclerc", 10.0, 5, 54),
    ]
}

/// Deterministic pseudo-random records with many repeated keys.
pub fn scrambled(len: usize, seed: u64) -> Vec<RaceRecord> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u32
    };
    (0..len)
        .map(|i| {
            let points = f64::from(next() % 12) * 0.5;
            RaceRecord::new(i as u32, format!("Driver {}", i), points, next() % 20, next() % 70)
        })
        .collect()
}

/// Driver ids in ascending order, for multiset comparisons.
pub fn ids(records: &[RaceRecord]) -> Vec<u32> {
    let mut ids: Vec<u32> = records.iter().map(|r| r.driver_id).collect();
    ids.sort_unstable();
    ids
}
