mod common;

use common::{ids, sample_grid, scrambled};
use race_analytics::sorter::{exchange_sort, partition_sort};
use race_analytics::{sort, sort_timed, RaceRecord, RecordField, SortStrategy};

const STRATEGIES: [SortStrategy; 2] = [SortStrategy::Partition, SortStrategy::Exchange];

fn is_non_increasing(records: &[RaceRecord], field: RecordField) -> bool {
    records
        .windows(2)
        .all(|pair| field.value(&pair[0]) >= field.value(&pair[1]))
}

#[test]
fn both_strategies_sort_descending_without_losing_records() {
    for seed in 1..6 {
        let input = scrambled(40, seed);
        for field in RecordField::ALL {
            for strategy in STRATEGIES {
                let sorted = sort(&input, field, strategy);
                assert_eq!(ids(&sorted), ids(&input), "{strategy} by {field}");
                assert!(is_non_increasing(&sorted, field), "{strategy} by {field}");
            }
        }
    }
}

#[test]
fn strategies_agree_on_distinct_keys() {
    let input = sample_grid();
    for field in RecordField::ALL {
        let quick = partition_sort(&input, field);
        let bubble = exchange_sort(&input, field);
        assert_eq!(quick, bubble, "by {field}");
    }
    let names: Vec<_> = partition_sort(&input, RecordField::Points)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Max Verstappen",
            "Lewis Hamilton",
            "Lando Norris",
            "Oscar Piastri",
            "Fernando Alonso",
            "Charles Leclerc",
        ]
    );
}

#[test]
fn sorting_sorted_output_is_a_no_op() {
    let input = scrambled(30, 42);
    for field in RecordField::ALL {
        for strategy in STRATEGIES {
            let once = sort(&input, field, strategy);
            let twice = sort(&once, field, strategy);
            assert_eq!(once, twice, "{strategy} by {field}");
        }
    }
}

#[test]
fn exchange_keeps_equal_keys_in_input_order() {
    let input = vec![
        RaceRecord::new(1, "A", 5.0, 1, 10),
        RaceRecord::new(2, "B", 8.0, 2, 10),
        RaceRecord::new(3, "C", 5.0, 3, 10),
        RaceRecord::new(4, "D", 5.0, 4, 10),
    ];
    let sorted = exchange_sort(&input, RecordField::Points);
    let order: Vec<u32> = sorted.iter().map(|r| r.driver_id).collect();
    assert_eq!(order, vec![2, 1, 3, 4]);
}

#[test]
fn signed_zeros_are_equal_keys() {
    let input = vec![
        RaceRecord::new(1, "A", -0.0, 1, 10),
        RaceRecord::new(2, "B", 0.0, 2, 10),
        RaceRecord::new(3, "C", -0.0, 3, 10),
    ];
    for strategy in STRATEGIES {
        let order: Vec<u32> = sort(&input, RecordField::Points, strategy)
            .iter()
            .map(|r| r.driver_id)
            .collect();
        assert_eq!(order, vec![1, 2, 3], "{strategy}");
    }
}

#[test]
fn input_is_left_untouched() {
    let input = sample_grid();
    let before = input.clone();
    for strategy in STRATEGIES {
        let _ = sort(&input, RecordField::Laps, strategy);
    }
    assert_eq!(input, before);
}

#[test]
fn trivial_inputs() {
    for strategy in STRATEGIES {
        assert!(sort(&[], RecordField::Points, strategy).is_empty());
        let single = vec![RaceRecord::new(7, "Solo", 1.0, 1, 1)];
        assert_eq!(sort(&single, RecordField::Grid, strategy), single);
    }
}

#[test]
fn nan_points_are_kept() {
    let input = vec![
        RaceRecord::new(1, "A", 3.0, 1, 1),
        RaceRecord::new(2, "B", f64::NAN, 2, 1),
        RaceRecord::new(3, "C", 7.0, 3, 1),
    ];
    for strategy in STRATEGIES {
        assert_eq!(sort(&input, RecordField::Points, strategy).len(), 3);
    }
}

#[test]
fn timed_sort_reports_what_it_sorted() {
    let input = sample_grid();
    let report = sort_timed(&input, RecordField::Grid, SortStrategy::Exchange);
    assert_eq!(report.strategy, SortStrategy::Exchange);
    assert_eq!(report.field, RecordField::Grid);
    assert_eq!(report.records.first().map(|r| r.grid), Some(7));
    assert!(report.elapsed_ms() >= 0.0);
}

#[test]
fn strategy_and_field_names_parse() {
    assert_eq!("quick".parse::<SortStrategy>(), Ok(SortStrategy::Partition));
    assert_eq!("Bubble".parse::<SortStrategy>(), Ok(SortStrategy::Exchange));
    assert!("heap".parse::<SortStrategy>().is_err());
    assert_eq!("LAPS".parse::<RecordField>(), Ok(RecordField::Laps));
    assert!("speed".parse::<RecordField>().is_err());
}
