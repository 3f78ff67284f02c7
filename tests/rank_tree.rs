mod common;

use common::{sample_grid, scrambled};
use race_analytics::{RaceRecord, RankTree, RecordField};

#[test]
fn in_order_is_ascending_with_ties_in_insertion_order() {
    let mut tree = RankTree::new();
    tree.insert(RaceRecord::new(1, "Ten", 10.0, 1, 1));
    tree.insert(RaceRecord::new(2, "First Five", 5.0, 2, 1));
    tree.insert(RaceRecord::new(3, "Twenty", 20.0, 3, 1));
    tree.insert(RaceRecord::new(4, "Second Five", 5.0, 4, 1));

    let points: Vec<f64> = tree.iter().map(|r| r.points).collect();
    assert_eq!(points, vec![5.0, 5.0, 10.0, 20.0]);
    let ids: Vec<u32> = tree.in_order().iter().map(|r| r.driver_id).collect();
    assert_eq!(ids, vec![2, 4, 1, 3]);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.depth(), 3);
}

#[test]
fn signed_zeros_tie_in_insertion_order() {
    let mut tree = RankTree::new();
    tree.insert(RaceRecord::new(1, "A", 0.0, 1, 1));
    tree.insert(RaceRecord::new(2, "B", -0.0, 2, 1));
    tree.insert(RaceRecord::new(3, "C", 0.0, 3, 1));
    let ids: Vec<u32> = tree.iter().map(|r| r.driver_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn descending_is_the_reversed_walk() {
    let tree = RankTree::from_records(&sample_grid());
    let mut expected = tree.in_order();
    expected.reverse();
    assert_eq!(tree.descending(), expected);
    assert_eq!(tree.descending()[0].name, "Max Verstappen");
}

#[test]
fn walk_matches_a_stable_sort() {
    let records = scrambled(60, 9);
    let tree = RankTree::from_records(&records);
    let mut expected = records.clone();
    expected.sort_by(|a, b| a.points.total_cmp(&b.points));
    assert_eq!(tree.in_order(), expected);
}

#[test]
fn alternate_keys_use_the_same_rule() {
    let mut tree = RankTree::keyed_by(RecordField::Grid);
    for record in sample_grid() {
        tree.insert(record);
    }
    assert_eq!(tree.key(), RecordField::Grid);
    let grid: Vec<u32> = tree.iter().map(|r| r.grid).collect();
    assert_eq!(grid, vec![1, 2, 3, 4, 5, 7]);
}

#[test]
fn skewed_trees_are_accepted() {
    let mut tree = RankTree::new();
    for i in 0..5_000u32 {
        tree.insert(RaceRecord::new(i, format!("Driver {}", i), f64::from(i), 1, 1));
    }
    assert_eq!(tree.depth(), 5_000);
    assert_eq!(tree.iter().count(), 5_000);
    assert_eq!(tree.descending()[0].driver_id, 4_999);
}

#[test]
fn empty_and_cleared_trees() {
    let mut tree = RankTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), 0);
    assert!(tree.in_order().is_empty());

    tree.insert(RaceRecord::new(1, "Solo", 1.0, 1, 1));
    assert!(!tree.is_empty());
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.key(), RecordField::Points);
}
