mod common;

use common::sample_grid;
use race_analytics::bucket_index::{bucket_of, surname, EMPTY_BUCKET};
use race_analytics::{BucketIndex, CoreError, CoreResult, RaceRecord};

#[test]
fn equal_length_names_share_a_bucket() -> CoreResult<()> {
    let records = vec![
        RaceRecord::new(1, "Max", 0.0, 1, 1),
        RaceRecord::new(2, "Leo", 0.0, 2, 1),
    ];
    let index = BucketIndex::build(&records, 10)?;
    assert_eq!(index.bucket_count(), 10);
    assert_eq!(index.bucket(3), Some(&["Max".to_string(), "Leo".to_string()][..]));
    for i in (0..10).filter(|&i| i != 3) {
        assert_eq!(index.bucket(i).map(<[String]>::len), Some(0));
        assert_eq!(index.render_bucket(i).as_deref(), Some(EMPTY_BUCKET));
    }
    Ok(())
}

#[test]
fn buckets_hold_surnames_in_input_order() -> CoreResult<()> {
    let records = sample_grid();
    let index = BucketIndex::build(&records, 10)?;
    // "Lewis Hamilton" and "Max Verstappen" are both 14 characters long.
    assert_eq!(
        index.bucket(4),
        Some(&["Hamilton".to_string(), "Verstappen".to_string()][..])
    );
    assert_eq!(index.render_bucket(4).as_deref(), Some("Hamilton\nVerstappen"));
    let total: usize = index.iter().map(|(_, bucket)| bucket.len()).sum();
    assert_eq!(total, records.len());
    Ok(())
}

#[test]
fn every_bucket_is_rendered() -> CoreResult<()> {
    let index = BucketIndex::build(&[], 4)?;
    assert_eq!(
        index.to_string(),
        "Bucket 0: Empty\nBucket 1: Empty\nBucket 2: Empty\nBucket 3: Empty"
    );
    assert_eq!(index.render_bucket(4), None);
    Ok(())
}

#[test]
fn zero_buckets_are_rejected() {
    assert!(matches!(
        BucketIndex::build(&sample_grid(), 0),
        Err(CoreError::InvalidInput(_))
    ));
    assert!(matches!(bucket_of("Max", 0), Err(CoreError::InvalidInput(_))));
}

#[test]
fn hash_counts_characters() -> CoreResult<()> {
    assert_eq!(bucket_of("Kimi Räikkönen", 10)?, 4);
    assert_eq!(bucket_of("", 7)?, 0);
    assert_eq!(surname("Kimi Räikkönen"), "Räikkönen");
    assert_eq!(surname("Zhou"), "Zhou");
    Ok(())
}
