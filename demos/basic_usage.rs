use race_analytics::{
    AnalyticsConfig, AnalyticsSession, CoreResult, EntryMode, RaceRecord, RecordField,
    RecordStore, SortStrategy,
};

fn main() -> CoreResult<()> {
    let store = RecordStore::from_records(vec![
        RaceRecord::new(1, "Lewis Hamilton", 25.0, 2, 58),
        RaceRecord::new(4, "Fernando Alonso", 12.0, 7, 58),
        RaceRecord::new(830, "Max Verstappen", 26.0, 1, 58),
        RaceRecord::new(846, "Lando Norris", 18.0, 3, 58),
        RaceRecord::new(857, "Oscar Piastri", 15.0, 4, 57),
    ]);
    let mut session = AnalyticsSession::new(store, AnalyticsConfig::default())?;

    let report = session.sort_sample(RecordField::Points, SortStrategy::Partition);
    println!("Sorted by points in {:.4} ms:", report.elapsed_ms());
    for record in &report.records {
        println!("  {:<18} {}", record.name, record.points);
    }

    let found = session.search("ham")?;
    println!("\nSearch 'ham': {}", found.name);

    println!("\nBuckets:\n{}", session.bucket_view()?);

    println!("\nRanking:");
    for record in session.ranking() {
        println!("  {:<18} {}", record.name, record.points);
    }

    println!("\nTotal points: {}", session.total_points());
    println!("5! = {}", session.factorial(5)?);

    session.add_entry("Yuki Tsunoda", "1:31.204", EntryMode::Stack)?;
    session.add_entry("Alex Albon", "1:31.877", EntryMode::Stack)?;
    println!("\nLedger:\n{}", session.ledger().render());
    println!("Pulled: {}", session.pull_entry()?.name);

    println!("\nActivity:");
    for message in session.recent_activity() {
        println!("  - {}", message);
    }
    Ok(())
}
