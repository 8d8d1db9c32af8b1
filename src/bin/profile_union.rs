use intset::BitSet;
use std::{fs::File, time::Instant};

#[tracing::instrument(skip_all, name = "union_workload")]
fn run_union_workload(target: &mut BitSet, rounds: usize, universe: usize) {
    for round in 0..rounds {
        if round % 100 == 0 {
            tracing::info!("Union round {}/{}", round, rounds);
        }
        let stride = round % 61 + 2;
        let other: BitSet = (round..universe).step_by(stride).collect();
        target.union_with(&other);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing subscriber to write to a file
    let file = File::create("trace.json")?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Warming up...");
    let mut set = {
        let _span = tracing::info_span!("warmup").entered();
        BitSet::from_slice(&[0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144])
    };

    println!("Profiling 1000 unions over a 100k universe...");
    let start = Instant::now();
    run_union_workload(&mut set, 1_000, 100_000);
    println!(
        "Union complete in {:?}: {} members across {} words",
        start.elapsed(),
        set.len(),
        set.words().len()
    );
    Ok(())
}
