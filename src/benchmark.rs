use clap::Parser;
use learn_rust_dsviz::binary_tree::Tree;
use learn_rust_dsviz::logging;
use learn_rust_dsviz::tree::TreeOps;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A binary search tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    /// Seed for the insertion order shuffle
    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut values: Vec<usize> = (0..args.size).collect();
    values.shuffle(&mut rng);

    println!("Running with {} shuffled values", args.size);

    let mut tree = Tree::new();
    let start = Instant::now();
    for (i, value) in values.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.insert(*value);
        assert!(tree.contains(value));
    }
    let inserted = Instant::now();
    info!(height = tree.height(), width = tree.width(), "tree built");
    for value in values.iter() {
        assert!(tree.contains(value));
    }
    let checked_contains = Instant::now();
    values.shuffle(&mut rng);
    for value in values.iter() {
        assert!(tree.remove(value));
    }
    let end = Instant::now();

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
