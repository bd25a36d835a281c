use clap::{ArgAction, Parser, Subcommand};
use learn_rust_dsviz::DEFAULT_TREE_SEED;
use learn_rust_dsviz::binary_tree::Tree;
use learn_rust_dsviz::linked_list::LinkedList;
use learn_rust_dsviz::logging;
use learn_rust_dsviz::ops::{self, OpResult, Structure, Value};
use learn_rust_dsviz::render::{render_list, render_tree};
use learn_rust_dsviz::tree::TreeOps;
use std::process;

#[derive(Parser)]
#[command(name = "dsviz")]
#[command(about = "Shows how a binary search tree or a linked list reacts to operations")]
struct Args {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Binary search tree. Operations: insert:V remove:V search:V
    Tree {
        /// Values inserted one by one before the operations run
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = DEFAULT_TREE_SEED)]
        seed: Vec<Value>,

        ops: Vec<String>,
    },
    /// Singly linked list. Operations: push-front:V push-back:V after:T:V delete:V search:V
    List {
        /// Values appended one by one before the operations run
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        seed: Vec<Value>,

        ops: Vec<String>,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> OpResult<()> {
    match command {
        Command::Tree { seed, ops } => {
            let ops = ops::parse_script(&ops, Structure::Tree)?;
            let mut tree = Tree::from_values(seed);
            let outcomes = ops::apply_to_tree(&mut tree, &ops)?;
            for (op, outcome) in ops.iter().zip(outcomes) {
                println!("{op}: {outcome}");
            }
            print_tree(&tree);
        }
        Command::List { seed, ops } => {
            let ops = ops::parse_script(&ops, Structure::List)?;
            let mut list: LinkedList<Value> = seed.into_iter().collect();
            let outcomes = ops::apply_to_list(&mut list, &ops)?;
            for (op, outcome) in ops.iter().zip(outcomes) {
                println!("{op}: {outcome}");
            }
            println!("{}", render_list(&list));
            println!("array: {:?}", list.to_vec());
            println!("length: {}", list.len());
        }
    }
    Ok(())
}

fn print_tree(tree: &Tree<Value>) {
    println!("{}", render_tree(tree.root()).trim_end());
    println!("in-order:   {:?}", tree.in_order());
    println!("pre-order:  {:?}", tree.pre_order());
    println!("post-order: {:?}", tree.post_order());
    println!(
        "nodes: {}  height: {}  width: {}",
        tree.len(),
        tree.height(),
        tree.width()
    );
}
