//! Prints the results of the search, sort and tree routines on small inputs.
//!
//! Usage:
//!   cargo run --example classics_demo

use clap::Parser;
use digraphs::{
    searching::{binary_search_by_key, linear_search_by_key},
    sorting::{insertion_sort, library_sort_by_key},
    tracing_support::init_tracing,
    tree::{BinarySearchTree, BinaryTree, TreeNode},
};

/// Run the search, sort and tree demonstrations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City to look up in the airport table
    #[arg(long, default_value = "New York")]
    city: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Debug)]
struct Airport {
    city: &'static str,
    country: &'static str,
    code: &'static str,
}

const fn airport(city: &'static str, country: &'static str, code: &'static str) -> Airport {
    Airport {
        city,
        country,
        code,
    }
}

/// Sorted by city.
const AIRPORTS: [Airport; 7] = [
    airport("Colombo", "Sri Lanka", "CLM"),
    airport("Lagos", "Nigeria", "LOS"),
    airport("Los Angeles", "America", "LA"),
    airport("Montreal", "Canada", "YMX"),
    airport("New Delhi", "India", "NDE"),
    airport("New York", "America", "NY"),
    airport("Sydney", "Australia", "SYD"),
];

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    search_airports(&args.city);
    println!();
    sort_values();
    println!();
    walk_trees();
}

fn search_airports(city: &str) {
    let code = |index: Option<usize>| index.map(|i| AIRPORTS[i].code);
    let linear = linear_search_by_key(&AIRPORTS, city, |a| a.city);
    let binary = binary_search_by_key(&AIRPORTS, city, |a| a.city);
    println!("Linear search for {city}: {:?}", code(linear));
    println!("Binary search for {city}: {:?}", code(binary));
}

fn sort_values() {
    let mut vals = [7, 23, 16, 50, 49, 2, 71, 18];
    println!("Before insertion sort: {vals:?}");
    insertion_sort(&mut vals);
    println!("After insertion sort: {vals:?}");

    let mut by_country = AIRPORTS.to_vec();
    library_sort_by_key(&mut by_country, |a| a.country);
    let countries: Vec<_> = by_country.iter().map(|a| a.country).collect();
    println!("Airports sorted by country: {countries:?}");
}

fn walk_trees() {
    let tree = BinaryTree::new(
        TreeNode::new("A")
            .with_left(
                TreeNode::new("B")
                    .with_left(TreeNode::new("D"))
                    .with_right(TreeNode::new("E")),
            )
            .with_right(
                TreeNode::new("C")
                    .with_left(TreeNode::new("F"))
                    .with_right(TreeNode::new("G")),
            ),
    );
    println!("Pre order traversal: {:?}", tree.pre_order());
    println!("Post order traversal: {:?}", tree.post_order());
    println!("In order traversal: {:?}", tree.in_order());
    println!("Level order traversal: {:?}", tree.level_order());
    println!();

    let mut bst: BinarySearchTree<_> = ["E", "B", "A", "C", "M", "L", "Q"].into_iter().collect();
    for letter in ["E", "B", "A", "C", "M", "L", "Q", "H", "Z"] {
        println!("Does the tree contain {letter}? {}", bst.contains(&letter));
    }
    for letter in ["E", "X", "S", "A", "B"] {
        println!("Added {letter} to the tree? {}", bst.insert(letter));
    }
    println!("Tree contents in order: {:?}", bst.in_order());
}
