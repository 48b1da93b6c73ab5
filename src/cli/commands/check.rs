//! Check command handler: reports red-black rule violations

use rbviz::core::models::load_tree;
use rbviz::core::validate::validate;
use rbviz::{error, info};
use std::path::Path;

/// Validate the tree in `input_file`, exiting with status 1 if it is invalid or unreadable
pub fn run(input_file: &Path) {
    let tree = match load_tree(input_file) {
        Ok(tree) => tree,
        Err(err) => {
            error!("Check failed for {}: {err}", input_file.display());
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    let violations = validate(tree.as_ref());
    if violations.is_empty() {
        info!("{} passed all checks", input_file.display());
        println!("✓ valid red-black tree");
        return;
    }

    println!("✗ {} violation(s) in {}:", violations.len(), input_file.display());
    for violation in &violations {
        println!("  - {violation}");
    }
    std::process::exit(1);
}
