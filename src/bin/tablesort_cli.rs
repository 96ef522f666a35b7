//! CLI tool for tablesort - sorts tab-separated listing rows
//!
//! Applies the same comparison rules as the browser sorter to a TSV
//! listing (one row per line, one cell per tab-separated field). Rows
//! whose first cell starts with '.' count as hidden entries.
//!
//! Usage:
//!   tablesort_cli <column> [input.tsv]   # Sort by 0-based column
//!   tablesort_cli <column> --desc        # Descending
//!   tablesort_cli <column> --all         # Include hidden entries
//!   tablesort_cli <column> --json        # Output rows as JSON

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::env;
    use std::fs;
    use std::io::Read;
    use tablesort::sorter::{ModelCell, ModelRow, TableSorter};

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tablesort_cli <column> [input.tsv] [--desc] [--all] [--json]");
        std::process::exit(1);
    }

    let column: usize = match args[1].parse() {
        Ok(c) => c,
        Err(_) => {
            eprintln!(
                "Error: column must be a non-negative integer, got {}",
                args[1]
            );
            std::process::exit(1);
        }
    };

    let mut input_path: Option<String> = None;
    let mut descending = false;
    let mut show_all = false;
    let mut json = false;
    for arg in &args[2..] {
        match arg.as_str() {
            "--desc" => descending = true,
            "--all" => show_all = true,
            "--json" => json = true,
            other => {
                if input_path.is_some() {
                    eprintln!("Error: more than one input file given");
                    std::process::exit(1);
                }
                input_path = Some(other.to_string());
            }
        }
    }

    // Read input
    let text = match &input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            }
            buffer
        }
    };

    // One model row per line; dotfile rows count as hidden entries.
    let rows: Vec<ModelRow> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let cells: Vec<ModelCell> = line.split('\t').map(ModelCell::text).collect();
            let hidden = cells.first().is_some_and(|c| c.text.starts_with('.'));
            ModelRow { cells, hidden }
        })
        .collect();

    // Attach sorts column 0 ascending; further clicks select the
    // requested column and direction.
    let mut sorter = TableSorter::new_test(rows.clone(), true);
    sorter.set_show_hidden(show_all);
    if column != 0 {
        sorter.order_by(column);
    }
    if descending {
        sorter.order_by(column);
    }

    let output: Vec<Vec<String>> = sorter
        .visible_rows()
        .into_iter()
        .map(|i| rows[i].cells.iter().map(|c| c.text.clone()).collect())
        .collect();

    if json {
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for row in output {
            println!("{}", row.join("\t"));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
