//! Build script to generate embedded word lists
//!
//! Reads the bundled dictionary files and generates Rust source code with
//! const arrays, one per source dictionary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate the TWL06 source list
    generate_word_list(
        "data/twl06.txt",
        &Path::new(&out_dir).join("twl06.rs"),
        "TWL06",
        "Bundled TWL06 (tournament word list) dictionary words",
    );

    // Generate the ENABLE source list
    generate_word_list(
        "data/enable.txt",
        &Path::new(&out_dir).join("enable.rs"),
        "ENABLE",
        "Bundled ENABLE dictionary words",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/twl06.txt");
    println!("cargo:rerun-if-changed=data/enable.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
