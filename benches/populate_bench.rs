//! Quick benchmark to verify template population performance

use serde_json::json;
use std::time::Instant;
use stencil::{extract_placeholders, ArgumentSet, Template};

fn main() {
    let args: ArgumentSet = [
        ("name", json!("nightly")),
        ("columns", json!(["age", "income", "zip"])),
        ("opts", json!({"retries": 3, "tags": ["a", "b"]})),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    // Templates of varying complexity, each using exactly the args above
    let bodies = [
        "job: {name}\ncolumns: {columns}\nopts: {opts}",
        "job: { name }\ncolumns: { columns }\nopts: { opts }\njinja: \"{{ keep }}\"",
        "{name} {name} {name} {columns} {columns} {opts} {{a}} {{b}} {{c}} plain text here",
    ];

    println!("Template Population Performance Test");
    println!("====================================\n");

    for body in &bodies {
        let template = Template::new("bench", *body);
        let iterations = 100_000;

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = template.populate(&args);
        }
        let elapsed = start.elapsed();
        let per_op = elapsed / iterations;

        println!("Template: {:60}", format!("{:?}", body));
        println!("  Time for {} iterations: {:?}", iterations, elapsed);
        println!("  Per operation: {:?}\n", per_op);
    }

    // Extraction alone on a large document
    let big: String = (0..1_000)
        .map(|i| format!("key_{i}: {{var_{}}} {{{{ literal }}}}\n", i % 50))
        .collect();
    let iterations = 1_000;

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = extract_placeholders(&big);
    }
    let elapsed = start.elapsed();

    println!("Extraction over {} bytes x {} iterations:", big.len(), iterations);
    println!("  Total: {:?}", elapsed);
    println!("  Per operation: {:?}", elapsed / iterations);
}
