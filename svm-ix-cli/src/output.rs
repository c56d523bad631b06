//! Output formatting utilities for the svm-ix CLI

use colored::*;
use serde_json::Value;

/// Format and print output based on the JSON flag
pub fn print_output(data: Value, json_format: bool) {
    if json_format {
        println!(
            "{}",
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_human_readable(&data);
    }
}

/// Print data in human-readable format
fn print_human_readable(data: &Value) {
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                match key.as_str() {
                    "instruction" => print_instruction_info(value),
                    "tree" => print_tree(value),
                    "derived" | "decoded" => print_section(value),
                    _ => println!("{}: {}", key.cyan(), format_value(value)),
                }
            }
        }
        _ => println!("{}", format_value(data)),
    }
}

/// Format a JSON value for human-readable output
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => {
            if *b {
                "yes".green().to_string()
            } else {
                "no".red().to_string()
            }
        }
        Value::Null => "-".dimmed().to_string(),
        other => other.to_string(),
    }
}

fn print_section(value: &Value) {
    if let Value::Object(map) = value {
        let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
        for (key, value) in map {
            println!("{:>width$}: {}", key.cyan(), format_value(value), width = width);
        }
    } else {
        println!("{}", format_value(value));
    }
}

fn print_instruction_info(value: &Value) {
    println!("{}", "Instruction".bold());
    if let Some(program_id) = value.get("program_id") {
        println!("  {}: {}", "program".cyan(), format_value(program_id));
    }
    if let Some(data) = value.get("data") {
        println!("  {}: {}", "data".cyan(), format_value(data));
    }
    if let Some(Value::Array(accounts)) = value.get("accounts") {
        println!("  {} ({}):", "accounts".cyan(), accounts.len());
        for (i, meta) in accounts.iter().enumerate() {
            let address = meta.get("address").map(format_value).unwrap_or_default();
            let writable = meta.get("is_writable").and_then(Value::as_bool) == Some(true);
            let signer = meta.get("is_signer").and_then(Value::as_bool) == Some(true);
            let mut flags = Vec::new();
            if writable {
                flags.push("WRITE".yellow().to_string());
            }
            if signer {
                flags.push("SIGN".magenta().to_string());
            }
            println!("    [{}] {} {}", i, address, flags.join(" "));
        }
    }
}

fn print_tree(value: &Value) {
    if let Value::String(rendered) = value {
        print!("{}", rendered);
    }
}
