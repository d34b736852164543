use std::fs;
use minilang_core::parse;

pub fn ast(path: &str, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read program '{}': {}", path, e))?;
    let ast = parse(&source).map_err(|e| format!("{}: {}", path, e))?;

    let json = if compact {
        serde_json::to_string(&ast)?
    } else {
        serde_json::to_string_pretty(&ast)?
    };
    println!("{}", json);

    Ok(())
}
