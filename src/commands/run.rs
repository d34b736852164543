use std::fs;
use log::{debug, info};
use minilang_core::{format_number, parse, Interpreter};

pub fn run(
    path: &str,
    seeds: impl IntoIterator<Item = (String, f64)>,
    dump_vars: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read program '{}': {}", path, e))?;
    let ast = parse(&source).map_err(|e| format!("{}: {}", path, e))?;

    let mut interpreter = Interpreter::new();
    for (name, value) in seeds {
        interpreter.set_var(&name, value);
    }

    info!("Running {}", path);
    interpreter.exec(&ast);
    debug!("Finished {}", path);

    if dump_vars {
        let mut variables: Vec<_> = interpreter.variables().collect();
        variables.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in variables {
            println!("{} = {}", name, format_number(value));
        }
    }

    Ok(())
}

/// Parses a `NAME=VALUE` pair given on the command line.
pub fn parse_var(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", arg));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_value_pairs() {
        assert_eq!(parse_var("fact=5"), Ok(("fact".to_string(), 5.0)));
        assert_eq!(parse_var(" x = -1.5 "), Ok(("x".to_string(), -1.5)));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_var("fact").is_err());
        assert!(parse_var("=5").is_err());
        assert!(parse_var("fact=five").is_err());
    }
}
