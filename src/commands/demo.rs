use log::info;
use minilang_core::{format_number, parse, Interpreter};

pub const FACTORIAL_CODE: &str = "
result = 1;
i = 1;
while (i < fact + 1) {
    result = result * i;
    i = i + 1;
}
print result;
";

pub const LOOP_CODE: &str = "
while (i < len + 1) {
    if (i > len/2) {
        print len - i;
    } else {
        print i;
    }
    i = i + 1;
}
";

pub fn demo() -> Result<(), Box<dyn std::error::Error>> {
    info!("Running bundled demo programs");

    let mut factorial = Interpreter::new();
    factorial.set_var("fact", 5);
    let fact = factorial.get_var("fact").unwrap_or_default();
    println!("Factorial of {}:", format_number(fact));
    factorial.exec(&parse(FACTORIAL_CODE)?);

    println!();
    println!("Loop example:");
    let mut looping = Interpreter::new();
    looping.set_var("len", 20);
    looping.exec(&parse(LOOP_CODE)?);

    Ok(())
}
