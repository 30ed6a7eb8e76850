use bracket_lint::{report, validate};

fn main() -> std::io::Result<()> {
    // A stray `]` and a comparison operator read as a closer
    let test_code = r#"
def calculate(a, b):
    result = (a + b) * 2
    if result > 10:
        print("Result is {result}")
        return result
    ]
    return 0
"#;

    let diagnostics = validate(test_code);
    report(&diagnostics)?;

    // Looks valid, but `=>` closes the `(` of `map(` with a `>`
    let valid_code = r#"
function process() {
    let data = [1, 2, 3];
    return data.map(x => x * 2);
}
"#;

    println!("\nTesting valid code:");
    let diagnostics = validate(valid_code);
    report(&diagnostics)?;

    Ok(())
}
