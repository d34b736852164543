use std::fs;
use std::path::Path;

use minilang_core::{parse, CapturedOutput, Interpreter};
use walkdir::WalkDir;

#[test]
fn fixture_programs_print_expected_output() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let mut count = 0;

    for entry in WalkDir::new(&fixtures_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "ml"))
    {
        let path = entry.path();
        let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        let ast = parse(&source).unwrap_or_else(|e| panic!("{path:?} failed to parse: {e}"));
        let mut interpreter = Interpreter::with_output(CapturedOutput::new());
        interpreter.exec(&ast);

        let expected: Vec<&str> = expected.lines().collect();
        assert_eq!(interpreter.output().lines(), expected.as_slice(), "output of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No fixtures found in {fixtures_dir:?}");
}
