use std::fs;

use reckon::calculator::Calculator;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate_as_expected() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, expression, expected) in extract_cases(&content) {
            count += 1;
            let shown = Calculator::new().evaluate(expression).to_string();
            assert_eq!(shown, expected,
                       "{path:?}:{line_no}: `{expression}` gave {shown}, expected {expected}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(usize, &str, &str)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("line {} has no '=>': {line}", i + 1));
               (i + 1, expression.trim(), expected.trim())
           })
           .collect()
}
