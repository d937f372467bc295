//! Project descriptor rewriting for the staged layout.
//!
//! The analyzer scans whole directories, so the staged descriptor copy must
//! point its source-directory declaration at the staging directory. The
//! descriptor grammar is only partially known here: recognized declarations
//! are treated structurally, everything else passes through untouched.

/// The source-directory declaration the staged layout needs: every source
/// sits flat in the staging directory itself.
const SOURCE_DIRS_DECL: &str = r#"   for Source_Dirs use ("./**");"#;

/// Analyzer target declaration for native descriptors.
const ANALYZER_TARGET_DECL: &str = r#"   for Target use "codepeer";"#;

/// Rewrite descriptor `contents` for an analyzer run against the staging
/// directory.
///
/// Replaces the first `for Source_Dirs use` declaration, or inserts one
/// right after the `project` header when absent. When the first line
/// mentions a native/linux profile, an analyzer target declaration is
/// inserted before the closing `end`. Descriptors with none of the
/// recognized constructs come back otherwise unchanged.
pub fn rewrite_for_analysis(contents: &str) -> String {
    let mut lines: Vec<String> = contents.split('\n').map(String::from).collect();

    let mut source_dirs_replaced = false;
    for line in lines.iter_mut() {
        if line.trim_start().starts_with("for Source_Dirs use") {
            *line = SOURCE_DIRS_DECL.to_string();
            source_dirs_replaced = true;
            break;
        }
    }
    if !source_dirs_replaced {
        if let Some(header) = lines
            .iter()
            .position(|line| line.trim_start().starts_with("project "))
        {
            lines.insert(header + 1, SOURCE_DIRS_DECL.to_string());
        }
    }

    if first_line_mentions_native(&lines) {
        if let Some(end) = lines
            .iter()
            .rposition(|line| line.trim_start().starts_with("end "))
        {
            lines.insert(end, ANALYZER_TARGET_DECL.to_string());
        }
    }

    lines.join("\n")
}

fn first_line_mentions_native(lines: &[String]) -> bool {
    lines.first().is_some_and(|line| {
        let lower = line.to_lowercase();
        lower.contains("linux") || lower.contains("native")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_existing_source_dirs() {
        let input = "project Linux_Analyze is\n   for Source_Dirs use (\"src\");\nend Linux_Analyze;\n";
        let output = rewrite_for_analysis(input);
        assert!(output.contains(r#"for Source_Dirs use ("./**");"#));
        assert!(!output.contains(r#"use ("src")"#));
    }

    #[test]
    fn test_inserts_source_dirs_after_project_header() {
        let input = "project Bare is\nend Bare;\n";
        let output = rewrite_for_analysis(input);
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines[0], "project Bare is");
        assert_eq!(lines[1], SOURCE_DIRS_DECL);
    }

    #[test]
    fn test_native_descriptor_gets_analyzer_target() {
        let input = "-- Linux native profile\nproject Linux is\nend Linux;\n";
        let output = rewrite_for_analysis(input);
        assert!(output.contains(r#"for Target use "codepeer";"#));
        let end_pos = output.find("end Linux;").unwrap();
        let target_pos = output.find("for Target").unwrap();
        assert!(target_pos < end_pos);
    }

    #[test]
    fn test_embedded_descriptor_gets_no_analyzer_target() {
        let input = "-- Cortex-M bareboard profile\nproject Flight is\nend Flight;\n";
        let output = rewrite_for_analysis(input);
        assert!(!output.contains("for Target"));
    }

    #[test]
    fn test_unrecognized_shape_passes_through() {
        let input = "with \"shared\";\nlibrary Thing;\n";
        assert_eq!(rewrite_for_analysis(input), input);
    }
}
