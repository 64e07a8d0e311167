use glob::Pattern;
use std::path::Path;

/// Checks a file against an optional extension allow-list. `None` admits
/// everything.
pub fn has_valid_extension(path: &Path, extensions: &Option<Vec<String>>) -> bool {
    let Some(exts) = extensions else { return true };
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Checks a path against user-supplied glob ignore patterns.
pub fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }
    let normalized = path.to_string_lossy().replace('\\', "/");
    ignore_patterns
        .iter()
        .filter_map(|pattern| Pattern::new(pattern).ok())
        .any(|pattern| pattern.matches(&normalized))
}

/// Determines whether the walk should hand a file to the extractor.
pub fn should_include_file(
    path: &Path,
    extensions: &Option<Vec<String>>,
    ignore_patterns: &[String],
) -> bool {
    has_valid_extension(path, extensions) && !should_ignore(path, ignore_patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_valid_extension() {
        let extensions = Some(vec!["txt".to_string(), "csv".to_string()]);
        assert!(has_valid_extension(Path::new("notes.txt"), &extensions));
        assert!(has_valid_extension(Path::new("NOTES.TXT"), &extensions));
        assert!(has_valid_extension(Path::new("data.csv"), &extensions));
        assert!(!has_valid_extension(Path::new("report.pdf"), &extensions));
        assert!(!has_valid_extension(Path::new("no_extension"), &extensions));

        assert!(has_valid_extension(Path::new("anything.bin"), &None));
    }

    #[test]
    fn test_should_ignore() {
        let patterns = vec!["**/*.tmp".to_string(), "**/build/**".to_string()];

        assert!(should_ignore(Path::new("work/scratch.tmp"), &patterns));
        assert!(should_ignore(Path::new("a/build/out.txt"), &patterns));
        assert!(!should_ignore(Path::new("work/scratch.txt"), &patterns));
        assert!(!should_ignore(Path::new("builder/out.txt"), &patterns));
    }

    #[test]
    fn test_bad_glob_pattern_is_not_a_match() {
        let patterns = vec!["[invalid".to_string()];
        assert!(!should_ignore(Path::new("anything.txt"), &patterns));
    }

    #[test]
    fn test_should_include_file() {
        let extensions = Some(vec!["txt".to_string()]);
        let patterns = vec!["**/*.tmp".to_string()];

        assert!(should_include_file(
            Path::new("docs/readme.txt"),
            &extensions,
            &patterns
        ));
        assert!(!should_include_file(
            Path::new("docs/readme.md"),
            &extensions,
            &patterns
        ));
        assert!(!should_include_file(
            Path::new("docs/readme.tmp"),
            &None,
            &patterns
        ));
    }
}
