//! Header cleaning for libfg2 C headers
//!
//! Line-by-line comment and whitespace stripping. Lines are judged
//! independently; block comments spanning multiple lines are not tracked.
//! Surviving lines are emitted trimmed, with any trailing `//` comment
//! removed.

use crate::errors::CodegenError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Clean a single physical line
///
/// Returns `None` for lines that are blank after trimming or that start
/// with `//` or `/*`. Otherwise returns the trimmed line truncated at the
/// first `//`.
pub fn strip_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("//") || trimmed.starts_with("/*") {
        return None;
    }

    match trimmed.find("//") {
        Some(idx) => Some(&trimmed[..idx]),
        None => Some(trimmed),
    }
}

/// Strip a header file and write the surviving lines to `out`
///
/// One output line per surviving input line, in original order. A missing
/// or unreadable file propagates as an I/O error; nothing is retried.
pub fn strip_header<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<(), CodegenError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| CodegenError::IoError(format!("Failed to read header {:?}: {}", path, e)))?;

    log::debug!("Stripping header {:?} ({} bytes)", path, contents.len());

    for line in contents.lines() {
        if let Some(cleaned) = strip_line(line) {
            writeln!(out, "{}", cleaned)
                .map_err(|e| CodegenError::IoError(format!("Failed to write output: {}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        assert_eq!(strip_line(""), None);
        assert_eq!(strip_line("   "), None);
        assert_eq!(strip_line("\t"), None);
    }

    #[test]
    fn test_whole_line_comments_are_dropped() {
        assert_eq!(strip_line("// comment"), None);
        assert_eq!(strip_line("   // indented comment"), None);
        assert_eq!(strip_line("/* block start"), None);
        assert_eq!(strip_line("/** doxygen */"), None);
    }

    #[test]
    fn test_trailing_comment_is_truncated() {
        assert_eq!(strip_line("int x = 5; // comment"), Some("int x = 5; "));
    }

    #[test]
    fn test_code_lines_pass_through_trimmed() {
        assert_eq!(strip_line("int fg_open(const char *dev);"), Some("int fg_open(const char *dev);"));
        assert_eq!(strip_line("  #define FG_CONTROL_OK 0  "), Some("#define FG_CONTROL_OK 0"));
    }

    #[test]
    fn test_output_never_contains_comment_marker() {
        let lines = [
            "int a; // x",
            "int b;",
            "#include <stdio.h> // io",
            "   float c; // y // z",
        ];
        for line in lines {
            if let Some(cleaned) = strip_line(line) {
                assert!(!cleaned.contains("//"), "{:?} leaked a comment", line);
            }
        }
    }

    #[test]
    fn test_strip_is_idempotent_on_clean_output() {
        let input = "  int x = 1; // set x\nint y = 2;\n";
        let first: Vec<&str> = input.lines().filter_map(strip_line).collect();
        for line in &first {
            // A surviving line may keep trailing spaces from comment removal;
            // re-stripping trims those but must not drop the line or change
            // its code content.
            let again = strip_line(line).unwrap();
            assert_eq!(again, line.trim());
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut out = Vec::new();
        let result = strip_header("no/such/header.h", &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
