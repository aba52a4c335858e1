use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Print to stdout (with a newline) or write the text verbatim to `out`.
pub fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_to_file_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        emit("date,desc\n2024-01-01,x", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "date,desc\n2024-01-01,x");
    }

    #[test]
    fn test_emit_to_missing_dir_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.csv");
        let err = emit("x", Some(&path)).unwrap_err();
        assert!(err.to_string().contains("out.csv"));
    }
}
