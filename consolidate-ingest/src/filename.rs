//! Filename date heuristic.
//!
//! Statement exports are often named like `Chase1234_Activity_20260206.CSV`.
//! When every input carries such a date, processing them in filename order
//! gives a deterministic, roughly chronological merge.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static EMBEDDED_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{8}").expect("valid regex"));

/// First run of 8 digits in the file name (directories are ignored).
pub fn embedded_date(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    EMBEDDED_DATE.find(name).map(|m| m.as_str())
}

/// Sort inputs by file name when all of them embed a date; otherwise keep order.
pub fn order_by_filename_date(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    if paths.iter().all(|p| embedded_date(p).is_some()) {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_date_found_in_name() {
        let p = Path::new("exports/Chase1234_Activity_20260206.CSV");
        assert_eq!(embedded_date(p), Some("20260206"));
    }

    #[test]
    fn test_directory_digits_do_not_count() {
        assert_eq!(embedded_date(Path::new("20260206/activity.csv")), None);
        assert_eq!(embedded_date(Path::new("acct_1234567.csv")), None);
    }

    #[test]
    fn test_reorders_when_every_name_has_a_date() {
        let paths = vec![
            PathBuf::from("b/stmt_20260206.csv"),
            PathBuf::from("a/stmt_20251231.csv"),
            PathBuf::from("stmt_20260115.csv"),
        ];
        let got = order_by_filename_date(paths);
        assert_eq!(
            got,
            vec![
                PathBuf::from("a/stmt_20251231.csv"),
                PathBuf::from("stmt_20260115.csv"),
                PathBuf::from("b/stmt_20260206.csv"),
            ]
        );
    }

    #[test]
    fn test_keeps_order_when_any_name_lacks_a_date() {
        let paths = vec![
            PathBuf::from("stmt_20260206.csv"),
            PathBuf::from("manual.csv"),
            PathBuf::from("stmt_20251231.csv"),
        ];
        assert_eq!(order_by_filename_date(paths.clone()), paths);
    }
}
