use std::fs;
use std::io;
use std::path::Path;

/// Reads the URL list: one URL per line, blank lines ignored.
pub fn read_url_list(path: &Path) -> io::Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn skips_blank_lines_and_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://example.com/a").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  https://example.com/b  ").unwrap();
        writeln!(file, "   ").unwrap();

        let urls = read_url_list(file.path()).unwrap();
        assert_eq!(urls, vec!["https://example.com/a", "https://example.com/b"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_url_list(Path::new("/no/such/file.txt")).is_err());
    }
}
