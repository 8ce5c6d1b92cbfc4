//! Scratch files for integration tests, removed on drop

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static TEST_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique path under the temp directory (TMPDIR respected)
fn unique_path(test_name: &str, extension: &str) -> PathBuf {
    let counter = TEST_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let filename = format!(
        "gapplot_test_{}_{}_{}.{}",
        test_name,
        std::process::id(),
        counter,
        extension
    );
    env::temp_dir().join(filename)
}

/// Temporary file deleted when dropped
pub struct TempTestFile {
    path: PathBuf,
}

impl TempTestFile {
    pub fn new(test_name: &str, extension: &str) -> Self {
        TempTestFile {
            path: unique_path(test_name, extension),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// CSV with a header row and `rows`, joined with commas
pub fn create_test_csv(test_name: &str, headers: &[&str], rows: &[&[&str]]) -> TempTestFile {
    let mut content = headers.join(",");
    content.push('\n');
    for row in rows {
        content.push_str(&row.join(","));
        content.push('\n');
    }
    write_test_file(test_name, "csv", content.as_bytes())
}

/// Temporary file holding exactly `bytes`
pub fn write_test_file(test_name: &str, extension: &str, bytes: &[u8]) -> TempTestFile {
    let temp_file = TempTestFile::new(test_name, extension);
    fs::write(temp_file.path(), bytes).expect("Failed to write test file");
    temp_file
}
