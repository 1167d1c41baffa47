use std::path::PathBuf;

/// Summary of a completed pack.
#[derive(Clone, Debug, Default)]
pub struct PackReport {
    /// Number of files written to the archive.
    pub entry_count: usize,
    /// Uncompressed bytes read from the archived files.
    pub total_bytes: u64,
    /// Archive-relative paths, in write order.
    pub entries: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_is_empty() {
        let report = PackReport::default();
        assert_eq!(report.entry_count, 0);
        assert_eq!(report.total_bytes, 0);
        assert!(report.entries.is_empty());
    }
}
