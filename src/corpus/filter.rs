//! File inclusion predicates.

use std::path::Path;

/// Decides whether a file found under a corpus root is a document.
pub trait FileFilter: Send + Sync {
    fn accept(&self, path: &Path) -> bool;
}

impl<F> FileFilter for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn accept(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Accepts every file.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl FileFilter for AcceptAll {
    fn accept(&self, _path: &Path) -> bool {
        true
    }
}

/// Accepts files whose extension is in an allow-list (case-insensitive).
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Extensions may be given with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        ExtensionFilter { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl FileFilter for ExtensionFilter {
    fn accept(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}
