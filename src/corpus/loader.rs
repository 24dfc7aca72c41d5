//! Recursive corpus traversal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::document::{Document, LabeledDocument};
use super::filter::FileFilter;
use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, TextBayesError};

/// Collect every accepted file under `root` as a document.
///
/// Entries of each directory are visited in file-name order, so the
/// resulting corpus order does not depend on the file system.
pub fn read_corpus(
    root: &Path,
    analyzer: Arc<dyn Analyzer>,
    filter: &dyn FileFilter,
) -> Result<Vec<Document>> {
    if !root.is_dir() {
        return Err(TextBayesError::corpus(format!(
            "Corpus root {} is not a directory",
            root.display()
        )));
    }

    let mut documents = Vec::new();
    collect(root, &analyzer, filter, &mut documents)?;
    debug!("Found {} documents under {}", documents.len(), root.display());
    Ok(documents)
}

fn collect(
    dir: &Path,
    analyzer: &Arc<dyn Analyzer>,
    filter: &dyn FileFilter,
    documents: &mut Vec<Document>,
) -> Result<()> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| TextBayesError::corpus(format!("Cannot list {}: {e}", dir.display())))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<_>>()?;
    children.sort();

    for child in children {
        if child.is_dir() {
            collect(&child, analyzer, filter, documents)?;
        } else if filter.accept(&child) {
            documents.push(Document::new(child, Arc::clone(analyzer)));
        }
    }
    Ok(())
}

/// Read the corpus of every label.
pub fn read_corpora(
    roots: &BTreeMap<String, PathBuf>,
    analyzer: Arc<dyn Analyzer>,
    filter: Arc<dyn FileFilter>,
) -> Result<BTreeMap<String, Vec<Document>>> {
    roots
        .iter()
        .map(|(label, root)| {
            let documents = read_corpus(root, Arc::clone(&analyzer), filter.as_ref())?;
            Ok((label.clone(), documents))
        })
        .collect()
}

/// Flatten corpora into (label, document) entries, label by label.
pub fn flatten(corpora: BTreeMap<String, Vec<Document>>) -> Vec<LabeledDocument> {
    corpora
        .into_iter()
        .flat_map(|(label, documents)| {
            documents
                .into_iter()
                .map(move |document| LabeledDocument::new(label.clone(), document))
        })
        .collect()
}
