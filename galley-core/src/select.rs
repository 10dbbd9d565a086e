//! Selection policy — routes one discovered source entry to an action.
//!
//! Precedence:
//! 1. `SkipOutOfWindow` (the change set is non-empty and does not name the
//!    file; the run is scoped to a known change window)
//! 2. `SkipUnchanged` (untouched since the recorded revision and already
//!    published)
//! 3. `SkipNotDocument` (no recognised document extension)
//! 4. `Convert`

use std::collections::BTreeSet;
use std::path::Path;

/// Action chosen for one source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the document and record it in the tracking index.
    Convert,
    /// The run is scoped to a change window this file is not part of.
    SkipOutOfWindow,
    /// Already published and not touched since.
    SkipUnchanged,
    /// Not a document extension.
    SkipNotDocument,
}

/// Extensions recognised as source documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// True if `filename` carries a recognised document extension.
pub fn is_document(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

/// Output filename for a converted document: extension replaced by `.html`.
///
/// Non-document names pass through unchanged; the policy never routes them
/// to conversion.
pub fn output_name(filename: &str) -> String {
    if !is_document(filename) {
        return filename.to_owned();
    }
    match Path::new(filename).file_stem() {
        Some(stem) => format!("{}.html", stem.to_string_lossy()),
        None => filename.to_owned(),
    }
}

/// Decide what to do with `filename`.
///
/// An empty `change_set` means the run is unscoped and every entry is a
/// candidate; a non-empty one narrows the run to the files version control
/// reported as touched. A file that is both tracked and in the change set
/// still converts: in-place edits republish, not just first-time additions.
pub fn decide(
    filename: &str,
    change_set: &BTreeSet<String>,
    tracked: &BTreeSet<String>,
) -> Action {
    let in_window = change_set.contains(filename);

    if !change_set.is_empty() && !in_window {
        return Action::SkipOutOfWindow;
    }
    if !in_window && tracked.contains(filename) {
        return Action::SkipUnchanged;
    }
    if !is_document(filename) {
        return Action::SkipNotDocument;
    }
    Action::Convert
}
