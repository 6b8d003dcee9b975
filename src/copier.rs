//! Recursive filtered copy.
//! Walks a source tree, prunes excluded entries before descending into
//! them, and mirrors everything else into the destination. Used by the
//! packager (project root into staging) and by the generator (staged
//! template into the new project, with an empty rule set).

use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::exclude::ExclusionRules;

/// Copies `source` into `dest`, skipping every entry whose path relative
/// to `source` matches the rule set.
///
/// Destination directories are created as needed (idempotently); file
/// copies are whole-file and overwrite any existing destination file.
/// Symbolic links receive no special handling beyond what `fs::copy`
/// does with the entry type the walker reports.
///
/// # Errors
/// Any unreadable source entry or unwritable destination path aborts the
/// whole copy with the underlying IO error; there is no partial-success
/// policy and no resume.
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    rules: &ExclusionRules,
) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    if !source.exists() {
        return Err(Error::TemplateError(format!(
            "source directory '{}' does not exist",
            source.display()
        )));
    }

    let walker = WalkDir::new(source).into_iter().filter_entry(|entry| {
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        if rules.is_excluded(relative) {
            debug!("Skipping excluded path: {}", relative.display());
            false
        } else {
            true
        }
    });

    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            debug!("Copying file: {}", target.display());
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(entry.path(), &target).map(|_| ()).map_err(Error::IoError)?;
        }
    }

    Ok(())
}
