//! Template staging: snapshots the parent project into the bundled
//! template directory. Maintainer-only and offline; run before
//! publishing so the generator ships a clean template.

use log::debug;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_GITIGNORE, GITIGNORE_FILE, TEMPLATE_EXCLUDES};
use crate::copier::copy_tree;
use crate::error::Result;
use crate::exclude::ExclusionRules;

/// Rebuilds `template_dir` from `project_root`.
///
/// Any pre-existing staging directory is deleted first, so no stale
/// files survive between runs. The copy applies the fixed exclusion
/// list (build outputs, caches, VCS metadata, secrets, lockfiles, and
/// the CLI package itself). When the snapshot carries no `.gitignore`
/// of its own, a fixed default one is written.
///
/// Repeated runs against the same source are idempotent.
pub fn prepare_template<P: AsRef<Path>>(project_root: P, template_dir: P) -> Result<()> {
    let project_root = project_root.as_ref();
    let template_dir = template_dir.as_ref();

    if template_dir.exists() {
        debug!("Removing stale template at {}", template_dir.display());
        fs::remove_dir_all(template_dir)?;
    }
    fs::create_dir_all(template_dir)?;

    let rules = ExclusionRules::new(TEMPLATE_EXCLUDES);
    copy_tree(project_root, template_dir, &rules)?;

    let gitignore_path = template_dir.join(GITIGNORE_FILE);
    if !gitignore_path.exists() {
        debug!("Writing fallback {}", GITIGNORE_FILE);
        fs::write(&gitignore_path, DEFAULT_GITIGNORE)?;
    }

    Ok(())
}
