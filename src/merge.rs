//! Merge engine: move `key` bindings from a source document onto a target.
//!
//! Pure in-memory transformation. The target is mutated in place and returned;
//! no module is ever added to or removed from it.

use crate::document::ConfigDocument;

/// Counts from one merge, used for logging and reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// `key` fields removed from the target before copying.
    pub stripped: usize,
    /// `key` fields copied from the source.
    pub copied: usize,
}

/// Remove the `key` field from every mapping entry in `target`.
///
/// Returns how many fields were removed. Opaque entries are left untouched.
pub fn strip_key_bindings(target: &mut ConfigDocument) -> usize {
    target
        .modules_mut()
        .filter_map(|(_, entry)| entry.remove_key_binding())
        .count()
}

/// Copy `key` from every source module that has one onto the same-named target module.
///
/// Source-only modules are ignored. Presence of the field gates the copy, so a
/// `null` or empty value is copied like any other.
pub fn copy_key_bindings(source: &ConfigDocument, target: &mut ConfigDocument) -> usize {
    let mut copied = 0;
    for (name, source_entry) in source.modules() {
        let Some(binding) = source_entry.key_binding() else {
            continue;
        };
        if let Some(target_entry) = target.module_mut(name) {
            target_entry.set_key_binding(binding.clone());
            copied += 1;
        }
    }
    copied
}

/// Strip every binding from `target`, then restore the ones `source` defines.
pub fn apply_binds(source: &ConfigDocument, target: ConfigDocument) -> ConfigDocument {
    apply_binds_with_summary(source, target).0
}

pub fn apply_binds_with_summary(
    source: &ConfigDocument,
    mut target: ConfigDocument,
) -> (ConfigDocument, MergeSummary) {
    let stripped = strip_key_bindings(&mut target);
    let copied = copy_key_bindings(source, &mut target);
    tracing::debug!(stripped, copied, modules = target.len(), "Applied key bindings");
    (target, MergeSummary { stripped, copied })
}
