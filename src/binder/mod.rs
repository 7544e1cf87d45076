//! Section binders: the live widget-state projection of each config
//! section, and the reconciliation of edited state back into the document.
//!
//! Every binding follows the same two-operation contract:
//! `project(&Section) -> Binding` encodes each schema field into a control,
//! `reconcile(&Binding, &Section) -> Section` clones the base section and
//! decodes each bound control into the clone. Fields the binding does not
//! know about pass through the clone untouched, which is what keeps
//! hand-edited keys alive across a save.

pub mod account;
pub mod common;

pub use account::AccountBinding;
pub use common::CommonBinding;

/// Reconcile an ordered binding collection against a freshly reread base
/// collection, by position. Binding `i` merges into `base[i]` when present;
/// bindings past the end of the base (added this session) merge into a
/// schema-default section. The output replaces the base wholesale, so base
/// entries beyond the binding collection are dropped.
///
/// Order is the only identity here. If the on-disk collection was reordered
/// between load and save, bindings are silently matched with the wrong base
/// entries; detecting that would need a persisted stable id, which the
/// document format does not have.
pub fn reconcile_by_position<B, C, F>(bindings: &[B], base: &[C], reconcile_one: F) -> Vec<C>
where
    C: Default,
    F: Fn(&B, &C) -> C,
{
    bindings
        .iter()
        .enumerate()
        .map(|(idx, binding)| match base.get(idx) {
            Some(entry) => reconcile_one(binding, entry),
            None => reconcile_one(binding, &C::default()),
        })
        .collect()
}
