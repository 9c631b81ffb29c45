//! Duplicate binding classification
//!
//! Registries often bind several names to objects of the same
//! implementation. Enumerating each of them separately is wasted effort, so
//! wrappers are grouped by [`type_name`](UnicastWrapper::type_name): the
//! first wrapper seen for a type becomes the representative and later ones
//! are attached to it as duplicates.

use crate::wrapper::UnicastWrapper;

/// Group `wrappers` by implementation type, keeping input order.
///
/// Returns one representative per type, in order of first appearance. A
/// candidate that already carries duplicates hands them over to its new
/// representative, so duplicates never own duplicates themselves.
pub fn classify(wrappers: Vec<UnicastWrapper>) -> Vec<UnicastWrapper> {
    let mut unique: Vec<UnicastWrapper> = Vec::new();

    for mut current in wrappers {
        let existing = unique
            .iter()
            .position(|other| other.type_name() == current.type_name());

        match existing {
            Some(idx) => {
                let nested = std::mem::take(&mut current.duplicates);
                let representative = &mut unique[idx];
                representative.add_duplicate(current);
                for duplicate in nested {
                    representative.add_duplicate(duplicate);
                }
            }
            None => unique.push(current),
        }
    }

    unique
}

/// Whether any wrapper in `wrappers` has duplicates
pub fn has_duplicates(wrappers: &[UnicastWrapper]) -> bool {
    wrappers.iter().any(UnicastWrapper::has_duplicates)
}
