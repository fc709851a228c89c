use models::{ErrorNode, ErrorRecord, ErrorTree};

/// Return the first erroring leaf, depth first in insertion order.
///
/// Branches are searched before the next sibling. Absent entries are skipped,
/// and a tree with no erroring leaf yields the default record.
pub fn get_error(errors: &ErrorTree) -> ErrorRecord {
    find_error(errors).cloned().unwrap_or_default()
}

fn find_error(errors: &ErrorTree) -> Option<&ErrorRecord> {
    errors.iter().find_map(|(_, node)| match node {
        ErrorNode::Leaf(record) if record.has_error => Some(record),
        ErrorNode::Branch(tree) => find_error(tree),
        _ => None,
    })
}
