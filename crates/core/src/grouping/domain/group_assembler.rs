use std::collections::HashMap;

use crate::shared::grouping_error::GroupingError;

/// Inverts a label assignment into identity groups.
///
/// Groups appear in the order their label is first seen while scanning
/// `ids`, and members keep their input order. The label values themselves
/// carry no ordering.
pub fn assemble<T: Clone>(ids: &[T], labels: &[usize]) -> Result<Vec<Vec<T>>, GroupingError> {
    if ids.len() != labels.len() {
        return Err(GroupingError::DimensionMismatch(format!(
            "{} identifiers but {} labels",
            ids.len(),
            labels.len()
        )));
    }

    let mut slot_by_label: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();
    for (id, &label) in ids.iter().zip(labels) {
        let slot = *slot_by_label.entry(label).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(id.clone());
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_input() {
        let groups = assemble::<u32>(&[], &[]).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let ids = ["a", "b", "c", "d", "e"];
        let labels = [7, 2, 7, 0, 2];
        let groups = assemble(&ids, &labels).unwrap();
        assert_eq!(groups, vec![vec!["a", "c"], vec!["b", "e"], vec!["d"]]);
    }

    #[test]
    fn test_label_values_do_not_affect_order() {
        let ids = [10, 20, 30];
        let groups = assemble(&ids, &[5, 1, 0]).unwrap();
        assert_eq!(groups, vec![vec![10], vec![20], vec![30]]);
    }

    #[test]
    fn test_all_same_label() {
        let ids = [1, 2, 3, 4];
        let groups = assemble(&ids, &[3, 3, 3, 3]).unwrap();
        assert_eq!(groups, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_output_partitions_input() {
        let ids: Vec<u32> = (0..50).collect();
        let labels: Vec<usize> = ids.iter().map(|i| (*i as usize * 7) % 6).collect();
        let groups = assemble(&ids, &labels).unwrap();

        let flat: Vec<u32> = groups.iter().flatten().copied().collect();
        assert_eq!(flat.len(), ids.len());
        let unique: HashSet<u32> = flat.into_iter().collect();
        assert_eq!(unique, ids.iter().copied().collect());
        assert_eq!(groups.len(), 6);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = assemble(&[1, 2, 3], &[0, 1]).unwrap_err();
        assert!(matches!(err, GroupingError::DimensionMismatch(_)));
    }
}
