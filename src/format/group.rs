/// Group labels by value, keeping groups in first-seen order of their value.
///
/// Values compare by content, so two sections whose instructor lists hold
/// the same names land in one group.
pub fn group<'a, K: PartialEq + Clone>(labels: &[&'a str], values: &[K]) -> Vec<(K, Vec<&'a str>)> {
    let mut groups: Vec<(K, Vec<&'a str>)> = Vec::new();
    for (&label, value) in labels.iter().zip(values) {
        match groups.iter_mut().find(|(k, _)| k == value) {
            Some((_, members)) => members.push(label),
            None => groups.push((value.clone(), vec![label])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order() {
        let g = group(&["L1", "L2", "L3", "L4"], &[60, 40, 60, 10]);
        assert_eq!(g, vec![(60, vec!["L1", "L3"]), (40, vec!["L2"]), (10, vec!["L4"])]);
    }

    #[test]
    fn list_values_group_by_content() {
        let a = vec!["CHAN".to_string(), "LEE".to_string()];
        let b = vec!["CHAN".to_string(), "LEE".to_string()];
        let c = vec!["LEE".to_string(), "CHAN".to_string()];
        let g = group(&["L1", "L2", "L3"], &[a, b, c]);
        assert_eq!(g.len(), 2);
        assert_eq!(g[0].1, vec!["L1", "L2"]);
        assert_eq!(g[1].1, vec!["L3"]);
    }
}
