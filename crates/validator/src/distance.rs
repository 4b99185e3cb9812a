/// Classic dynamic-programming Levenshtein distance. Case-sensitive; callers
/// that want case-insensitive comparison lowercase first.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Up to three allow-list entries within edit distance 3 of `value`, closest
/// first. Comparison is case-insensitive; returned values keep their
/// canonical casing.
pub fn similar_values<'a, I, S>(value: &str, valid_values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + 'a + ?Sized,
{
    let needle = value.to_lowercase();
    let mut similar: Vec<(&str, usize)> = valid_values
        .into_iter()
        .filter_map(|valid| {
            let valid = valid.as_ref();
            let distance = levenshtein(&needle, &valid.to_lowercase());
            (distance <= 3).then_some((valid, distance))
        })
        .collect();

    similar.sort_by_key(|&(_, distance)| distance);
    similar.truncate(3);
    similar.into_iter().map(|(valid, _)| valid).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distance_counts_single_deletion() {
        assert_eq!(levenshtein("shell.web.dashbord", "shell.web.dashboard"), 1);
    }

    #[test]
    fn distance_of_identical_strings_is_zero() {
        assert_eq!(levenshtein("page.detail", "page.detail"), 0);
    }

    #[test]
    fn distance_handles_empty_inputs() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn similar_values_ranks_closest_first() {
        let valid = ["page.dashboard", "page.detail", "page.wizard"];
        let hits = similar_values("page.detial", &valid);
        assert_eq!(hits.first().copied(), Some("page.detail"));
    }

    #[test]
    fn similar_values_caps_at_three_within_threshold() {
        let valid = ["header", "main", "sidebar", "footer"];
        let hits = similar_values("heder", &valid);
        assert!(hits.len() <= 3);
        assert_eq!(hits.first().copied(), Some("header"));
    }

    #[test]
    fn similar_values_is_case_insensitive() {
        let valid = ["Button", "Badge"];
        let hits = similar_values("button", &valid);
        assert_eq!(hits.first().copied(), Some("Button"));
    }
}
