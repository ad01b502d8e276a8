// Sentinel recorded for a name whose lookup produced no usable count. Keeps
// the result sequence uniformly sortable; sentinel entries sort last.
pub const NO_DATA: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub views: i64,
    pub name: String,
}

// Builds one entry per name, in processing order, mapping absent counts to
// the NO_DATA sentinel
pub fn aggregate<I>(outcomes: I) -> Vec<RankedEntry> where I: IntoIterator<Item = (String, Option<u64>)> {
    outcomes
        .into_iter()
        .map(|(name, views)| RankedEntry {
            views: views.map_or(NO_DATA, |v| v as i64),
            name,
        })
        .collect()
}

// Stable sort by view count descending; ties keep processing order
pub fn sort_descending(results: &mut [RankedEntry]) {
    results.sort_by(|a, b| b.views.cmp(&a.views));
}

// The first `n` entries, or everything when there are fewer than `n`
pub fn top(results: &[RankedEntry], n: usize) -> &[RankedEntry] {
    if results.len() > n {
        &results[..n]
    } else {
        results
    }
}

// How many names ended up with no usable count
pub fn unresolved_count(results: &[RankedEntry]) -> usize {
    results
        .iter()
        .filter(|entry| entry.views == NO_DATA)
        .count()
}
