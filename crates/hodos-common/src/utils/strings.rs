//! String helpers for error messages.
//!
//! The registry resolves algorithms by name; when a lookup misses, a
//! "did you mean" hint built from the registered names beats a bare
//! failure.

/// Computes the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    let mut row: Vec<usize> = (0..=n).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[n]
}

/// Finds the closest candidate to `query`, case-insensitively.
///
/// `None` when nothing is close enough: the acceptable edit distance
/// scales with the query length (1 edit up to 3 chars, 2 up to 5,
/// 3 beyond).
///
/// # Examples
///
/// ```
/// use hodos_common::utils::strings::find_similar;
///
/// let names = ["bfs", "dijkstra", "kuhn"];
/// assert_eq!(find_similar("dijsktra", &names), Some("dijkstra"));
/// assert_eq!(find_similar("pagerank", &names), None);
/// ```
pub fn find_similar<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Option<&'a str> {
    let query_lower = query.to_lowercase();

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let name = candidate.as_ref();
        let distance = edit_distance(&query_lower, &name.to_lowercase());
        if distance == 0 {
            return Some(name);
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((name, distance));
        }
    }

    let limit = match query.chars().count() {
        0..=3 => 1,
        4..=5 => 2,
        _ => 3,
    };
    best.and_then(|(name, distance)| (distance <= limit).then_some(name))
}

/// Formats a "did you mean" hint, or an empty string without a match.
///
/// # Examples
///
/// ```
/// use hodos_common::utils::strings::suggestion_hint;
///
/// assert_eq!(suggestion_hint("bfz", &["bfs", "dfs"]), " Did you mean 'bfs'?");
/// assert_eq!(suggestion_hint("zzz", &["bfs", "dfs"]), "");
/// ```
#[must_use]
pub fn suggestion_hint<S: AsRef<str>>(query: &str, candidates: &[S]) -> String {
    match find_similar(query, candidates) {
        Some(name) => format!(" Did you mean '{name}'?"),
        None => String::new(),
    }
}
