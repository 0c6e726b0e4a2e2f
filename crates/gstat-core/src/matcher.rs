/// A search hit scored against the user's query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    /// Index into the candidate slice handed to [`rank`]
    pub index: usize,
    pub name: String,
    pub score: f64,
}

/// Rank candidate names against a normalized query, best first.
///
/// Case-insensitive containment either direction (query inside candidate or
/// candidate inside query) is the strong signal and scores in [0.75, 1.0],
/// scaled by length ratio so an exact match scores 1.0. Anything else falls
/// back to normalized Levenshtein similarity. Candidates below `min_score`
/// are dropped; ties keep the provider's order.
pub fn rank(query: &str, candidates: &[String], min_score: f64) -> Vec<RankedMatch> {
    let query = query.to_lowercase();
    let mut ranked: Vec<RankedMatch> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let score = score(&query, &name.to_lowercase());
            (score >= min_score).then(|| RankedMatch {
                index,
                name: name.clone(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked
}

fn score(query: &str, candidate: &str) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let (short, long) = if query.chars().count() <= candidate.chars().count() {
        (query, candidate)
    } else {
        (candidate, query)
    };

    if long.contains(short) {
        let ratio = short.chars().count() as f64 / long.chars().count() as f64;
        return 0.75 + 0.25 * ratio;
    }

    similarity(query, candidate)
}

/// Normalized Levenshtein similarity in [0, 1].
fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
