use crate::catalog::SearchableItem;
use crate::search::config::DEFAULT_SEARCH_LIMIT;

/// Score for a case-insensitive exact match
pub const SCORE_EXACT: f64 = 100.0;

/// Score when the target starts with the query
pub const SCORE_PREFIX: f64 = 80.0;

/// Score when the target contains the query
pub const SCORE_SUBSTRING: f64 = 60.0;

/// Upper bound for token-partial matches, scaled by the fraction of query tokens matched
pub const SCORE_TOKEN_PARTIAL: f64 = 50.0;

/// Multiplier applied to matches found only in an item's description
pub const DESCRIPTION_WEIGHT: f64 = 0.5;

/// Options that narrow and cap a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Keep only items whose category equals this, ignoring case
    pub category: Option<String>,
    /// Maximum number of results to return
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            category: None,
            max_results: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// An item paired with the relevance score it earned for one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult<'a> {
    pub item: &'a SearchableItem,
    pub score: f64,
}

/// Split an identifier-like string into lowercase word tokens.
///
/// Boundaries are placed between a lowercase letter and a following uppercase
/// letter (`fooBar`), and between an uppercase run and a capitalized word that
/// follows it (`HTTPServer`). The string is then lowercased and split on
/// whitespace, `.`, `_` and `-`.
///
/// ```
/// use luba_mcp::search::split_camel_case;
///
/// assert_eq!(split_camel_case("HTTPServer"), vec!["http", "server"]);
/// ```
pub fn split_camel_case(input: &str) -> Vec<String> {
    let spaced = split_acronym_boundaries(&split_case_boundaries(input));

    spaced
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '_' | '-'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// `fooBar` -> `foo Bar`
fn split_case_boundaries(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

/// `HTTPServer` -> `HTTP Server`
fn split_acronym_boundaries(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let starts_word = i > 0
            && c.is_ascii_uppercase()
            && chars[i - 1].is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
        if starts_word {
            out.push(' ');
        }
        out.push(c);
    }

    out
}

/// Score how well `query` matches a single `target` string.
///
/// The first rule that applies wins: exact match (100), prefix (80),
/// substring (60), then partial credit of up to 50 for the fraction of query
/// tokens found inside target tokens. Anything else scores 0.
pub fn score_match(query: &str, target: &str) -> f64 {
    let query_lower = query.to_lowercase();
    let target_lower = target.to_lowercase();

    if query_lower == target_lower {
        return SCORE_EXACT;
    }
    if target_lower.starts_with(&query_lower) {
        return SCORE_PREFIX;
    }
    if target_lower.contains(&query_lower) {
        return SCORE_SUBSTRING;
    }

    let query_tokens = split_camel_case(query);
    let target_tokens = split_camel_case(target);

    let matched_parts = query_tokens
        .iter()
        .filter(|qt| {
            target_tokens
                .iter()
                .any(|tt| tt.starts_with(qt.as_str()) || tt.contains(qt.as_str()))
        })
        .count();

    if matched_parts > 0 {
        SCORE_TOKEN_PARTIAL * (matched_parts as f64 / query_tokens.len() as f64)
    } else {
        0.0
    }
}

/// Best score an item earns from its name or any of its aliases
pub fn score_names(query: &str, item: &SearchableItem) -> f64 {
    item.aliases
        .iter()
        .flatten()
        .fold(score_match(query, &item.name), |best, alias| {
            best.max(score_match(query, alias))
        })
}

/// Best score an item earns across its name, aliases and (damped) description
pub fn score_item(query: &str, item: &SearchableItem) -> f64 {
    let mut best = score_names(query, item);

    if let Some(description) = &item.description {
        best = best.max(score_match(query, description) * DESCRIPTION_WEIGHT);
    }

    best
}

/// Score, filter and order `items` against `query`, keeping the scores.
///
/// Items outside `options.category` are dropped before scoring. Only items
/// scoring above zero are returned, highest first; equal scores keep their
/// input order.
pub fn rank<'a>(
    items: &'a [SearchableItem],
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredResult<'a>> {
    let mut scored: Vec<ScoredResult<'a>> = items
        .iter()
        .filter(|item| match &options.category {
            Some(category) => item.in_category(category),
            None => true,
        })
        .map(|item| ScoredResult {
            item,
            score: score_item(query, item),
        })
        .filter(|result| result.score > 0.0)
        .collect();

    // Vec::sort_by is stable, so ties stay in scoring order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(options.max_results);

    tracing::debug!(
        "Ranked {} candidate(s) for query '{}' (category: {:?})",
        scored.len(),
        query,
        options.category
    );

    scored
}

/// Return the items most relevant to `query`, best first
pub fn search<'a>(
    items: &'a [SearchableItem],
    query: &str,
    options: &SearchOptions,
) -> Vec<&'a SearchableItem> {
    rank(items, query, options)
        .into_iter()
        .map(|result| result.item)
        .collect()
}
