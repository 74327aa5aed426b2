//! Relevance Matcher
//!
//! Scores skill documents against a free-text query by token overlap:
//! a query token found in a document's tags outweighs one found in its
//! description. The exact weights are a placeholder ranking policy, not
//! a compatibility surface.

use std::collections::HashSet;

use crate::types::{SkillDocument, SkillMatch};

/// Points per query token found in a document's tags.
pub const TAG_WEIGHT: u32 = 2;
/// Points per query token found in a document's description.
pub const DESCRIPTION_WEIGHT: u32 = 1;

/// Lowercase a text and split it into its set of word tokens.
///
/// Tokens are runs of alphanumeric characters. A trailing `s` is folded
/// away on longer tokens so that "pipeline" matches "pipelines"; both
/// sides of a comparison go through the same fold, so this stays
/// consistent.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| fold_plural(&t.to_lowercase()))
        .collect()
}

/// Naive plural folding: strip one trailing `s` from tokens longer than
/// three characters.
fn fold_plural(token: &str) -> String {
    if token.len() > 3 {
        if let Some(stripped) = token.strip_suffix('s') {
            return stripped.to_string();
        }
    }
    token.to_string()
}

/// Score a single document against a tokenized query.
pub fn score_document(query: &HashSet<String>, doc: &SkillDocument) -> u32 {
    let tag_tokens = tokenize(&doc.tags.join(" "));
    let description_tokens = tokenize(&doc.description);

    let tag_hits = query.intersection(&tag_tokens).count() as u32;
    let description_hits = query.intersection(&description_tokens).count() as u32;

    tag_hits * TAG_WEIGHT + description_hits * DESCRIPTION_WEIGHT
}

/// Rank `docs` against a free-text query.
///
/// Results are sorted by descending score, ties broken by ascending name.
/// Zero-score documents are excluded; an empty result is a normal outcome,
/// not an error.
pub fn rank<'a>(
    query: &str,
    docs: impl Iterator<Item = &'a SkillDocument>,
) -> Vec<SkillMatch> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<SkillMatch> = docs
        .filter_map(|doc| {
            let score = score_document(&query_tokens, doc);
            (score > 0).then(|| SkillMatch {
                name: doc.name.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    matches
}
