use crate::{catalog::SortOrder, types::Problem};
use std::collections::BTreeMap;

pub struct RatingGroup<'a> {
    /// `None` labels the unrated bucket.
    pub rating: Option<u32>,
    pub problems: Vec<&'a Problem>,
}

/// Buckets by exact rating, ordered ascending or descending with the
/// unrated bucket always last. An order of `None` reads as ascending.
pub fn group_by_rating(problems: &[Problem], order: SortOrder) -> Vec<RatingGroup<'_>> {
    let mut rated: BTreeMap<u32, Vec<&Problem>> = BTreeMap::new();
    let mut unrated: Vec<&Problem> = Vec::new();
    for problem in problems {
        match problem.rating {
            Some(r) => rated.entry(r).or_insert_with(Vec::new).push(problem),
            None => unrated.push(problem),
        }
    }
    let mut groups: Vec<RatingGroup<'_>> = rated
        .into_iter()
        .map(|(rating, problems)| RatingGroup {
            rating: Some(rating),
            problems,
        })
        .collect();
    if order == SortOrder::RatingDesc {
        groups.reverse();
    }
    if !unrated.is_empty() {
        groups.push(RatingGroup {
            rating: None,
            problems: unrated,
        });
    }
    groups
}

pub struct TagGroup<'a> {
    pub tag: &'a str,
    pub problems: Vec<&'a Problem>,
}

/// One bucket per tag, labels ascending; a problem appears under every
/// tag it carries, in catalog order.
pub fn group_by_tag(problems: &[Problem]) -> Vec<TagGroup<'_>> {
    let mut buckets: BTreeMap<&str, Vec<&Problem>> = BTreeMap::new();
    for problem in problems {
        for tag in &problem.tags {
            buckets
                .entry(tag.as_str())
                .or_insert_with(Vec::new)
                .push(problem);
        }
    }
    buckets
        .into_iter()
        .map(|(tag, problems)| TagGroup { tag, problems })
        .collect()
}

/// Exact-rating query; `None` selects the unrated problems.
pub fn problems_by_rating(problems: &[Problem], rating: Option<u32>) -> Vec<&Problem> {
    problems.iter().filter(|p| p.rating == rating).collect()
}

pub fn problems_by_tag<'a>(problems: &'a [Problem], tag: &str) -> Vec<&'a Problem> {
    problems
        .iter()
        .filter(|p| p.tags.iter().any(|t| t == tag))
        .collect()
}
