// Unit tests for rating and tag grouping: bucket order, the unrated
// bucket, multi-tag membership and the exact-match queries.

use cf_browser::catalog::SortOrder;
use cf_browser::group::{group_by_rating, group_by_tag, problems_by_rating, problems_by_tag};
use cf_browser::types::Problem;

fn make_problem(contest: u32, index: &str, rating: Option<u32>, tags: &[&str]) -> Problem {
    Problem {
        contest_id: contest,
        index: index.to_string(),
        name: format!("Problem {}", index),
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        kind: "PROGRAMMING".to_string(),
    }
}

#[test]
fn rating_groups_ascending_with_unrated_last() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &[]),
        make_problem(1, "B", Some(900), &[]),
        make_problem(1, "C", Some(1200), &[]),
        make_problem(1, "D", None, &[]),
    ];
    let groups = group_by_rating(&catalog, SortOrder::RatingAsc);
    let labels: Vec<Option<u32>> = groups.iter().map(|g| g.rating).collect();
    assert_eq!(labels, [Some(900), Some(1200), None]);
    assert_eq!(groups[0].problems.len(), 2);
    assert_eq!(groups[1].problems.len(), 1);
    assert_eq!(groups[2].problems.len(), 1);
}

#[test]
fn rating_groups_descending_keeps_unrated_last() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &[]),
        make_problem(1, "B", None, &[]),
        make_problem(1, "C", Some(1200), &[]),
    ];
    let groups = group_by_rating(&catalog, SortOrder::RatingDesc);
    let labels: Vec<Option<u32>> = groups.iter().map(|g| g.rating).collect();
    assert_eq!(labels, [Some(1200), Some(900), None]);
}

#[test]
fn no_unrated_bucket_without_unrated_problems() {
    let catalog = vec![make_problem(1, "A", Some(900), &[])];
    let groups = group_by_rating(&catalog, SortOrder::RatingAsc);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].rating, Some(900));
}

#[test]
fn rating_groups_are_idempotent() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &[]),
        make_problem(1, "B", None, &[]),
    ];
    let first: Vec<Option<u32>> = group_by_rating(&catalog, SortOrder::RatingAsc)
        .iter()
        .map(|g| g.rating)
        .collect();
    let second: Vec<Option<u32>> = group_by_rating(&catalog, SortOrder::RatingAsc)
        .iter()
        .map(|g| g.rating)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn tag_groups_are_lexicographic_and_multi_membership() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &["dp", "greedy"]),
        make_problem(1, "B", Some(900), &["greedy"]),
        make_problem(1, "C", None, &["brute force"]),
    ];
    let groups = group_by_tag(&catalog);
    let labels: Vec<&str> = groups.iter().map(|g| g.tag).collect();
    assert_eq!(labels, ["brute force", "dp", "greedy"]);
    let greedy = &groups[2];
    assert_eq!(greedy.problems.len(), 2);
    // Catalog order within the bucket.
    assert_eq!(greedy.problems[0].index, "A");
    assert_eq!(greedy.problems[1].index, "B");
}

#[test]
fn untagged_problems_appear_in_no_bucket() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &[]),
        make_problem(1, "B", Some(900), &["dp"]),
    ];
    let groups = group_by_tag(&catalog);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].problems.len(), 1);
}

#[test]
fn query_by_rating_is_exact() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &[]),
        make_problem(1, "B", Some(1200), &[]),
        make_problem(1, "C", Some(900), &[]),
        make_problem(1, "D", None, &[]),
    ];
    let members = problems_by_rating(&catalog, Some(900));
    let indices: Vec<&str> = members.iter().map(|p| p.index.as_str()).collect();
    assert_eq!(indices, ["A", "C"]);
    let unrated = problems_by_rating(&catalog, None);
    assert_eq!(unrated.len(), 1);
    assert_eq!(unrated[0].index, "D");
}

#[test]
fn query_by_tag_matches_membership() {
    let catalog = vec![
        make_problem(1, "A", Some(900), &["dp", "greedy"]),
        make_problem(1, "B", Some(900), &["math"]),
    ];
    let members = problems_by_tag(&catalog, "dp");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].index, "A");
    assert!(problems_by_tag(&catalog, "geometry").is_empty());
}
