//! Related posts ranking.
//!
//! A candidate scores `3` for sharing the reference's category, `2` for each
//! distinct tag it shares with the reference, and `views / 1000` on top.
//! Candidates are ordered by score, highest first; equal scores keep their
//! snapshot order.

use std::collections::HashSet;

use crate::domain::{Category, Post, PostId};

/// Maximum number of related posts returned.
pub const MAX_RELATED: usize = 3;

const CATEGORY_WEIGHT: f64 = 3.0;
const TAG_WEIGHT: f64 = 2.0;
const VIEWS_DIVISOR: f64 = 1000.0;

/// A candidate post with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPost<'a> {
    pub post: &'a Post,
    pub score: f64,
}

/// Relevance of `candidate` to a reference described by its tags and category.
pub fn relevance_score(candidate: &Post, tags: &[String], category: Option<Category>) -> f64 {
    let mut score = 0.0;

    if candidate.category.is_some() && candidate.category == category {
        score += CATEGORY_WEIGHT;
    }

    let reference: HashSet<&str> = tags.iter().map(String::as_str).collect();
    let shared = candidate
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(&reference)
        .count();
    score += TAG_WEIGHT * shared as f64;

    score += candidate.views.unwrap_or(0) as f64 / VIEWS_DIVISOR;
    score
}

/// Rank every post except `id` against the reference tags and category.
///
/// Returns at most [`MAX_RELATED`] posts; an empty result means nothing to show.
pub fn related_posts<'a>(
    posts: &'a [Post],
    id: &PostId,
    tags: &[String],
    category: Option<Category>,
) -> Vec<RankedPost<'a>> {
    let mut ranked: Vec<RankedPost<'a>> = posts
        .iter()
        .filter(|post| &post.id != id)
        .map(|post| RankedPost {
            post,
            score: relevance_score(post, tags, category),
        })
        .collect();

    // `sort_by` is stable, so ties keep snapshot order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(MAX_RELATED);
    ranked
}

/// Convenience wrapper ranking against a full reference post.
pub fn related_to<'a>(posts: &'a [Post], reference: &Post) -> Vec<RankedPost<'a>> {
    related_posts(posts, &reference.id, &reference.tags, reference.category)
}
