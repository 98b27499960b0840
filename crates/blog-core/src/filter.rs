//! Search and category filtering over a snapshot of posts.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Category, Post};
use crate::error::DomainError;

/// Category selection of a listing view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == Some(*category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Search term plus category selection. Both must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    needle: String,
    category: CategoryFilter,
}

impl PostFilter {
    pub fn new(search_term: &str, category: CategoryFilter) -> Self {
        Self {
            needle: search_term.to_lowercase(),
            category,
        }
    }

    /// Case-insensitive substring match on title, excerpt or any tag.
    fn matches_term(&self, post: &Post) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(self.needle.as_str());

        hit(post.title.as_str())
            || hit(post.excerpt.as_str())
            || post.tags.iter().any(|tag| hit(tag.as_str()))
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.category.matches(post) && self.matches_term(post)
    }

    /// Matching posts in snapshot order.
    pub fn apply<'p>(&self, posts: &'p [Post]) -> impl Iterator<Item = &'p Post> {
        posts.iter().filter(move |post| self.matches(post))
    }
}

/// Filter a snapshot by search term and category, preserving order.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    search_term: &str,
    category: CategoryFilter,
) -> Vec<&'a Post> {
    let filter = PostFilter::new(search_term, category);
    filter.apply(posts).collect()
}
