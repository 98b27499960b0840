//! Editor form input and its conversion into store inputs.

use serde::{Deserialize, Serialize};

use super::{Category, NewPost, Post, PostPatch};
use crate::error::DomainError;

/// Raw editor form state. Every field is free text as typed by the author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub read_time: String,
    /// Comma-separated, e.g. `"rust, async"`.
    pub tags: String,
    pub cover_image: String,
    /// Lowercase category name, or blank for uncategorized.
    pub category: String,
}

impl PostDraft {
    /// Prefill the form from an existing post for editing.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            read_time: post.read_time.clone().unwrap_or_default(),
            tags: post.tags.join(", "),
            cover_image: post.cover_image.clone().unwrap_or_default(),
            category: post
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate and convert into the fields of a new post.
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        self.validate()?;
        let category = parse_category(&self.category)?;

        Ok(NewPost {
            tags: parse_tags(&self.tags),
            read_time: non_blank(self.read_time),
            cover_image: non_blank(self.cover_image),
            category,
            views: None,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            author: self.author,
        })
    }

    /// Validate and convert into a patch that overwrites every form-backed field.
    pub fn into_patch(self) -> Result<PostPatch, DomainError> {
        self.validate()?;
        let category = parse_category(&self.category)?;

        Ok(PostPatch::new()
            .tags(parse_tags(&self.tags))
            .read_time(non_blank(self.read_time))
            .cover_image(non_blank(self.cover_image))
            .category(category)
            .title(self.title)
            .content(self.content)
            .excerpt(self.excerpt)
            .author(self.author))
    }

    fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("excerpt", &self.excerpt),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "required fields missing: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Split a comma-separated tag list, trimming entries and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_category(raw: &str) -> Result<Option<Category>, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
