use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Opaque post identifier.
///
/// Fresh ids are UUID v4 strings; ids read back from storage are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

impl Post {
    /// Build a post from caller-supplied fields plus store-assigned identity.
    pub fn new(id: PostId, date: DateTime<Utc>, fields: NewPost) -> Self {
        let NewPost {
            title,
            content,
            excerpt,
            author,
            read_time,
            tags,
            cover_image,
            category,
            views,
        } = fields;

        Self {
            id,
            title,
            content,
            excerpt,
            author,
            date,
            read_time,
            tags,
            cover_image,
            category,
            views,
        }
    }

    /// Merge a patch over this post. `id` and `date` are never touched.
    pub fn apply(&mut self, patch: PostPatch) {
        let PostPatch {
            title,
            content,
            excerpt,
            author,
            read_time,
            tags,
            cover_image,
            category,
            views,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(read_time) = read_time {
            self.read_time = read_time;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(cover_image) = cover_image {
            self.cover_image = cover_image;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(views) = views {
            self.views = views;
        }
    }
}

/// Every post attribute except the store-assigned `id` and `date`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub category: Option<Category>,
    pub views: Option<u64>,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            excerpt: excerpt.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = Some(read_time.into());
        self
    }

    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }
}

/// Partial update of a post.
///
/// `None` leaves a field untouched. For optional attributes the inner
/// `Option` is the new value, so `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub read_time: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<Option<String>>,
    pub category: Option<Option<Category>>,
    pub views: Option<Option<u64>>,
}

impl PostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn read_time(mut self, read_time: Option<String>) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn cover_image(mut self, url: Option<String>) -> Self {
        self.cover_image = Some(url);
        self
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = Some(category);
        self
    }

    pub fn views(mut self, views: Option<u64>) -> Self {
        self.views = Some(views);
        self
    }
}
