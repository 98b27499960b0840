//! Default collection used on first start and after unrecoverable storage.

use chrono::{DateTime, Utc};

use crate::domain::{Category, NewPost, Post, PostId};

/// Id of the welcome post.
pub const SEED_POST_ID: &str = "1";

const SEED_CONTENT: &str = "# Welcome to Luxe Blog

A modern personal blog for sharing technical insights and everyday thoughts.

## Highlights

- Glass panels and flowing gradients
- Light and dark themes
- Responsive on every screen size
- Fast loading and smooth browsing
- Markdown-style writing

## Getting started

Press the \"New post\" button in the top right corner to start writing!

## Built with

This blog runs on:
- React 18
- TypeScript
- Tailwind CSS
- Zustand (state management)
- React Router (routing)

Enjoy your time writing here!";

/// The single welcome post, dated `now`.
pub fn seed_post(now: DateTime<Utc>) -> Post {
    let fields = NewPost::new(
        "Welcome to Luxe Blog",
        SEED_CONTENT,
        "Discover a modern blogging platform and start your writing journey",
        "Luxe Blog",
    )
    .with_read_time("3 min")
    .with_tags(["welcome", "intro", "getting-started"])
    .with_category(Category::Technology)
    .with_views(128);

    Post::new(PostId::from(SEED_POST_ID), now, fields)
}

pub fn seed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![seed_post(now)]
}
