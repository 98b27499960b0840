//! Console commands - the listing, detail and editor views over the store.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result, bail};
use blog_core::{
    BlockKind, CategoryFilter, Document, Post, PostDraft, PostFilter, PostId, PostStore,
    related_to,
};
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List posts, newest first.
    List {
        /// Case-insensitive match on title, excerpt or tags.
        #[arg(long, short, default_value = "")]
        search: String,
        /// `all` or one of technology, life, travel, food, design, other.
        #[arg(long, short, default_value = "all")]
        category: CategoryFilter,
    },
    /// Render a post with its related posts.
    Show { id: String },
    /// Publish a new post.
    Create(PostFields),
    /// Edit an existing post. Omitted fields keep their current value.
    Edit {
        id: String,
        #[command(flatten)]
        fields: PostFields,
    },
    /// Delete a post.
    Delete { id: String },
}

#[derive(Debug, Default, Args)]
pub struct PostFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    read_time: Option<String>,
    /// Comma-separated tags.
    #[arg(long)]
    tags: Option<String>,
    #[arg(long)]
    cover_image: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

impl PostFields {
    fn merge_into(self, mut draft: PostDraft) -> PostDraft {
        let overrides = [
            (self.title, &mut draft.title),
            (self.content, &mut draft.content),
            (self.excerpt, &mut draft.excerpt),
            (self.author, &mut draft.author),
            (self.read_time, &mut draft.read_time),
            (self.tags, &mut draft.tags),
            (self.cover_image, &mut draft.cover_image),
            (self.category, &mut draft.category),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        draft
    }
}

/// Run one command against the store, returning the text to print.
pub fn run(store: &mut PostStore, command: Command) -> Result<String> {
    match command {
        Command::List { search, category } => list(store, &search, category),
        Command::Show { id } => {
            let id = PostId::from(id);
            let post = store
                .get(&id)
                .with_context(|| format!("post {id} not found"))?;
            show(store.list(), post)
        }
        Command::Create(fields) => {
            let new_post = fields.merge_into(PostDraft::default()).into_new_post()?;
            let post = store.create(new_post)?;
            tracing::info!(post_id = %post.id, "Post published");
            Ok(format!("Created {}\n", post.id))
        }
        Command::Edit { id, fields } => {
            let id = PostId::from(id);
            let Some(current) = store.get(&id) else {
                bail!("post {id} not found");
            };
            let patch = fields.merge_into(PostDraft::from_post(current)).into_patch()?;
            store.update(&id, patch)?;
            tracing::info!(post_id = %id, "Post updated");
            Ok(format!("Updated {id}\n"))
        }
        Command::Delete { id } => {
            let id = PostId::from(id);
            match store.delete(&id)? {
                Some(post) => Ok(format!("Deleted {} ({})\n", post.id, post.title)),
                None => Ok(format!("No post {id}\n")),
            }
        }
    }
}

fn list(store: &PostStore, search: &str, category: CategoryFilter) -> Result<String> {
    let filter = PostFilter::new(search, category);
    let mut out = String::new();

    for post in filter.apply(store.list()) {
        writeln!(out, "{}", summary_line(post)?)?;
    }
    if out.is_empty() {
        out.push_str(if search.is_empty() {
            "No posts yet\n"
        } else {
            "No matching posts\n"
        });
    }
    Ok(out)
}

fn summary_line(post: &Post) -> Result<String, fmt::Error> {
    let mut line = format!(
        "{}  {}  {}  {}",
        post.id,
        post.date.format("%Y-%m-%d"),
        post.title,
        post.author
    );
    if let Some(category) = post.category {
        write!(line, "  [{category}]")?;
    }
    if !post.tags.is_empty() {
        write!(line, "  #{}", post.tags.join(" #"))?;
    }
    Ok(line)
}

fn show(posts: &[Post], post: &Post) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", post.title)?;
    write!(out, "by {} on {}", post.author, post.date.format("%Y-%m-%d"))?;
    if let Some(read_time) = &post.read_time {
        write!(out, " - {read_time}")?;
    }
    out.push_str("\n\n");

    for block in &Document::new(&post.content) {
        match block.kind {
            BlockKind::Heading { level, text } => {
                writeln!(out, "{} {text}", "#".repeat(usize::from(level)))?
            }
            BlockKind::ListItem(text) => writeln!(out, "  * {text}")?,
            BlockKind::Paragraph(text) => writeln!(out, "{text}")?,
            BlockKind::LineBreak => out.push('\n'),
        }
    }

    let related = related_to(posts, post);
    if !related.is_empty() {
        out.push_str("\nRelated posts\n");
        for ranked in related {
            writeln!(out, "  {}  {}", ranked.post.id, ranked.post.title)?;
        }
    }
    Ok(out)
}
