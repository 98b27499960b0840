//! Domain entities - the post record and the inputs that create or change it.

mod category;
mod draft;
mod post;

pub use category::Category;
pub use draft::{PostDraft, parse_tags};
pub use post::{NewPost, Post, PostId, PostPatch};
