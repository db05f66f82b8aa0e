//! CLI command implementations.

pub mod config;
pub mod order;
pub mod refresh;
pub mod render;
pub mod services;
pub mod suppress;

use clap::Args;
use floatbar_core::{PostContext, PostId, PostStatus};

/// Identifies the post a command acts on.
#[derive(Args, Debug, Clone)]
pub struct PostArgs {
    /// Host post id.
    #[arg(long)]
    pub post_id: u64,

    /// Canonical URL of the post.
    #[arg(long)]
    pub url: String,

    /// Post title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Content type of the post.
    #[arg(long, default_value = "post")]
    pub post_type: String,

    /// Host publish status (publish, draft, pending, private, future, trash).
    #[arg(long, default_value = "publish")]
    pub status: String,

    /// Site home URL, used as the tweet's original referer.
    #[arg(long)]
    pub home_url: Option<String>,
}

impl PostArgs {
    /// Builds the post context observed now.
    pub fn context(&self) -> PostContext {
        let mut post = PostContext::new(PostId(self.post_id), &self.url, &self.title)
            .with_post_type(&self.post_type)
            .with_status(PostStatus::from_host(&self.status));
        if let Some(home) = &self.home_url {
            post = post.with_home_url(home);
        }
        post
    }
}
