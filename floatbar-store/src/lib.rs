// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Floatbar Store
//!
//! Persistence and host integration for the floating share bar.
//!
//! This crate provides:
//!
//! - **ConfigStore**: Global settings persisted as one JSON document
//! - **FilePostStore** / **MemoryPostStore**: Per-post counts and overrides
//! - **StatCacheRefresher**: TTL-gated share-count refresh
//! - **FloatingBar**: The host facade (eligibility gate, page render, reorder endpoint)
//! - **Persistence**: Atomic JSON file helpers
//!
//! ## Usage
//!
//! ```ignore
//! use floatbar_core::PostContext;
//! use floatbar_store::{FloatingBar, PageRender};
//!
//! let bar = FloatingBar::open_default();
//! let mut page = PageRender::new();
//! let post = PostContext::new(PostId(42), "https://blog.example/hello/", "Hello");
//!
//! if let Some(rendered) = bar.render_post(&mut page, &post).await {
//!     for button in &rendered.buttons {
//!         println!("{} {} {}", button.service, button.count, button.share_url);
//!     }
//! }
//! ```

pub mod config_store;
pub mod error;
pub mod floating_bar;
pub mod persistence;
pub mod post_store;
pub mod refresher;

pub use config_store::{ConfigRepository, ConfigStore};
pub use error::StoreError;
pub use floating_bar::{FloatingBar, PageRender, live_context};
pub use persistence::{
    default_cache_dir, default_config_dir, default_posts_dir, default_settings_path, load_json,
    load_json_opt, save_json,
};
pub use post_store::{FilePostStore, MemoryPostStore, PostRepository};
pub use refresher::{Freshness, StatCacheRefresher};
