//! Command-line front end: parses arguments and drives the store.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::{BlogApi, DraftPost};
use crate::config::{Config, ConfigError};
use crate::posts::selectors::{
    get_posts_error, get_posts_status, select_post_by_id, select_posts_by_date,
};
use crate::posts::{FetchStatus, Post, PostsIntent, ReactionKind};
use crate::store::thunks::{self, FetchPostsOutcome};
use crate::store::Store;
use crate::users::selectors::{select_all_users, select_user_by_id};

#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "Read and write posts on a blog backend")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List posts, newest first
    Posts {
        /// Only show posts by this author id
        #[arg(long)]
        author: Option<u64>,
    },
    /// List users
    Users,
    /// Publish a new post
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Author id
        #[arg(long)]
        user: String,
    },
    /// React to a fetched post and show its counters
    React {
        #[arg(long)]
        post: String,
        /// One of thumbsUp, wow, heart, rocket, coffee
        #[arg(long)]
        reaction: ReactionKind,
    },
}

impl Cli {
    /// Resolve the effective config: file (explicit or default), then flags.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }

        Ok(config)
    }
}

/// Run one command against `store`, writing the report to `out`.
pub async fn run(
    command: Command,
    store: &Store,
    api: &dyn BlogApi,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Posts { author } => {
            // Author names are optional decoration.
            if let Err(e) = thunks::fetch_users(store, api).await {
                tracing::debug!(error = %e, "continuing without author names");
            }
            if let FetchPostsOutcome::Failed { message } = thunks::fetch_posts(store, api).await {
                anyhow::bail!(message);
            }

            store.select(|state| -> std::io::Result<()> {
                let posts = select_posts_by_date(state)
                    .into_iter()
                    .filter(|post| author.is_none_or(|user_id| post.user_id == user_id));
                for post in posts {
                    let author = select_user_by_id(state, post.user_id)
                        .map(|user| user.name.as_str())
                        .unwrap_or("Unknown author");
                    writeln!(out, "{:>4}  {}  {}  by {}", post.id, post.date, post.title, author)?;
                }
                Ok(())
            })?;
        }

        Command::Users => {
            thunks::fetch_users(store, api).await?;
            store.select(|state| -> std::io::Result<()> {
                for user in select_all_users(state) {
                    writeln!(out, "{:>4}  {}", user.id.to_string(), user.name)?;
                }
                Ok(())
            })?;
        }

        Command::Add {
            title,
            content,
            user,
        } => {
            let post = thunks::add_new_post(store, api, DraftPost::new(title, content, user)).await?;
            write_post(out, &post)?;
        }

        Command::React { post, reaction } => {
            thunks::fetch_posts(store, api).await;
            let (status, error) = store.select(|state| {
                (get_posts_status(state), get_posts_error(state).map(str::to_string))
            });
            if status == FetchStatus::Failed {
                anyhow::bail!(error.unwrap_or_default());
            }

            let reacted = store.dispatch_then(PostsIntent::reaction_added(&post, reaction), |state| {
                select_post_by_id(state, &post).cloned()
            });
            match reacted {
                Some(reacted) => write_post(out, &reacted)?,
                None => anyhow::bail!("Post '{}' not found", post),
            }
        }
    }

    Ok(())
}

fn write_post(out: &mut impl Write, post: &Post) -> std::io::Result<()> {
    writeln!(out, "{}  {}", post.id, post.title)?;
    writeln!(out, "{}", post.content)?;
    writeln!(out, "user {}  {}", post.user_id, post.date)?;
    let counters: Vec<String> = ReactionKind::ALL
        .into_iter()
        .map(|kind| format!("{} {}", kind.emoji(), post.reactions.get(kind)))
        .collect();
    writeln!(out, "{}", counters.join("  "))
}
