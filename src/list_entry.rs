use super::*;

#[derive(Clone, Debug)]
pub(crate) enum ListEntry {
  Post(Post),
  Subreddit { rank: usize, subreddit: Subreddit },
}

impl ListEntry {
  pub(crate) fn detail(&self, session: &Session, now: DateTime<Utc>) -> String {
    match self {
      ListEntry::Post(post) => {
        let summary = post.summary(session);

        let mut parts = Vec::new();

        if let Some(topic) = post.topic() {
          parts.push(format!("r/{topic}"));
        }

        parts.push(format!("u/{}", post.username));

        if let Some(ago) = time_ago(post.created_at.as_deref(), now) {
          parts.push(ago);
        }

        parts.push(format!(
          "{} {}",
          summary.state.marker(),
          format_tally(summary.tally)
        ));

        parts.push(format_comments(post.comments.len()));

        parts.join(" • ")
      }
      ListEntry::Subreddit { subreddit, .. } => {
        time_ago(subreddit.created_at.as_deref(), now)
          .map_or_else(String::new, |ago| format!("created {ago}"))
      }
    }
  }

  pub(crate) fn from_posts(posts: Vec<Post>) -> Vec<ListEntry> {
    posts.into_iter().map(ListEntry::Post).collect()
  }

  pub(crate) fn from_subreddits(subreddits: Vec<Subreddit>) -> Vec<ListEntry> {
    subreddits
      .into_iter()
      .enumerate()
      .map(|(index, subreddit)| ListEntry::Subreddit {
        rank: index + 1,
        subreddit,
      })
      .collect()
  }

  pub(crate) fn post(&self) -> Option<&Post> {
    match self {
      ListEntry::Post(post) => Some(post),
      ListEntry::Subreddit { .. } => None,
    }
  }

  pub(crate) fn post_mut(&mut self) -> Option<&mut Post> {
    match self {
      ListEntry::Post(post) => Some(post),
      ListEntry::Subreddit { .. } => None,
    }
  }

  pub(crate) fn resolved_url(&self) -> Option<String> {
    self.post().and_then(Post::image_url).map(str::to_string)
  }

  pub(crate) fn title(&self) -> String {
    match self {
      ListEntry::Post(post) if post.title.is_empty() => "Untitled".to_string(),
      ListEntry::Post(post) => post.title.clone(),
      ListEntry::Subreddit { rank, subreddit } => {
        format!("{rank}. r/{}", subreddit.topic)
      }
    }
  }
}
