use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Post {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) body: Option<String>,
  #[serde(default, rename = "comment", deserialize_with = "deserialize_list")]
  pub(crate) comments: Vec<Comment>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) created_at: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) image: Option<String>,
  #[serde(default)]
  pub(crate) subreddit: Option<Subreddit>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) subreddit_id: Option<String>,
  #[serde(default)]
  pub(crate) title: String,
  #[serde(default)]
  pub(crate) username: String,
  #[serde(default, rename = "vote", deserialize_with = "deserialize_list")]
  pub(crate) votes: Vec<Vote>,
}

impl Post {
  pub(crate) fn body(&self) -> &str {
    self.body.as_deref().unwrap_or_default()
  }

  pub(crate) fn image_url(&self) -> Option<&str> {
    self
      .image
      .as_deref()
      .map(str::trim)
      .filter(|url| !url.is_empty())
  }

  pub(crate) fn summary(&self, session: &Session) -> VoteSummary {
    VoteSummary::new(&self.votes, session.username())
  }

  pub(crate) fn topic(&self) -> Option<&str> {
    self.subreddit.as_ref().map(|subreddit| subreddit.topic.as_str())
  }
}
