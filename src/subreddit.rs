use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Subreddit {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) created_at: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  pub(crate) topic: String,
}
