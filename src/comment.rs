use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Comment {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) created_at: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) post_id: Option<String>,
  #[serde(default)]
  pub(crate) text: String,
  pub(crate) username: String,
}
