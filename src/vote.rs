use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Vote {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) created_at: Option<String>,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) post_id: Option<String>,
  pub(crate) upvote: bool,
  pub(crate) username: String,
}

impl Vote {
  pub(crate) fn direction(&self) -> VoteDirection {
    VoteDirection::from(self.upvote)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VoteDirection {
  Down,
  Up,
}

impl From<bool> for VoteDirection {
  fn from(upvote: bool) -> Self {
    if upvote { Self::Up } else { Self::Down }
  }
}

impl VoteDirection {
  pub(crate) fn is_up(self) -> bool {
    matches!(self, Self::Up)
  }

  pub(crate) fn weight(self) -> i64 {
    match self {
      Self::Down => -1,
      Self::Up => 1,
    }
  }
}

/// A vote about to be inserted through the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewVote {
  pub(crate) created_at: DateTime<Utc>,
  pub(crate) direction: VoteDirection,
  pub(crate) post_id: String,
  pub(crate) username: String,
}
