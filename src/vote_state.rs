use super::*;

/// The signed-in user's own vote on a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum VoteState {
  Downvoted,
  #[default]
  Unvoted,
  Upvoted,
}

impl From<VoteDirection> for VoteState {
  fn from(direction: VoteDirection) -> Self {
    match direction {
      VoteDirection::Down => Self::Downvoted,
      VoteDirection::Up => Self::Upvoted,
    }
  }
}

impl VoteState {
  pub(crate) fn direction(self) -> Option<VoteDirection> {
    match self {
      Self::Downvoted => Some(VoteDirection::Down),
      Self::Unvoted => None,
      Self::Upvoted => Some(VoteDirection::Up),
    }
  }

  pub(crate) fn marker(self) -> &'static str {
    match self {
      Self::Downvoted => "▼",
      Self::Unvoted => "·",
      Self::Upvoted => "▲",
    }
  }
}
