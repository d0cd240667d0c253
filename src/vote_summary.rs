use super::*;

/// What a post's vote list means to the current user: their own vote and
/// the count shown next to the arrows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct VoteSummary {
  pub(crate) state: VoteState,
  pub(crate) tally: i64,
}

impl VoteSummary {
  /// The first vote from `username` in list order decides the state.
  ///
  /// A non-empty list whose votes cancel out never displays 0: the tally
  /// takes the sign of the first vote instead.
  pub(crate) fn new(votes: &[Vote], username: Option<&str>) -> Self {
    let state = username
      .and_then(|name| votes.iter().find(|vote| vote.username == name))
      .map_or(VoteState::Unvoted, |vote| vote.direction().into());

    let sum = votes
      .iter()
      .map(|vote| vote.direction().weight())
      .sum::<i64>();

    let tally = match votes.first() {
      Some(first) if sum == 0 => first.direction().weight(),
      _ => sum,
    };

    Self { state, tally }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn vote(username: &str, upvote: bool) -> Vote {
    Vote {
      created_at: None,
      id: format!("{username}-{upvote}"),
      post_id: Some("1".to_string()),
      upvote,
      username: username.to_string(),
    }
  }

  #[test]
  fn empty_list_has_zero_tally_and_no_vote() {
    assert_eq!(
      VoteSummary::new(&[], Some("alice")),
      VoteSummary {
        state: VoteState::Unvoted,
        tally: 0,
      }
    );
  }

  #[test]
  fn single_upvote_from_current_user() {
    assert_eq!(
      VoteSummary::new(&[vote("alice", true)], Some("alice")),
      VoteSummary {
        state: VoteState::Upvoted,
        tally: 1,
      }
    );
  }

  #[test]
  fn cancelled_votes_take_sign_of_first_upvote() {
    let votes = [vote("alice", true), vote("bob", false)];

    assert_eq!(
      VoteSummary::new(&votes, Some("alice")),
      VoteSummary {
        state: VoteState::Upvoted,
        tally: 1,
      }
    );
  }

  #[test]
  fn cancelled_votes_take_sign_of_first_downvote() {
    let votes = [vote("alice", false), vote("bob", true)];

    assert_eq!(
      VoteSummary::new(&votes, Some("alice")),
      VoteSummary {
        state: VoteState::Downvoted,
        tally: -1,
      }
    );
  }

  #[test]
  fn first_vote_from_user_wins_over_duplicates() {
    let votes = [
      vote("bob", true),
      vote("alice", false),
      vote("alice", true),
      vote("alice", true),
    ];

    let summary = VoteSummary::new(&votes, Some("alice"));

    assert_eq!(summary.state, VoteState::Downvoted);
    assert_eq!(summary.tally, 2);
  }

  #[test]
  fn signed_out_user_has_no_vote_state() {
    let votes = [vote("alice", true), vote("bob", true)];

    assert_eq!(
      VoteSummary::new(&votes, None),
      VoteSummary {
        state: VoteState::Unvoted,
        tally: 2,
      }
    );
  }

  #[test]
  fn user_without_a_vote_is_unvoted() {
    let votes = [vote("bob", false), vote("carol", false)];

    let summary = VoteSummary::new(&votes, Some("alice"));

    assert_eq!(summary.state, VoteState::Unvoted);
    assert_eq!(summary.tally, -2);
  }
}
