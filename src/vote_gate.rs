use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum VoteDecision {
  SignInRequired,
  Submit(NewVote),
  Unchanged,
}

impl VoteDecision {
  pub(crate) fn new(
    session: &Session,
    current: VoteState,
    direction: VoteDirection,
    post_id: &str,
    now: DateTime<Utc>,
  ) -> Self {
    let Some(username) = session.username() else {
      return Self::SignInRequired;
    };

    if current.direction() == Some(direction) {
      return Self::Unchanged;
    }

    Self::Submit(NewVote {
      created_at: now,
      direction,
      post_id: post_id.to_string(),
      username: username.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn alice() -> Session {
    Session::new(Some("alice".to_string()))
  }

  fn now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
  }

  #[test]
  fn signed_out_votes_require_sign_in() {
    for current in [VoteState::Unvoted, VoteState::Upvoted] {
      assert_eq!(
        VoteDecision::new(
          &Session::default(),
          current,
          VoteDirection::Up,
          "1",
          now()
        ),
        VoteDecision::SignInRequired
      );
    }
  }

  #[test]
  fn repeating_current_direction_is_suppressed() {
    assert_eq!(
      VoteDecision::new(&alice(), VoteState::Upvoted, VoteDirection::Up, "1", now()),
      VoteDecision::Unchanged
    );

    assert_eq!(
      VoteDecision::new(
        &alice(),
        VoteState::Downvoted,
        VoteDirection::Down,
        "1",
        now()
      ),
      VoteDecision::Unchanged
    );
  }

  #[test]
  fn new_or_flipped_votes_are_submitted() {
    let expected = NewVote {
      created_at: now(),
      direction: VoteDirection::Down,
      post_id: "7".to_string(),
      username: "alice".to_string(),
    };

    assert_eq!(
      VoteDecision::new(
        &alice(),
        VoteState::Upvoted,
        VoteDirection::Down,
        "7",
        now()
      ),
      VoteDecision::Submit(expected.clone())
    );

    assert_eq!(
      VoteDecision::new(
        &alice(),
        VoteState::Unvoted,
        VoteDirection::Down,
        "7",
        now()
      ),
      VoteDecision::Submit(expected)
    );
  }
}
