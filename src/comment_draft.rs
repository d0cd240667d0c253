use super::*;

pub(crate) const COMMENT_REQUIRED: &str = "A comment cannot be empty";

/// A validated comment, ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewComment {
  pub(crate) created_at: DateTime<Utc>,
  pub(crate) post_id: String,
  pub(crate) text: String,
  pub(crate) username: String,
}

#[derive(Clone, Debug)]
pub(crate) struct CommentDraft {
  pub(crate) buffer: String,
  pub(crate) error: Option<&'static str>,
  pub(crate) post_id: String,
}

impl CommentDraft {
  pub(crate) fn new(post_id: String) -> Self {
    Self {
      buffer: String::new(),
      error: None,
      post_id,
    }
  }

  pub(crate) fn validate(
    &mut self,
    username: &str,
    now: DateTime<Utc>,
  ) -> Option<NewComment> {
    let text = self.buffer.trim();

    if text.is_empty() {
      self.error = Some(COMMENT_REQUIRED);
      return None;
    }

    let comment = NewComment {
      created_at: now,
      post_id: self.post_id.clone(),
      text: text.to_string(),
      username: username.to_string(),
    };

    self.error = None;

    Some(comment)
  }
}
