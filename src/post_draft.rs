use super::*;

pub(crate) const SUBREDDIT_REQUIRED: &str = "A Subreddit is required";
pub(crate) const TITLE_REQUIRED: &str = "A Post Title is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PostField {
  Body,
  Image,
  Subreddit,
  Title,
}

impl PostField {
  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Body => "Body",
      Self::Image => "Image URL",
      Self::Subreddit => "Subreddit",
      Self::Title => "Title",
    }
  }

  pub(crate) fn placeholder(self) -> &'static str {
    match self {
      Self::Body => "Text (optional)",
      Self::Image => "Optional...",
      Self::Subreddit => "i.e. reactjs",
      Self::Title => "Create a post by entering a title",
    }
  }
}

/// A validated post, ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewPost {
  pub(crate) body: String,
  pub(crate) image: String,
  pub(crate) title: String,
  pub(crate) topic: String,
  pub(crate) username: String,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct PostDraft {
  body: String,
  errors: Vec<&'static str>,
  focus: usize,
  image: String,
  scope: Option<String>,
  subreddit: String,
  title: String,
}

impl PostDraft {
  pub(crate) fn errors(&self) -> &[&'static str] {
    &self.errors
  }

  fn field_mut(&mut self, field: PostField) -> &mut String {
    match field {
      PostField::Body => &mut self.body,
      PostField::Image => &mut self.image,
      PostField::Subreddit => &mut self.subreddit,
      PostField::Title => &mut self.title,
    }
  }

  pub(crate) fn fields(&self) -> Vec<PostField> {
    if self.scope.is_some() {
      vec![PostField::Title, PostField::Body, PostField::Image]
    } else {
      vec![
        PostField::Title,
        PostField::Body,
        PostField::Subreddit,
        PostField::Image,
      ]
    }
  }

  pub(crate) fn focus(&self) -> PostField {
    let fields = self.fields();
    fields[self.focus.min(fields.len() - 1)]
  }

  pub(crate) fn focus_next(&mut self) {
    self.focus = (self.focus + 1) % self.fields().len();
  }

  pub(crate) fn focus_previous(&mut self) {
    let count = self.fields().len();
    self.focus = (self.focus + count - 1) % count;
  }

  pub(crate) fn new(scope: Option<String>) -> Self {
    Self {
      scope,
      ..Self::default()
    }
  }

  pub(crate) fn pop(&mut self) {
    let field = self.focus();
    self.field_mut(field).pop();
  }

  pub(crate) fn push(&mut self, ch: char) {
    let field = self.focus();
    self.field_mut(field).push(ch);
  }

  pub(crate) fn scope(&self) -> Option<&str> {
    self.scope.as_deref()
  }

  pub(crate) fn title_prompt(&self) -> String {
    match &self.scope {
      Some(topic) => format!("Create a post in r/{topic}"),
      None => PostField::Title.placeholder().to_string(),
    }
  }

  /// Validates the form. On failure the missing fields are remembered so
  /// the form can show them.
  pub(crate) fn validate(&mut self, username: &str) -> Result<NewPost, Vec<&'static str>> {
    let title = self.title.trim();

    let topic = self
      .scope
      .as_deref()
      .unwrap_or(&self.subreddit)
      .trim()
      .trim_start_matches("r/");

    let mut errors = Vec::new();

    if title.is_empty() {
      errors.push(TITLE_REQUIRED);
    }

    if topic.is_empty() {
      errors.push(SUBREDDIT_REQUIRED);
    }

    if !errors.is_empty() {
      self.errors.clone_from(&errors);
      return Err(errors);
    }

    let post = NewPost {
      body: self.body.trim().to_string(),
      image: self.image.trim().to_string(),
      title: title.to_string(),
      topic: topic.to_string(),
      username: username.to_string(),
    };

    self.errors.clear();

    Ok(post)
  }

  pub(crate) fn value(&self, field: PostField) -> &str {
    match field {
      PostField::Body => &self.body,
      PostField::Image => &self.image,
      PostField::Subreddit => &self.subreddit,
      PostField::Title => &self.title,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn type_text(draft: &mut PostDraft, text: &str) {
    for ch in text.chars() {
      draft.push(ch);
    }
  }

  #[test]
  fn empty_form_reports_every_missing_field() {
    let mut draft = PostDraft::new(None);

    assert_eq!(
      draft.validate("alice"),
      Err(vec![TITLE_REQUIRED, SUBREDDIT_REQUIRED])
    );

    assert_eq!(draft.errors(), &[TITLE_REQUIRED, SUBREDDIT_REQUIRED]);
  }

  #[test]
  fn scoped_form_does_not_ask_for_subreddit() {
    let mut draft = PostDraft::new(Some("rust".to_string()));

    assert_eq!(
      draft.fields(),
      vec![PostField::Title, PostField::Body, PostField::Image]
    );

    type_text(&mut draft, "Hello");

    assert_eq!(
      draft.validate("alice"),
      Ok(NewPost {
        body: String::new(),
        image: String::new(),
        title: "Hello".to_string(),
        topic: "rust".to_string(),
        username: "alice".to_string(),
      })
    );
  }

  #[test]
  fn typing_goes_to_the_focused_field() {
    let mut draft = PostDraft::new(None);

    type_text(&mut draft, "Title");
    draft.focus_next();
    type_text(&mut draft, " body text ");
    draft.focus_next();
    type_text(&mut draft, "r/rustlang");
    draft.pop();
    draft.focus_next();
    type_text(&mut draft, "https://example.com/cat.png");

    assert_eq!(draft.focus(), PostField::Image);

    let post = draft.validate("bob").unwrap();

    assert_eq!(post.title, "Title");
    assert_eq!(post.body, "body text");
    assert_eq!(post.topic, "rustlan");
    assert_eq!(post.image, "https://example.com/cat.png");
    assert!(draft.errors().is_empty());
  }

  #[test]
  fn focus_wraps_in_both_directions() {
    let mut draft = PostDraft::new(None);

    draft.focus_previous();
    assert_eq!(draft.focus(), PostField::Image);

    draft.focus_next();
    assert_eq!(draft.focus(), PostField::Title);
  }

  #[test]
  fn title_prompt_mentions_scope() {
    assert_eq!(
      PostDraft::new(Some("rust".to_string())).title_prompt(),
      "Create a post in r/rust"
    );

    assert_eq!(
      PostDraft::new(None).title_prompt(),
      "Create a post by entering a title"
    );
  }
}
