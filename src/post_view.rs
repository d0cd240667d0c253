use super::*;

/// A single post with its flat comment list. Selection walks the comments.
pub(crate) struct PostView {
  pub(crate) offset: usize,
  pub(crate) post: Post,
  pub(crate) selected: Option<usize>,
}

impl PostView {
  fn clamp_selection(&mut self) {
    let count = self.post.comments.len();

    self.selected = match (self.selected, count) {
      (_, 0) => None,
      (Some(selected), _) => Some(selected.min(count - 1)),
      (None, _) => Some(0),
    };
  }

  pub(crate) fn link(&self) -> Option<String> {
    self.post.image_url().map(str::to_string)
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let count = self.post.comments.len();

    if count == 0 {
      self.selected = None;
      return;
    }

    let current = self.selected.unwrap_or(0);
    let max_index = count - 1;

    let target = if delta >= 0 {
      let delta_usize = usize::try_from(delta).unwrap_or(usize::MAX);
      current.saturating_add(delta_usize).min(max_index)
    } else {
      let magnitude = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      current.saturating_sub(magnitude)
    };

    self.selected = Some(target);
  }

  pub(crate) fn new(post: Post) -> Self {
    let mut view = Self {
      offset: 0,
      post,
      selected: None,
    };

    view.clamp_selection();

    view
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(delta);
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(-delta);
  }

  pub(crate) fn post_id(&self) -> &str {
    &self.post.id
  }

  /// Swaps in a refetched copy of the post, keeping the selection where it
  /// was when the comment still exists.
  pub(crate) fn replace_post(&mut self, post: Post) {
    let selected_id = self
      .selected
      .and_then(|index| self.post.comments.get(index))
      .map(|comment| comment.id.clone());

    self.post = post;

    self.selected = selected_id.and_then(|id| {
      self
        .post
        .comments
        .iter()
        .position(|comment| comment.id == id)
    });

    self.clamp_selection();
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    if self.post.comments.is_empty() {
      self.selected = None;
    } else {
      self.selected = Some(pos.min(self.post.comments.len() - 1));
    }
  }

  pub(crate) fn select_last(&mut self) {
    self.select_index_at(usize::MAX);
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn set_votes(&mut self, votes: Vec<Vote>) {
    self.post.votes = votes;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(id: &str) -> Comment {
    Comment {
      created_at: None,
      id: id.to_string(),
      post_id: Some("1".to_string()),
      text: format!("comment {id}"),
      username: format!("user{id}"),
    }
  }

  fn post_with(comments: Vec<Comment>) -> Post {
    Post {
      body: Some("body".to_string()),
      comments,
      created_at: None,
      id: "1".to_string(),
      image: None,
      subreddit: None,
      subreddit_id: None,
      title: "title".to_string(),
      username: "alice".to_string(),
      votes: Vec::new(),
    }
  }

  #[test]
  fn new_selects_first_comment_when_present() {
    assert_eq!(PostView::new(post_with(vec![comment("a")])).selected, Some(0));
    assert_eq!(PostView::new(post_with(Vec::new())).selected, None);
  }

  #[test]
  fn movement_is_clamped_to_comment_bounds() {
    let mut view =
      PostView::new(post_with(vec![comment("a"), comment("b"), comment("c")]));

    view.select_previous();
    assert_eq!(view.selected, Some(0));

    view.page_down(10);
    assert_eq!(view.selected, Some(2));

    view.select_next();
    assert_eq!(view.selected, Some(2));

    view.page_up(2);
    assert_eq!(view.selected, Some(1));

    view.select_last();
    assert_eq!(view.selected, Some(2));
  }

  #[test]
  fn replace_post_keeps_selected_comment() {
    let mut view = PostView::new(post_with(vec![comment("a"), comment("b")]));
    view.select_index_at(1);

    view.replace_post(post_with(vec![comment("z"), comment("a"), comment("b")]));

    assert_eq!(view.selected, Some(2));
  }

  #[test]
  fn replace_post_falls_back_when_comment_disappears() {
    let mut view = PostView::new(post_with(vec![comment("a"), comment("b")]));
    view.select_index_at(1);

    view.replace_post(post_with(vec![comment("c")]));

    assert_eq!(view.selected, Some(0));
  }
}
