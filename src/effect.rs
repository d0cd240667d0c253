use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  CreateComment {
    comment: NewComment,
  },
  CreatePost {
    post: NewPost,
  },
  FetchPost {
    post_id: String,
    request_id: u64,
  },
  FetchTabItems {
    category: Category,
    request_id: u64,
    tab_index: usize,
  },
  OpenUrl {
    url: String,
  },
  SubmitVote {
    vote: NewVote,
  },
}
