use super::*;

pub(crate) enum Event {
  CommentCreated {
    post_id: String,
    result: Result<Option<Post>>,
  },
  PostCreated {
    result: Result<Post>,
  },
  PostLoaded {
    request_id: u64,
    result: Result<Option<Post>>,
  },
  TabItems {
    request_id: u64,
    result: Result<Vec<ListEntry>>,
    tab_index: usize,
  },
  Votes {
    post_id: String,
    result: Result<Vec<Vote>>,
  },
}
