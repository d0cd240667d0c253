use super::*;

pub(crate) struct Tab {
  pub(crate) category: Category,
  pub(crate) label: String,
  pub(crate) loading: Option<u64>,
}

impl Tab {
  pub(crate) fn new(category: Category) -> Self {
    Self {
      label: category.label(),
      category,
      loading: None,
    }
  }
}
