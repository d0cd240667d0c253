#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Category {
  Communities,
  Home,
  Topic(String),
}

impl Category {
  pub(crate) fn defaults() -> [Category; 2] {
    [Category::Home, Category::Communities]
  }

  pub(crate) fn label(&self) -> String {
    match self {
      Category::Communities => "communities".to_string(),
      Category::Home => "home".to_string(),
      Category::Topic(topic) => format!("r/{topic}"),
    }
  }

  pub(crate) fn topic(&self) -> Option<&str> {
    match self {
      Category::Topic(topic) => Some(topic),
      _ => None,
    }
  }
}
