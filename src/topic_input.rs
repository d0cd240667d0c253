pub(crate) struct TopicInput {
  pub(crate) buffer: String,
}

impl TopicInput {
  pub(crate) fn new() -> Self {
    Self {
      buffer: String::new(),
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Go to r/{}", self.buffer)
  }

  pub(crate) fn topic(&self) -> Option<String> {
    let topic = self.buffer.trim().trim_start_matches("r/").trim();

    (!topic.is_empty()).then(|| topic.to_string())
  }
}
