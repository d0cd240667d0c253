use super::*;

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// A status-line notice. Once it expires the status line falls back to
/// whatever was showing before the first notice in a run of them.
#[derive(Clone, Debug)]
pub(crate) struct Notification {
  expires_at: Instant,
  original: String,
  text: String,
}

impl Notification {
  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String, original: String, now: Instant) -> Self {
    Self {
      expires_at: now + NOTIFICATION_TTL,
      original,
      text,
    }
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }

  /// A follow-up notice that still reverts to this one's original status.
  pub(crate) fn replace(&self, text: String, now: Instant) -> Self {
    Self::new(text, self.original.clone(), now)
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expires_after_ttl() {
    let now = Instant::now();

    let notification = Notification::new("saved".into(), "idle".into(), now);

    assert!(!notification.is_expired_at(now));
    assert!(notification.is_expired_at(now + NOTIFICATION_TTL));
  }

  #[test]
  fn replacement_keeps_first_original() {
    let now = Instant::now();

    let first = Notification::new("posting".into(), "idle".into(), now);
    let second = first.replace("posted".into(), now + Duration::from_secs(1));

    assert_eq!(second.text(), "posted");
    assert_eq!(second.original(), "idle");
    assert!(!second.is_expired_at(now + NOTIFICATION_TTL));
  }
}
