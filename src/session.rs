/// Identity handed to us by the external session provider. Only the
/// username is ever consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Session {
  username: Option<String>,
}

impl Session {
  pub(crate) fn is_signed_in(&self) -> bool {
    self.username.is_some()
  }

  pub(crate) fn new(username: Option<String>) -> Self {
    Self {
      username: username
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty()),
    }
  }

  pub(crate) fn username(&self) -> Option<&str> {
    self.username.as_deref()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_usernames_are_signed_out() {
    assert!(!Session::new(None).is_signed_in());
    assert!(!Session::new(Some("   ".to_string())).is_signed_in());
    assert!(!Session::default().is_signed_in());
  }

  #[test]
  fn usernames_are_trimmed() {
    let session = Session::new(Some(" alice ".to_string()));
    assert_eq!(session.username(), Some("alice"));
  }
}
