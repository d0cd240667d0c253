use super::*;

pub(crate) enum Mode {
  List(ListView<ListEntry>),
  Post(PostView),
}

impl Mode {
  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    match self {
      Mode::List(_) => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('/') => Command::StartTopic,
        KeyCode::Left | KeyCode::Char('h') => Command::SwitchTabLeft,
        KeyCode::Right | KeyCode::Char('l') => Command::SwitchTabRight,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageDown
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageUp
        }
        KeyCode::Home => Command::SelectFirst,
        KeyCode::End => Command::SelectLast,
        KeyCode::Enter => Command::OpenSelected,
        KeyCode::Char('o' | 'O') => Command::OpenCurrentInBrowser,
        KeyCode::Char('u') => Command::Vote(VoteDirection::Up),
        KeyCode::Char('d') => Command::Vote(VoteDirection::Down),
        KeyCode::Char('n') => Command::ComposePost,
        KeyCode::Char('r') => Command::Refresh,
        _ => Command::None,
      },
      Mode::Post(view) => match key.code {
        KeyCode::Char('q' | 'Q') => Command::Quit,
        KeyCode::Esc => Command::ClosePost,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('o' | 'O') => Command::OpenCurrentInBrowser,
        KeyCode::Down | KeyCode::Char('j') => {
          view.select_next();
          Command::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
          view.select_previous();
          Command::None
        }
        KeyCode::PageDown => {
          view.page_down(page);
          Command::None
        }
        KeyCode::PageUp => {
          view.page_up(page);
          Command::None
        }
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          view.page_down(page);
          Command::None
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          view.page_up(page);
          Command::None
        }
        KeyCode::Home => {
          view.select_index_at(0);
          Command::None
        }
        KeyCode::End => {
          view.select_last();
          Command::None
        }
        KeyCode::Char('u') => Command::Vote(VoteDirection::Up),
        KeyCode::Char('d') => Command::Vote(VoteDirection::Down),
        KeyCode::Char('c') => Command::ComposeComment,
        KeyCode::Char('n') => Command::ComposePost,
        KeyCode::Char('r') => Command::Refresh,
        _ => Command::None,
      },
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    match self {
      Mode::List(view) => view.set_offset(offset),
      Mode::Post(view) => view.offset = offset,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn vote_keys_map_to_directions_in_both_modes() {
    let mut list = Mode::List(ListView::default());

    assert_eq!(
      list.handle_key(press(KeyCode::Char('u')), 10),
      Command::Vote(VoteDirection::Up)
    );

    assert_eq!(
      list.handle_key(press(KeyCode::Char('d')), 10),
      Command::Vote(VoteDirection::Down)
    );

    assert_eq!(
      list.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), 10),
      Command::PageDown
    );
  }

  #[test]
  fn escape_leaves_post_view_but_quits_list() {
    let post = serde_json::from_str::<Post>(r#"{"id": 1, "title": "t", "username": "u"}"#)
      .unwrap();

    let mut view = Mode::Post(PostView::new(post));
    assert_eq!(view.handle_key(press(KeyCode::Esc), 10), Command::ClosePost);
    assert_eq!(
      view.handle_key(press(KeyCode::Char('c')), 10),
      Command::ComposeComment
    );

    let mut list = Mode::List(ListView::default());
    assert_eq!(list.handle_key(press(KeyCode::Esc), 10), Command::Quit);
  }
}
