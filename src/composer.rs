use super::*;

const COMMENT_FORM_STATUS: &str = "enter post comment • esc cancel";
const POST_FORM_STATUS: &str = "tab/↓ next field • shift+tab/↑ previous field • enter create post • esc cancel";

pub(crate) enum Draft {
  Comment(CommentDraft),
  Post(PostDraft),
  Topic(TopicInput),
}

/// Text entry that temporarily owns the keyboard: a topic prompt on the
/// status line, or a comment/post form drawn over the list.
pub(crate) struct Composer {
  pub(crate) draft: Draft,
  pub(crate) message_backup: String,
}

impl Composer {
  fn comment_lines(draft: &CommentDraft, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let text = format!("{}█", draft.buffer);

    for line in wrap_text(&text, width.max(1)) {
      lines.push(Line::from(Span::raw(line)));
    }

    if draft.buffer.is_empty() {
      lines.push(Line::from(Span::styled(
        "What are your thoughts?",
        Style::default().fg(Color::DarkGray),
      )));
    }

    if let Some(error) = draft.error {
      lines.push(Line::from(""));
      lines.push(Line::from(Span::styled(
        format!("- {error}"),
        Style::default().fg(Color::Red),
      )));
    }

    lines
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let area = frame.area();

    let width = usize::from(Self::popup_width(area).saturating_sub(2));

    let (title, lines) = match &self.draft {
      Draft::Comment(draft) => ("Comment", Self::comment_lines(draft, width)),
      Draft::Post(draft) => (
        draft
          .scope()
          .map_or("Create Post", |_| "Create Post in subreddit"),
        Self::post_lines(draft),
      ),
      Draft::Topic(_) => return,
    };

    let height = u16::try_from(lines.len().saturating_add(2)).unwrap_or(u16::MAX);

    let popup = centered_rect(area, Self::popup_width(area), height);

    frame.render_widget(Clear, popup);

    let form = Paragraph::new(lines)
      .block(Block::default().title(title).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(form, popup);
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => return Command::CancelInput,
      KeyCode::Enter => return Command::SubmitInput,
      _ => {}
    }

    match &mut self.draft {
      Draft::Comment(draft) => {
        Self::edit_buffer(&mut draft.buffer, key);
      }
      Draft::Post(draft) => match key.code {
        KeyCode::Tab | KeyCode::Down => draft.focus_next(),
        KeyCode::BackTab | KeyCode::Up => draft.focus_previous(),
        KeyCode::Backspace => draft.pop(),
        KeyCode::Char(ch) if Self::is_plain(key) => draft.push(ch),
        _ => {}
      },
      Draft::Topic(input) => {
        Self::edit_buffer(&mut input.buffer, key);
      }
    }

    Command::None
  }

  fn edit_buffer(buffer: &mut String, key: KeyEvent) {
    match key.code {
      KeyCode::Backspace => {
        buffer.pop();
      }
      KeyCode::Char(ch) if Self::is_plain(key) => buffer.push(ch),
      _ => {}
    }
  }

  fn is_plain(key: KeyEvent) -> bool {
    !(key.modifiers.contains(KeyModifiers::CONTROL)
      || key.modifiers.contains(KeyModifiers::ALT)
      || key.modifiers.contains(KeyModifiers::SUPER))
  }

  pub(crate) fn new(draft: Draft, message_backup: String) -> Self {
    Self {
      draft,
      message_backup,
    }
  }

  fn popup_width(area: Rect) -> u16 {
    area.width.saturating_sub(2).clamp(1, 80)
  }

  fn post_lines(draft: &PostDraft) -> Vec<Line<'static>> {
    let focus = draft.focus();

    let mut lines = Vec::new();

    for field in draft.fields() {
      let label_style = if field == focus {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::White)
      };

      let value = draft.value(field);

      let (text, style) = if value.is_empty() {
        let placeholder = if field == PostField::Title {
          draft.title_prompt()
        } else {
          field.placeholder().to_string()
        };

        (placeholder, Style::default().fg(Color::DarkGray))
      } else {
        (value.to_string(), Style::default())
      };

      let cursor = if field == focus { "█" } else { "" };

      lines.push(Line::from(vec![
        Span::styled(format!("{:<11}", format!("{}:", field.label())), label_style),
        Span::styled(text, style),
        Span::raw(cursor),
      ]));
    }

    if !draft.errors().is_empty() {
      lines.push(Line::from(""));

      for error in draft.errors() {
        lines.push(Line::from(Span::styled(
          format!("- {error}"),
          Style::default().fg(Color::Red),
        )));
      }
    }

    lines
  }

  pub(crate) fn status(&self) -> String {
    match &self.draft {
      Draft::Comment(_) => COMMENT_FORM_STATUS.to_string(),
      Draft::Post(_) => POST_FORM_STATUS.to_string(),
      Draft::Topic(input) => truncate(&input.prompt(), 80),
    }
  }
}
