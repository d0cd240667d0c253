use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
  subreddit_limit: usize,
}

impl App {
  fn comment_list_item(
    comment: &Comment,
    width: u16,
    now: DateTime<Utc>,
  ) -> ListItem<'static> {
    let mut header = format!("u/{}", comment.username);

    if let Some(age) = time_ago(comment.created_at.as_deref(), now) {
      header.push_str(" • ");
      header.push_str(&age);
    }

    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(header, Style::default().fg(Color::White)),
    ])];

    let wrap_width = usize::from(width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    for line in wrap_text(&comment.text, wrap_width) {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(line, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let now = Utc::now();

    let active_tab = self.state.resolved_active_tab().unwrap_or(0);

    let tab_titles: Vec<Line> = self
      .state
      .tabs()
      .iter()
      .map(|tab| Line::from(tab.label.to_uppercase()))
      .collect();

    let tabs_widget = Tabs::new(tab_titles)
      .select(active_tab)
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    let is_loading = self
      .state
      .tab(active_tab)
      .is_some_and(|tab| tab.loading.is_some());

    let session = self.state.session().clone();

    let (list_area, list_items, selected_index, offset) =
      match self.state.mode() {
        Mode::List(view) => {
          let list_items: Vec<ListItem> = if view.is_empty() {
            let text = if is_loading {
              LOADING_ENTRIES_STATUS
            } else {
              "Nothing to show. Try another tab."
            };

            vec![ListItem::new(Line::from(vec![
              Span::raw(BASE_INDENT),
              Span::raw(text),
            ]))]
          } else {
            view
              .items()
              .iter()
              .map(|entry| Self::entry_list_item(entry, &session, now))
              .collect()
          };

          (layout[1], list_items, view.selected_index(), view.offset())
        }
        Mode::Post(view) => {
          let header = Self::post_header(&view.post, &session, layout[1].width, now);

          let header_height = u16::try_from(header.len())
            .unwrap_or(u16::MAX)
            .min(layout[1].height / 2);

          let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header_height), Constraint::Min(0)])
            .split(layout[1]);

          frame.render_widget(
            Paragraph::new(header).wrap(Wrap { trim: false }),
            sections[0],
          );

          let list_items: Vec<ListItem> = if view.post.comments.is_empty() {
            vec![ListItem::new(Line::from(vec![
              Span::raw(BASE_INDENT),
              Span::raw("No comments yet."),
            ]))]
          } else {
            view
              .post
              .comments
              .iter()
              .map(|comment| {
                Self::comment_list_item(comment, sections[1].width, now)
              })
              .collect()
          };

          let offset = view.offset.min(view.selected.unwrap_or(0));

          (sections[1], list_items, view.selected, offset)
        }
      };

    self.state.set_list_height(usize::from(list_area.height));

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, list_area, &mut list_state);

    self.state.mode_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    if let Some(composer) = self.state.composer() {
      composer.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn entry_list_item(
    entry: &ListEntry,
    session: &Session,
    now: DateTime<Utc>,
  ) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(entry.title(), Style::default().fg(Color::White)),
    ])];

    let detail = entry.detail(session, now);

    if !detail.is_empty() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::CreateComment { comment } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentCreated {
            post_id: comment.post_id.clone(),
            result: client.create_comment(&comment).await,
          });
        });
      }
      Effect::CreatePost { post } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::PostCreated {
            result: client.create_post(&post).await,
          });
        });
      }
      Effect::FetchPost {
        post_id,
        request_id,
      } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::PostLoaded {
            request_id,
            result: client.fetch_post(&post_id).await,
          });
        });
      }
      Effect::FetchTabItems {
        category,
        request_id,
        tab_index,
      } => {
        let subreddit_limit = self.subreddit_limit;

        self.handle.spawn(async move {
          let _ = sender.send(Event::TabItems {
            request_id,
            result: client
              .fetch_category_items(&category, subreddit_limit)
              .await,
            tab_index,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.notify(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open link");

          self
            .state
            .notify(format!("Could not open link: {error}"));
        }
      },
      Effect::SubmitVote { vote } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Votes {
            post_id: vote.post_id.clone(),
            result: client.submit_vote(&vote).await,
          });
        });
      }
    }
  }

  pub(crate) fn new(client: Client, state: State, subreddit_limit: usize) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
      subreddit_limit,
    }
  }

  fn post_header(
    post: &Post,
    session: &Session,
    width: u16,
    now: DateTime<Utc>,
  ) -> Vec<Line<'static>> {
    let summary = post.summary(session);

    let mut byline = match post.topic() {
      Some(topic) => format!("r/{topic} • u/{}", post.username),
      None => format!("u/{}", post.username),
    };

    if let Some(age) = time_ago(post.created_at.as_deref(), now) {
      byline.push_str(" • ");
      byline.push_str(&age);
    }

    let mut lines = vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(byline, Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          post.title.clone(),
          Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        ),
      ]),
    ];

    let wrap_width = usize::from(width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    for line in wrap_text(post.body(), wrap_width) {
      lines.push(Line::from(vec![Span::raw(BASE_INDENT), Span::raw(line)]));
    }

    if let Some(url) = post.image_url() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(url.to_string(), Style::default().fg(Color::Blue)),
      ]));
    }

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        format!(
          "{} {} • {}",
          summary.state.marker(),
          format_tally(summary.tally),
          format_comments(post.comments.len())
        ),
        Style::default().fg(Color::Cyan),
      ),
    ]));

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    lines
  }

  fn process_pending_events(&mut self) {
    self.state.expire_notification();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }

    for effect in self.state.take_pending_effects() {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.composer_command(key) {
        command
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.notify(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
