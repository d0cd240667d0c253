use super::*;

pub(crate) struct State {
  active_tab: usize,
  composer: Option<Composer>,
  help: HelpView,
  list_height: usize,
  message: String,
  mode: Mode,
  next_request_id: u64,
  notification: Option<Notification>,
  pending_effects: Vec<Effect>,
  pending_post: Option<u64>,
  session: Session,
  submitting: Option<Composer>,
  tab_views: Vec<Option<ListView<ListEntry>>>,
  tabs: Vec<Tab>,
  topic_tab_index: Option<usize>,
}

impl State {
  fn active_topic(&self) -> Option<String> {
    self
      .tabs
      .get(self.active_tab)
      .and_then(|tab| tab.category.topic())
      .map(str::to_string)
  }

  fn cancel_input(&mut self) {
    if let Some(composer) = self.composer.take() {
      self.message = composer.message_backup;
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_post(&mut self) {
    self.pending_post = None;
    self.restore_active_list_view();
    self.set_status(LIST_STATUS);
  }

  fn compose_comment(&mut self) {
    let Mode::Post(view) = &self.mode else {
      return;
    };

    if !self.session.is_signed_in() {
      self.notify(SIGN_IN_TO_COMMENT.into());
      return;
    }

    let draft = Draft::Comment(CommentDraft::new(view.post_id().to_string()));

    self.open_composer(draft);
  }

  fn compose_post(&mut self) {
    if !self.session.is_signed_in() {
      self.notify(SIGN_IN_TO_POST.into());
      return;
    }

    let draft = Draft::Post(PostDraft::new(self.active_topic()));

    self.open_composer(draft);
  }

  pub(crate) fn composer(&self) -> Option<&Composer> {
    self.composer.as_ref()
  }

  pub(crate) fn composer_command(&mut self, key: KeyEvent) -> Option<Command> {
    let composer = self.composer.as_mut()?;

    let command = composer.handle_key(key);

    if command == Command::None {
      self.message = composer.status();
    }

    Some(command)
  }

  fn current_entry(&self) -> Option<&ListEntry> {
    self
      .list_view(self.active_tab)
      .and_then(ListView::selected_item)
  }

  fn current_post(&self) -> Option<&Post> {
    match &self.mode {
      Mode::List(view) => view.selected_item().and_then(ListEntry::post),
      Mode::Post(view) => Some(&view.post),
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartTopic => self.start_topic(),
      Command::CancelInput => self.cancel_input(),
      Command::SubmitInput => self.submit_input(),
      Command::SwitchTabLeft => self.switch_tab(-1),
      Command::SwitchTabRight => self.switch_tab(1),
      Command::SelectNext => self.select_relative(1),
      Command::SelectPrevious => self.select_relative(-1),
      Command::PageDown => self.select_relative(self.page_jump()),
      Command::PageUp => self.select_relative(-self.page_jump()),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::OpenSelected => self.open_selected(),
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::ClosePost => self.close_post(),
      Command::ComposeComment => self.compose_comment(),
      Command::ComposePost => self.compose_post(),
      Command::Refresh => self.refresh(),
      Command::Vote(direction) => self.vote(direction),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: self.take_pending_effects(),
      should_exit,
    })
  }

  fn ensure_topic_tab(&mut self, topic: &str) -> usize {
    let category = Category::Topic(topic.to_string());

    if let Some(index) = self.topic_tab_index
      && let Some(tab) = self.tabs.get_mut(index)
    {
      if tab.category != category {
        *tab = Tab::new(category);

        if let Some(view) = self.list_view_mut(index) {
          *view = ListView::default();
        }
      }

      return index;
    }

    let tab_index = self.tabs.len();

    self.tabs.push(Tab::new(category));
    self.tab_views.push(Some(ListView::default()));
    self.topic_tab_index = Some(tab_index);

    tab_index
  }

  pub(crate) fn expire_notification(&mut self) {
    let Some(notification) = &self.notification else {
      return;
    };

    if self.message != notification.text() {
      self.notification = None;
    } else if notification.is_expired_at(Instant::now()) {
      self.message = notification.original().to_string();
      self.notification = None;
    }
  }

  fn fail(&mut self, context: &str, error: &anyhow::Error) {
    tracing::error!("{context}: {error:#}");
    self.notify(GENERIC_FAILURE.into());
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::TabItems {
        request_id,
        result,
        tab_index,
      } => {
        let Some(tab) = self.tabs.get_mut(tab_index) else {
          return;
        };

        if tab.loading != Some(request_id) {
          return;
        }

        tab.loading = None;

        match result {
          Ok(entries) => {
            if let Some(view) = self.list_view_mut(tab_index) {
              view.replace_items(entries);
            }

            if matches!(self.mode, Mode::List(_)) {
              self.set_status(LIST_STATUS);
            }
          }
          Err(error) => self.fail("could not load tab", &error),
        }
      }
      Event::PostLoaded { request_id, result } => {
        if self.pending_post != Some(request_id) {
          return;
        }

        self.pending_post = None;

        match result {
          Ok(Some(post)) => {
            if let Mode::Post(view) = &mut self.mode
              && view.post_id() == post.id
            {
              view.replace_post(post.clone());
              self.set_status(POST_STATUS);
            }

            self.update_cached_posts(&post.id.clone(), |cached| {
              *cached = post.clone();
            });
          }
          Ok(None) => self.notify(POST_NOT_FOUND.into()),
          Err(error) => self.fail("could not load post", &error),
        }
      }
      Event::CommentCreated { post_id, result } => match result {
        Ok(post) => {
          info!(%post_id, "comment created");

          self.take_submitted(|draft| {
            matches!(draft, Draft::Comment(draft) if draft.post_id == post_id)
          });

          self.notify(COMMENT_POSTED.into());

          if let Some(post) = post {
            if let Mode::Post(view) = &mut self.mode
              && view.post_id() == post_id
            {
              view.replace_post(post.clone());
            }

            self.update_cached_posts(&post_id, |cached| *cached = post.clone());
          }
        }
        Err(error) => {
          self.reopen_submitted(|draft| {
            matches!(draft, Draft::Comment(draft) if draft.post_id == post_id)
          });
          self.fail("could not create comment", &error);
        }
      },
      Event::PostCreated { result } => match result {
        Ok(post) => {
          info!(post_id = %post.id, "post created");
          self.take_submitted(|draft| matches!(draft, Draft::Post(_)));
          self.refresh_all_tabs();
          self.notify(POST_CREATED.into());
        }
        Err(error) => {
          self.reopen_submitted(|draft| matches!(draft, Draft::Post(_)));
          self.fail("could not create post", &error);
        }
      },
      Event::Votes { post_id, result } => match result {
        Ok(votes) => {
          debug!(%post_id, votes = votes.len(), "votes refreshed");

          if let Mode::Post(view) = &mut self.mode
            && view.post_id() == post_id
          {
            view.set_votes(votes.clone());
          }

          self.update_cached_posts(&post_id, |cached| {
            cached.votes.clone_from(&votes);
          });
        }
        Err(error) => self.fail("could not submit vote", &error),
      },
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  fn list_view(&self, index: usize) -> Option<&ListView<ListEntry>> {
    if index >= self.tabs.len() {
      return None;
    }

    if let Mode::List(view) = &self.mode
      && index == self.active_tab
    {
      return Some(view);
    }

    self.tab_views.get(index).and_then(Option::as_ref)
  }

  fn list_view_mut(
    &mut self,
    index: usize,
  ) -> Option<&mut ListView<ListEntry>> {
    if index >= self.tabs.len() {
      return None;
    }

    match &mut self.mode {
      Mode::List(view) if index == self.active_tab => Some(view),
      _ => self.tab_views.get_mut(index).and_then(Option::as_mut),
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new(
    tabs: Vec<(Tab, ListView<ListEntry>)>,
    session: Session,
  ) -> Self {
    let (mut tab_views, mut tab_meta) = (Vec::new(), Vec::new());

    for (tab, view) in tabs {
      tab_meta.push(tab);
      tab_views.push(Some(view));
    }

    let initial_view = tab_views
      .get_mut(0)
      .and_then(Option::take)
      .unwrap_or_default();

    Self {
      active_tab: 0,
      composer: None,
      help: HelpView::new(),
      list_height: 0,
      message: LIST_STATUS.into(),
      mode: Mode::List(initial_view),
      next_request_id: 0,
      notification: None,
      pending_effects: Vec::new(),
      pending_post: None,
      session,
      submitting: None,
      tab_views,
      tabs: tab_meta,
      topic_tab_index: None,
    }
  }

  fn next_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;
    self.next_request_id = self.next_request_id.wrapping_add(1);
    request_id
  }

  pub(crate) fn notify(&mut self, text: String) {
    let now = Instant::now();

    let notification = match &self.notification {
      Some(previous) => previous.replace(text, now),
      None => Notification::new(text, self.message.clone(), now),
    };

    self.message = notification.text().to_string();
    self.notification = Some(notification);
  }

  fn open_composer(&mut self, draft: Draft) {
    if self.composer.is_some() {
      return;
    }

    let composer = Composer::new(draft, self.message.clone());

    self.message = composer.status();
    self.composer = Some(composer);
  }

  fn open_current_in_browser(&mut self) {
    let url = match &self.mode {
      Mode::List(_) => self.current_entry().and_then(ListEntry::resolved_url),
      Mode::Post(view) => view.link(),
    };

    match url {
      Some(url) => self.pending_effects.push(Effect::OpenUrl { url }),
      None => self.notify(NOTHING_TO_OPEN.into()),
    }
  }

  fn open_post(&mut self, post: Post) {
    let post_id = post.id.clone();

    self.store_active_list_view();
    self.mode = Mode::Post(PostView::new(post));

    let request_id = self.next_request_id();
    self.pending_post = Some(request_id);

    self.set_status(LOADING_POST_STATUS);

    self
      .pending_effects
      .push(Effect::FetchPost { post_id, request_id });
  }

  pub(crate) fn open_selected(&mut self) {
    let Some(entry) = self.current_entry().cloned() else {
      return;
    };

    match entry {
      ListEntry::Post(post) => self.open_post(post),
      ListEntry::Subreddit { subreddit, .. } => self.open_topic(&subreddit.topic),
    }
  }

  pub(crate) fn open_topic(&mut self, topic: &str) {
    if matches!(self.mode, Mode::Post(_)) {
      self.restore_active_list_view();
    }

    let tab_index = self.ensure_topic_tab(topic);

    self.store_active_list_view();
    self.active_tab = tab_index;
    self.restore_active_list_view();

    self.start_load_for_tab(tab_index);
  }

  fn page_jump(&self) -> isize {
    isize::try_from(self.list_height.saturating_sub(1).max(1)).unwrap_or(isize::MAX)
  }

  fn refresh(&mut self) {
    match &self.mode {
      Mode::List(_) => self.start_load_for_tab(self.active_tab),
      Mode::Post(view) => {
        let post_id = view.post_id().to_string();

        let request_id = self.next_request_id();
        self.pending_post = Some(request_id);

        self.set_status(LOADING_POST_STATUS);

        self
          .pending_effects
          .push(Effect::FetchPost { post_id, request_id });
      }
    }
  }

  fn refresh_all_tabs(&mut self) {
    for tab_index in 0..self.tabs.len() {
      self.start_load_for_tab(tab_index);
    }
  }

  /// Puts a form whose submission failed back on screen, unless another
  /// form has been opened since.
  fn reopen_submitted(&mut self, is_match: impl Fn(&Draft) -> bool) {
    let Some(mut composer) = self.take_submitted(is_match) else {
      return;
    };

    if self.composer.is_some() {
      return;
    }

    composer.message_backup = match self.notification.take() {
      Some(notification) => notification.original().to_string(),
      None => self.message.clone(),
    };

    self.message = composer.status();
    self.composer = Some(composer);
  }

  pub(crate) fn resolved_active_tab(&self) -> Option<usize> {
    if self.tabs.is_empty() {
      None
    } else {
      Some(self.active_tab.min(self.tabs.len().saturating_sub(1)))
    }
  }

  fn restore_active_list_view(&mut self) {
    let view = self
      .tab_views
      .get_mut(self.active_tab)
      .and_then(Option::take);

    match view {
      Some(view) => self.mode = Mode::List(view),
      None if !matches!(self.mode, Mode::List(_)) => {
        self.mode = Mode::List(ListView::default());
      }
      None => {}
    }
  }

  fn select_index(&mut self, target: usize) {
    if let Mode::List(view) = &mut self.mode {
      view.set_selected(target);
    }
  }

  fn select_relative(&mut self, delta: isize) {
    if let Mode::List(view) = &mut self.mode {
      let current = view.selected_raw();
      view.set_selected(current.saturating_add_signed(delta));
    }
  }

  pub(crate) fn session(&self) -> &Session {
    &self.session
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  /// Updates the idle status line without clobbering help or an open form.
  fn set_status(&mut self, status: &str) {
    if let Some(composer) = self.composer.as_mut() {
      composer.message_backup = status.into();
    } else if !self.help.is_visible() {
      self.message = status.into();
    }
  }

  fn start_load_for_tab(&mut self, tab_index: usize) {
    let request_id = self.next_request_id();

    let Some(tab) = self.tabs.get_mut(tab_index) else {
      return;
    };

    tab.loading = Some(request_id);

    let category = tab.category.clone();

    if tab_index == self.active_tab && matches!(self.mode, Mode::List(_)) {
      self.set_status(LOADING_ENTRIES_STATUS);
    }

    self.pending_effects.push(Effect::FetchTabItems {
      category,
      request_id,
      tab_index,
    });
  }

  fn start_topic(&mut self) {
    self.open_composer(Draft::Topic(TopicInput::new()));
  }

  fn store_active_list_view(&mut self) {
    if let Mode::List(view) = &mut self.mode
      && let Some(slot) = self.tab_views.get_mut(self.active_tab)
    {
      *slot = Some(std::mem::take(view));
    }
  }

  fn submit_input(&mut self) {
    let Some(mut composer) = self.composer.take() else {
      return;
    };

    let username = self.session.username().unwrap_or_default().to_string();

    let effect = match &mut composer.draft {
      Draft::Topic(input) => {
        let topic = input.topic();

        self.message = composer.message_backup;

        if let Some(topic) = topic {
          self.open_topic(&topic);
        }

        return;
      }
      Draft::Comment(draft) => draft
        .validate(&username, Utc::now())
        .map(|comment| (Effect::CreateComment { comment }, POSTING_COMMENT)),
      Draft::Post(draft) => draft
        .validate(&username)
        .ok()
        .map(|post| (Effect::CreatePost { post }, CREATING_POST)),
    };

    match effect {
      Some((effect, notice)) => {
        self.message.clone_from(&composer.message_backup);
        self.notify(notice.into());
        self.pending_effects.push(effect);
        self.submitting = Some(composer);
      }
      None => self.composer = Some(composer),
    }
  }

  fn switch_tab(&mut self, step: isize) {
    let tab_count = self.tabs.len();

    if tab_count == 0 || matches!(self.mode, Mode::Post(_)) {
      return;
    }

    self.store_active_list_view();

    self.active_tab = if step < 0 {
      (self.active_tab + tab_count - 1) % tab_count
    } else {
      (self.active_tab + 1) % tab_count
    };

    self.restore_active_list_view();
  }

  pub(crate) fn tab(&self, index: usize) -> Option<&Tab> {
    self.tabs.get(index)
  }

  pub(crate) fn tabs(&self) -> &[Tab] {
    &self.tabs
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn take_submitted(
    &mut self,
    is_match: impl Fn(&Draft) -> bool,
  ) -> Option<Composer> {
    if self.submitting.as_ref().is_some_and(|composer| is_match(&composer.draft)) {
      self.submitting.take()
    } else {
      None
    }
  }

  fn update_cached_posts<F>(&mut self, post_id: &str, update: F)
  where
    F: Fn(&mut Post),
  {
    let active = match &mut self.mode {
      Mode::List(view) => Some(view),
      Mode::Post(_) => None,
    };

    for view in active.into_iter().chain(self.tab_views.iter_mut().flatten()) {
      for post in view.items_mut().iter_mut().filter_map(ListEntry::post_mut) {
        if post.id == post_id {
          update(post);
        }
      }
    }
  }

  fn vote(&mut self, direction: VoteDirection) {
    let Some(post) = self.current_post() else {
      return;
    };

    let post_id = post.id.clone();

    let summary = VoteSummary::new(&post.votes, self.session.username());

    let decision = VoteDecision::new(
      &self.session,
      summary.state,
      direction,
      &post_id,
      Utc::now(),
    );

    match decision {
      VoteDecision::SignInRequired => {
        self.notify(SIGN_IN_TO_VOTE.into());
      }
      VoteDecision::Submit(vote) => {
        debug!(post_id = %vote.post_id, ?direction, "submitting vote");
        self.pending_effects.push(Effect::SubmitVote { vote });
      }
      VoteDecision::Unchanged => {
        debug!(%post_id, ?direction, "vote unchanged");
      }
    }
  }
}
