use super::*;

pub(crate) struct State {
  composer: Option<Composer>,
  deferred_status: Option<String>,
  drafts: HashMap<String, String>,
  help: HelpView,
  message: String,
  navigator: Navigator,
  next_request_id: u64,
  notices: NoticeQueue,
  pending_effects: Vec<Effect>,
  threads: HashMap<String, CommentsList>,
  transient_message: Option<TransientMessage>,
  views: Vec<View>,
}

impl State {
  fn activate_nav(&mut self, index: usize) {
    let outcome = self.navigator.activate(index);
    self.handle_nav_outcome(outcome);
  }

  pub(crate) fn active_view(&self) -> Option<&View> {
    self
      .views
      .iter()
      .find(|view| self.navigator.is_visible(&view.id))
  }

  fn active_view_mut(&mut self) -> Option<&mut View> {
    let navigator = &self.navigator;

    self
      .views
      .iter_mut()
      .find(|view| navigator.is_visible(&view.id))
  }

  /// Swaps in a freshly loaded page, keeping the visible view, per-view
  /// selection and unsent drafts where the new page still has them, then
  /// reloads every comment thread.
  fn apply_page(&mut self, mut page: Page) {
    if let Some(visible) = self.navigator.visible_view()
      && page.views.iter().any(|view| view.id == visible)
    {
      page.default_view = visible.to_string();
    }

    let selections = self
      .views
      .iter()
      .filter_map(|view| {
        view
          .games()
          .and_then(ListView::selected_item)
          .map(|game| (view.id.clone(), game.id.clone()))
      })
      .collect::<HashMap<_, _>>();

    let game_ids = page
      .games()
      .map(|game| game.id.clone())
      .collect::<HashSet<_>>();

    let (navigator, mut views) = page.into_parts();

    for view in &mut views {
      let Some(selected) = selections.get(&view.id) else {
        continue;
      };

      if let Some(list) = view.games_mut()
        && let Some(index) = list.position(|game| &game.id == selected)
      {
        list.set_selected(index);
      }
    }

    self.navigator = navigator;
    self.views = views;

    self.threads.retain(|id, _| game_ids.contains(id));
    self.drafts.retain(|id, _| game_ids.contains(id));

    if self
      .composer
      .as_ref()
      .is_some_and(|composer| !game_ids.contains(&composer.game_id))
    {
      self.close_composer();
    }

    info!(views = self.views.len(), games = game_ids.len(), "page reloaded");

    self.load_all_comments();
  }

  fn cancel_comment(&mut self) {
    self.close_composer();
  }

  fn close_composer(&mut self) {
    if let Some(composer) = self.composer.take() {
      if !composer.buffer.is_empty() {
        self.drafts.insert(composer.game_id, composer.buffer);
      }

      self.message = composer.message_backup;

      self.show_deferred_status();
    }
  }

  /// Routes a key press to whichever layer currently owns the keyboard:
  /// a notice, the help overlay, the comment composer, or browsing.
  pub(crate) fn command_for_key(&mut self, key: KeyEvent) -> Command {
    if self.notices.is_blocking() {
      NoticeQueue::handle_key(key)
    } else if self.help.is_visible() {
      HelpView::handle_key(key)
    } else if self.composer.is_some() {
      self.handle_composer_key(key)
    } else {
      keymap::browse_command(key)
    }
  }

  pub(crate) fn composer(&self) -> Option<&Composer> {
    self.composer.as_ref()
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ActivateNav(index) => self.activate_nav(index),
      Command::CancelComment => self.cancel_comment(),
      Command::DismissNotice => self.dismiss_notice(),
      Command::Download => self.download_selected(),
      Command::HideHelp => self.hide_help(),
      Command::NextView => {
        let outcome = self.navigator.next();
        self.handle_nav_outcome(outcome);
      }
      Command::PreviousView => {
        let outcome = self.navigator.previous();
        self.handle_nav_outcome(outcome);
      }
      Command::RefreshComments => self.refresh_selected_comments(),
      Command::SelectFirst => self.with_games(|list| list.set_selected(0)),
      Command::SelectLast => self.with_games(ListView::select_last),
      Command::SelectNext => self.with_games(ListView::select_next),
      Command::SelectPrevious => self.with_games(ListView::select_previous),
      Command::ShowHelp => self.show_help(),
      Command::StartComment => self.start_comment(),
      Command::SubmitComment => self.submit_comment(),
      Command::None => {}
    }

    CommandDispatch {
      effects: self.take_effects(),
      should_exit,
    }
  }

  fn dismiss_notice(&mut self) {
    if let Some(effect) = self.notices.dismiss() {
      self.pending_effects.push(effect);
    }
  }

  fn download_selected(&mut self) {
    let Some(game) = self.selected_game() else {
      return;
    };

    if !game.downloadable {
      let message = format!("{} no se puede descargar.", game.name);
      self.set_transient_message(message);
      return;
    }

    let (game_id, name) = (game.id.clone(), game.name.clone());

    info!(game_id, "requesting download");

    self.set_transient_message(format!(
      "Descargando {}...",
      truncate(&name, 40)
    ));

    self.pending_effects.push(Effect::Download { game_id });
  }

  fn game_name(&self, game_id: &str) -> String {
    self
      .views
      .iter()
      .filter_map(View::games)
      .flat_map(ListView::items)
      .find(|game| game.id == game_id)
      .map_or_else(|| game_id.to_string(), |game| game.name.clone())
  }

  fn handle_composer_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelComment,
      KeyCode::Enter => Command::SubmitComment,
      KeyCode::Backspace => {
        if let Some(composer) = self.composer.as_mut() {
          composer.buffer.pop();
        }

        self.update_composer_message();

        Command::None
      }
      KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        if let Some(composer) = self.composer.as_mut() {
          composer.buffer.clear();
        }

        self.update_composer_message();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(composer) = self.composer.as_mut() {
          composer.buffer.push(ch);
        }

        self.update_composer_message();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Comments {
        game_id,
        request_id,
        result,
      } => {
        let Some(thread) = self.threads.get_mut(&game_id) else {
          debug!(game_id, "dropping comments for a game no longer shown");
          return;
        };

        thread.finish_request();

        match result {
          Ok(comments) => {
            let count = comments.len();

            if thread.apply(request_id, comments) {
              debug!(game_id, count, "rendered comments");
            } else {
              debug!(game_id, request_id, "dropping stale comments");
            }
          }
          Err(error) => {
            warn!(game_id, error = format!("{error:#}"), "could not load comments");

            if thread.is_stale(request_id) {
              return;
            }

            let name = truncate(&self.game_name(&game_id), 40);

            self.notify_status(format!(
              "No se pudieron cargar los comentarios de {name}"
            ));
          }
        }
      }
      Event::CommentSubmitted { game_id, result } => match result {
        Ok(submission) if submission.success => {
          info!(game_id, "comment accepted");

          self.drafts.remove(&game_id);

          if let Some(composer) = self.composer.as_mut()
            && composer.game_id == game_id
          {
            composer.buffer.clear();
            self.update_composer_message();
          }

          self.request_comments(&game_id);
        }
        Ok(submission) => {
          warn!(game_id, reason = ?submission.message, "comment rejected");
          self.notices.push(Notice::new(submission.failure_message()));
        }
        Err(error) => {
          error!(game_id, error = format!("{error:#}"), "could not submit comment");
          self.notices.push(Notice::new(COMMENT_SEND_FAILED));
        }
      },
      Event::Downloaded { game_id, result } => match result {
        Ok(response) if response.success => {
          info!(game_id, "download accepted");
          self
            .notices
            .push(Notice::new(response.notice_text()).then(Effect::ReloadPage));
        }
        Ok(response) => {
          info!(game_id, reason = ?response.message, "download refused");
          self.notices.push(Notice::new(response.notice_text()));
        }
        Err(error) => {
          error!(game_id, error = format!("{error:#}"), "could not download game");
          self.notices.push(Notice::new(DOWNLOAD_FAILED));
        }
      },
      Event::PageReloaded { result } => match result {
        Ok(page) => self.apply_page(page),
        Err(error) => {
          error!(error = format!("{error:#}"), "could not reload page");
          self.notices.push(Notice::new(RELOAD_FAILED));
        }
      },
    }
  }

  fn handle_nav_outcome(&mut self, outcome: NavOutcome) {
    match outcome {
      NavOutcome::Ignored => {}
      NavOutcome::OpenLink(url) => {
        self.pending_effects.push(Effect::OpenUrl { url });
      }
      NavOutcome::Switched => {
        debug!(view = self.navigator.visible_view(), "switched view");
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  fn hide_help(&mut self) {
    if let Some(status) = self.help.hide() {
      self.message = status;
      self.show_deferred_status();
    }
  }

  fn load_all_comments(&mut self) {
    let mut seen = HashSet::new();

    let game_ids = self
      .views
      .iter()
      .filter_map(View::games)
      .flat_map(ListView::items)
      .filter(|game| game.comments && seen.insert(game.id.clone()))
      .map(|game| game.id.clone())
      .collect::<Vec<_>>();

    for game_id in game_ids {
      self.request_comments(&game_id);
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn navigator(&self) -> &Navigator {
    &self.navigator
  }

  /// Builds the controller for `page`: the default view is shown and a
  /// comment load is queued for every game that has a thread.
  pub(crate) fn new(page: Page) -> Self {
    let (navigator, views) = page.into_parts();

    let mut state = Self {
      composer: None,
      deferred_status: None,
      drafts: HashMap::new(),
      help: HelpView::default(),
      message: BROWSE_STATUS.into(),
      navigator,
      next_request_id: 0,
      notices: NoticeQueue::default(),
      pending_effects: Vec::new(),
      threads: HashMap::new(),
      transient_message: None,
      views,
    };

    state.load_all_comments();

    state
  }

  pub(crate) fn notices(&self) -> &NoticeQueue {
    &self.notices
  }

  /// Shows `message` on the status line, or holds it until the overlay
  /// that currently owns the status line closes.
  fn notify_status(&mut self, message: String) {
    if self.help.is_visible() || self.composer.is_some() {
      self.deferred_status = Some(message);
    } else {
      self.set_transient_message(message);
    }
  }

  fn refresh_selected_comments(&mut self) {
    let Some(game) = self.selected_game() else {
      return;
    };

    if game.comments {
      let game_id = game.id.clone();
      self.request_comments(&game_id);
    }
  }

  fn request_comments(&mut self, game_id: &str) {
    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self
      .threads
      .entry(game_id.to_string())
      .or_default()
      .begin_request();

    self.pending_effects.push(Effect::FetchComments {
      game_id: game_id.to_string(),
      request_id,
    });
  }

  pub(crate) fn selected_game(&self) -> Option<&Game> {
    self
      .active_view()
      .and_then(View::games)
      .and_then(ListView::selected_item)
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message = Some(TransientMessage::new(
      message.clone(),
      original,
      TransientMessage::LIFETIME,
    ));

    self.message = message;
  }

  fn show_deferred_status(&mut self) {
    if self.help.is_visible() || self.composer.is_some() {
      return;
    }

    if let Some(message) = self.deferred_status.take() {
      self.set_transient_message(message);
    }
  }

  fn show_help(&mut self) {
    if self.help.is_visible() {
      return;
    }

    let status = self.transient_message.take().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.help.show(status);

    self.message = HELP_STATUS.into();
  }

  fn start_comment(&mut self) {
    let Some(game) = self.selected_game() else {
      return;
    };

    if !game.comments {
      let message = format!("{} no admite comentarios.", game.name);
      self.set_transient_message(message);
      return;
    }

    let game = game.clone();

    let buffer = self.drafts.remove(&game.id).unwrap_or_default();

    self.transient_message = None;

    self.composer = Some(Composer::new(&game, buffer, BROWSE_STATUS.into()));

    self.update_composer_message();
  }

  fn submit_comment(&mut self) {
    let Some(composer) = self.composer.as_ref() else {
      return;
    };

    let content = composer.trimmed().to_string();

    if content.is_empty() {
      self.notices.push(Notice::new(EMPTY_COMMENT));
      return;
    }

    let game_id = composer.game_id.clone();

    info!(game_id, "submitting comment");

    self.close_composer();

    self
      .pending_effects
      .push(Effect::SubmitComment { content, game_id });
  }

  pub(crate) fn take_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn thread(&self, game_id: &str) -> Option<&CommentsList> {
    self.threads.get(game_id)
  }

  fn update_composer_message(&mut self) {
    if let Some(composer) = &self.composer {
      self.message = truncate(&composer.prompt(), 120);
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  fn with_games<F>(&mut self, f: F)
  where
    F: FnOnce(&mut ListView<Game>),
  {
    if let Some(list) = self.active_view_mut().and_then(View::games_mut) {
      f(list);
    }
  }
}
