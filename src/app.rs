use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  source: PageSource,
  state: State,
  tasks: JoinSet<()>,
}

impl App {
  fn detail_lines(&self, game: &Game, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
      game.name.clone(),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ))];

    if let Some(description) = &game.description {
      lines.extend(wrap_text(description, width).into_iter().map(Line::from));
    }

    for (label, value) in game.details() {
      lines.push(Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
      ]));
    }

    if game.downloadable {
      lines.push(Line::from(Span::styled(
        "[d] descargar",
        Style::default().fg(Color::Green),
      )));
    }

    if game.comments {
      lines.push(Line::default());

      lines.push(Line::from(Span::styled(
        "Comentarios",
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::UNDERLINED),
      )));

      if let Some(thread) = self.state.thread(&game.id) {
        lines.extend(thread.lines(width));
      }
    }

    lines
  }

  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.draw_tabs(frame, layout[0]);

    if let Some(view) = self.state.active_view() {
      match &view.content {
        ViewContent::Games(list) => {
          self.draw_games(frame, layout[1], &view.title, list);
        }
        ViewContent::Text(body) => {
          let paragraph = Paragraph::new(body.as_str())
            .block(Block::default().title(view.title.as_str()))
            .wrap(Wrap { trim: false });

          frame.render_widget(paragraph, layout[1]);
        }
      }
    }

    let status_color = if self.state.composer().is_some() {
      Color::White
    } else {
      Color::DarkGray
    };

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(status_color));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
    self.state.notices().draw(frame);
  }

  fn draw_games(
    &self,
    frame: &mut Frame,
    area: Rect,
    title: &str,
    list: &ListView<Game>,
  ) {
    if list.is_empty() {
      let placeholder = Paragraph::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(NO_GAMES_PLACEHOLDER),
      ]));

      frame.render_widget(placeholder, area);

      return;
    }

    let columns = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
      .split(area);

    let items = list
      .items()
      .iter()
      .map(|game| {
        let mut lines = vec![Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(game.name.clone(), Style::default().fg(Color::White)),
        ])];

        if let Some(summary) = game.summary() {
          lines.push(Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(summary, Style::default().fg(Color::DarkGray)),
          ]));
        }

        lines.push(Line::from(Span::raw(BASE_INDENT)));

        ListItem::new(lines)
      })
      .collect::<Vec<_>>();

    let mut list_state = ListState::default().with_selected(list.selected_index());

    let games = List::new(items)
      .block(Block::default().title(format!("{title} ({})", list.len())))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      );

    frame.render_stateful_widget(games, columns[0], &mut list_state);

    let Some(game) = list.selected_item() else {
      return;
    };

    let detail_area = columns[1];

    let width = usize::from(detail_area.width.saturating_sub(2)).max(1);

    let detail = Paragraph::new(self.detail_lines(game, width))
      .block(Block::default().borders(Borders::LEFT))
      .wrap(Wrap { trim: false });

    frame.render_widget(detail, detail_area);
  }

  fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
    let navigator = self.state.navigator();

    let titles = navigator
      .entries()
      .iter()
      .map(|entry| {
        if entry.view.is_none() && entry.href.is_some() {
          Line::from(format!("{} ↗", entry.label.to_uppercase()))
        } else {
          Line::from(entry.label.to_uppercase())
        }
      })
      .collect::<Vec<_>>();

    let style = Style::default().fg(Color::DarkGray);

    let tabs = Tabs::new(titles).style(style).divider(Span::raw(" "));

    let tabs = match navigator.active_entry() {
      Some(index) => tabs.select(index).highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      None => tabs.highlight_style(style),
    };

    frame.render_widget(tabs, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Download { game_id } => {
        let client = self.client.clone();

        self.spawn(async move {
          Event::Downloaded {
            result: client.download_game(&game_id).await,
            game_id,
          }
        });
      }
      Effect::FetchComments {
        game_id,
        request_id,
      } => {
        let client = self.client.clone();

        self.spawn(async move {
          Event::Comments {
            result: client.fetch_comments(&game_id).await,
            game_id,
            request_id,
          }
        });
      }
      Effect::OpenUrl { url } => {
        let url = self.client.resolve_url(&url);

        match webbrowser::open(&url) {
          Ok(()) => {
            info!(url, "opened link in browser");

            self.state.set_transient_message(format!(
              "Abierto en el navegador: {}",
              truncate(&url, 80)
            ));
          }
          Err(error) => {
            warn!(url, %error, "could not open link");

            self
              .state
              .set_transient_message(format!("No se pudo abrir el enlace: {error}"));
          }
        }
      }
      Effect::ReloadPage => {
        let (client, source) = (self.client.clone(), self.source.clone());

        info!(page = %source, "reloading page");

        self.spawn(async move {
          Event::PageReloaded {
            result: client.load_page(&source).await,
          }
        });
      }
      Effect::SubmitComment { content, game_id } => {
        let client = self.client.clone();

        self.spawn(async move {
          Event::CommentSubmitted {
            result: client.add_comment(&game_id, &content).await,
            game_id,
          }
        });
      }
    }
  }

  pub(crate) fn new(client: Client, source: PageSource, page: Page) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      source,
      state: State::new(page),
      tasks: JoinSet::new(),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Some(result) = self.tasks.try_join_next() {
      if let Err(error) = result
        && error.is_panic()
      {
        error!(%error, "request task panicked");
      }
    }

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }

    for effect in self.state.take_effects() {
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

      let command = self.state.command_for_key(key);

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  /// Aborts every request still in flight. Their results would land in a
  /// state nobody renders anymore.
  pub(crate) fn shutdown(&mut self) {
    if !self.tasks.is_empty() {
      debug!(tasks = self.tasks.len(), "aborting in-flight requests");
    }

    self.tasks.abort_all();
  }

  fn spawn<F>(&mut self, task: F)
  where
    F: Future<Output = Event> + Send + 'static,
  {
    let sender = self.event_tx.clone();

    self.tasks.spawn_on(
      async move {
        let _ = sender.send(task.await);
      },
      &self.handle,
    );
  }
}
