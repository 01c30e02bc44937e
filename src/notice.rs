use super::*;

/// A blocking notification. Its follow-up effect runs once the user has
/// acknowledged it.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Notice {
  pub(crate) follow_up: Option<Effect>,
  pub(crate) text: String,
}

impl Notice {
  pub(crate) fn new(text: impl Into<String>) -> Self {
    Self {
      follow_up: None,
      text: text.into(),
    }
  }

  pub(crate) fn then(self, effect: Effect) -> Self {
    Self {
      follow_up: Some(effect),
      ..self
    }
  }
}

/// Notices raised while another is on screen wait their turn.
#[derive(Default)]
pub(crate) struct NoticeQueue {
  queue: VecDeque<Notice>,
}

impl NoticeQueue {
  pub(crate) fn current(&self) -> Option<&Notice> {
    self.queue.front()
  }

  pub(crate) fn dismiss(&mut self) -> Option<Effect> {
    self.queue.pop_front().and_then(|notice| notice.follow_up)
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let Some(notice) = self.current() else {
      return;
    };

    let width = usize::from(frame.area().width.saturating_sub(8)).max(1);

    let mut lines = wrap_text(&notice.text, width);

    lines.push(String::new());
    lines.push(NOTICE_HINT.to_string());

    let text = lines.join("\n");

    let area = centered_area(frame.area(), &text);

    frame.render_widget(Clear, area);

    let mut title = NOTICE_TITLE.to_string();

    if self.queue.len() > 1 {
      title.push_str(&format!(" (1/{})", self.queue.len()));
    }

    let widget = Paragraph::new(text)
      .block(
        Block::default()
          .title(title)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Yellow)),
      )
      .wrap(Wrap { trim: false });

    frame.render_widget(widget, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
        Command::DismissNotice
      }
      _ => Command::None,
    }
  }

  pub(crate) fn is_blocking(&self) -> bool {
    !self.queue.is_empty()
  }

  pub(crate) fn push(&mut self, notice: Notice) {
    self.queue.push_back(notice);
  }
}
