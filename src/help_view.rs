use super::*;

const KEY_WIDTH: usize = 8;

const SECTIONS: &[Section] = &[
  (
    "Navegación",
    &[
      ("← / h", "vista anterior"),
      ("→ / l", "vista siguiente"),
      ("1-9", "activar la entrada n del menú"),
      ("↑ / k", "juego anterior"),
      ("↓ / j", "juego siguiente"),
      ("inicio", "primer juego"),
      ("fin", "último juego"),
    ],
  ),
  (
    "Acciones",
    &[
      ("d", "descargar el juego seleccionado"),
      ("c", "comentar el juego seleccionado"),
      ("enter", "comentar el juego seleccionado"),
      ("r", "recargar los comentarios del juego"),
      ("?", "mostrar u ocultar esta ayuda"),
      ("q", "salir de gamecat"),
    ],
  ),
  (
    "Comentario",
    &[
      ("enter", "enviar"),
      ("esc", "cerrar sin enviar (se conserva el borrador)"),
      ("ctrl+u", "borrar el borrador"),
    ],
  ),
  ("Avisos", &[("enter", "aceptar")]),
];

type Section = (&'static str, &'static [(&'static str, &'static str)]);

/// The key reference overlay. While open it owns the status line and
/// keeps whatever was shown before so it can be put back.
#[derive(Debug, Default)]
pub(crate) struct HelpView {
  status_backup: Option<String>,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.is_visible() {
      return;
    }

    let lines = Self::lines();

    let plain = lines
      .iter()
      .map(|line| {
        line
          .spans
          .iter()
          .map(|span| span.content.as_ref())
          .collect::<String>()
      })
      .collect::<Vec<_>>()
      .join("\n");

    let area = centered_area(frame.area(), &plain);

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(lines)
        .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: false }),
      area,
    );
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  /// Closes the overlay, returning the status it replaced.
  pub(crate) fn hide(&mut self) -> Option<String> {
    self.status_backup.take()
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.status_backup.is_some()
  }

  fn lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (title, bindings)) in SECTIONS.iter().enumerate() {
      if index > 0 {
        lines.push(Line::default());
      }

      lines.push(Line::from(Span::styled(
        format!("{title}:"),
        Style::default().add_modifier(Modifier::BOLD),
      )));

      for (keys, action) in *bindings {
        lines.push(Line::from(vec![
          Span::raw(BASE_INDENT.repeat(2)),
          Span::styled(
            format!("{keys:<KEY_WIDTH$}"),
            Style::default().fg(Color::Cyan),
          ),
          Span::raw(*action),
        ]));
      }
    }

    lines
  }

  /// Opens the overlay over `status`. Does nothing when already open.
  pub(crate) fn show(&mut self, status: String) {
    if self.status_backup.is_none() {
      self.status_backup = Some(status);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
  }

  #[test]
  fn bindings_are_aligned_under_their_section() {
    let lines = HelpView::lines()
      .iter()
      .map(text)
      .collect::<Vec<_>>();

    assert_eq!(lines[0], "Navegación:");
    assert_eq!(lines[1], "  ← / h   vista anterior");
    assert!(lines.contains(&"  ctrl+u  borrar el borrador".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("  enter   aceptar"));
  }

  #[test]
  fn hiding_returns_the_replaced_status_once() {
    let mut help = HelpView::default();

    assert!(!help.is_visible());

    help.show("antes".into());
    help.show("ayuda".into());

    assert!(help.is_visible());
    assert_eq!(help.hide().as_deref(), Some("antes"));
    assert!(!help.is_visible());
    assert_eq!(help.hide(), None);
  }

  #[test]
  fn only_toggle_and_quit_keys_leave_the_overlay() {
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    assert_eq!(HelpView::handle_key(key(KeyCode::Char('?'))), Command::HideHelp);
    assert_eq!(HelpView::handle_key(key(KeyCode::Esc)), Command::HideHelp);
    assert_eq!(HelpView::handle_key(key(KeyCode::Char('q'))), Command::Quit);
    assert_eq!(HelpView::handle_key(key(KeyCode::Char('d'))), Command::None);
    assert_eq!(HelpView::handle_key(key(KeyCode::Enter)), Command::None);
  }
}
