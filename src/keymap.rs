use super::*;

/// Key bindings while browsing: no overlay shown and no comment being
/// written.
pub(crate) fn browse_command(key: KeyEvent) -> Command {
  match key.code {
    KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
    KeyCode::Char('?') => Command::ShowHelp,
    KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
      Command::PreviousView
    }
    KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Command::NextView,
    KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
    KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
    KeyCode::Home | KeyCode::Char('g') => Command::SelectFirst,
    KeyCode::End | KeyCode::Char('G') => Command::SelectLast,
    KeyCode::Char('d' | 'D') => Command::Download,
    KeyCode::Char('c' | 'C') | KeyCode::Enter => Command::StartComment,
    KeyCode::Char('r' | 'R') => Command::RefreshComments,
    KeyCode::Char(ch @ '1'..='9') => ch
      .to_digit(10)
      .and_then(|digit| usize::try_from(digit).ok())
      .map_or(Command::None, |digit| Command::ActivateNav(digit - 1)),
    _ => Command::None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn digits_activate_navigation_entries() {
    assert_eq!(
      browse_command(key(KeyCode::Char('1'))),
      Command::ActivateNav(0)
    );

    assert_eq!(
      browse_command(key(KeyCode::Char('9'))),
      Command::ActivateNav(8)
    );

    assert_eq!(browse_command(key(KeyCode::Char('0'))), Command::None);
  }

  #[test]
  fn actions_have_letter_bindings() {
    assert_eq!(browse_command(key(KeyCode::Char('d'))), Command::Download);
    assert_eq!(browse_command(key(KeyCode::Char('c'))), Command::StartComment);
    assert_eq!(browse_command(key(KeyCode::Enter)), Command::StartComment);
    assert_eq!(
      browse_command(key(KeyCode::Char('r'))),
      Command::RefreshComments
    );
    assert_eq!(browse_command(key(KeyCode::Esc)), Command::Quit);
  }
}
