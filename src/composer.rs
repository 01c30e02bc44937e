use super::*;

/// The comment form for one game while it has keyboard focus.
pub(crate) struct Composer {
  pub(crate) buffer: String,
  pub(crate) game_id: String,
  pub(crate) game_name: String,
  pub(crate) message_backup: String,
}

impl Composer {
  pub(crate) fn new(game: &Game, buffer: String, message_backup: String) -> Self {
    Self {
      buffer,
      game_id: game.id.clone(),
      game_name: game.name.clone(),
      message_backup,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!(
      "Comentario para {}: {}",
      truncate(&self.game_name, 30),
      self.buffer
    )
  }

  pub(crate) fn trimmed(&self) -> &str {
    self.buffer.trim()
  }
}
