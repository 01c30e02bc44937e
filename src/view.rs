use super::*;

pub(crate) enum ViewContent {
  Games(ListView<Game>),
  Text(String),
}

pub(crate) struct View {
  pub(crate) content: ViewContent,
  pub(crate) id: String,
  pub(crate) title: String,
}

impl From<ViewSpec> for View {
  fn from(spec: ViewSpec) -> Self {
    let content = match spec.games {
      Some(games) => ViewContent::Games(ListView::new(games)),
      None => ViewContent::Text(spec.body.unwrap_or_default()),
    };

    Self {
      content,
      title: spec.title.unwrap_or_else(|| spec.id.clone()),
      id: spec.id,
    }
  }
}

impl View {
  pub(crate) fn games(&self) -> Option<&ListView<Game>> {
    match &self.content {
      ViewContent::Games(list) => Some(list),
      ViewContent::Text(_) => None,
    }
  }

  pub(crate) fn games_mut(&mut self) -> Option<&mut ListView<Game>> {
    match &mut self.content {
      ViewContent::Games(list) => Some(list),
      ViewContent::Text(_) => None,
    }
  }
}
