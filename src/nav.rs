use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct NavEntry {
  #[serde(default)]
  pub(crate) href: Option<String>,
  pub(crate) label: String,
  #[serde(default)]
  pub(crate) view: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum NavOutcome {
  Ignored,
  OpenLink(String),
  Switched,
}

/// Tracks which managed view is visible and which navigation entry carries
/// the active marker. Exactly one view is visible at any time.
pub(crate) struct Navigator {
  active_entry: Option<usize>,
  entries: Vec<NavEntry>,
  views: Vec<String>,
  visible: usize,
}

impl Navigator {
  /// Handles a click on the entry at `index`.
  ///
  /// Entries that declare a target view switch to it. Entries with only an
  /// `href` leave the views alone and hand the link back to the caller.
  pub(crate) fn activate(&mut self, index: usize) -> NavOutcome {
    let Some(entry) = self.entries.get(index) else {
      return NavOutcome::Ignored;
    };

    if let Some(target) = &entry.view {
      let Some(position) = self.views.iter().position(|id| id == target)
      else {
        return NavOutcome::Ignored;
      };

      self.active_entry = Some(index);
      self.visible = position;

      return NavOutcome::Switched;
    }

    entry
      .href
      .clone()
      .filter(|href| !href.trim().is_empty())
      .map_or(NavOutcome::Ignored, NavOutcome::OpenLink)
  }

  pub(crate) fn active_entry(&self) -> Option<usize> {
    self.active_entry
  }

  pub(crate) fn entries(&self) -> &[NavEntry] {
    &self.entries
  }

  pub(crate) fn is_visible(&self, view_id: &str) -> bool {
    self.visible_view() == Some(view_id)
  }

  pub(crate) fn new(
    entries: Vec<NavEntry>,
    views: Vec<String>,
    default_view: &str,
  ) -> Self {
    let visible = views
      .iter()
      .position(|id| id == default_view)
      .unwrap_or(0);

    let active_entry = views.get(visible).and_then(|id| {
      entries
        .iter()
        .position(|entry| entry.view.as_deref() == Some(id.as_str()))
    });

    Self {
      active_entry,
      entries,
      views,
      visible,
    }
  }

  pub(crate) fn next(&mut self) -> NavOutcome {
    self.step(true)
  }

  pub(crate) fn previous(&mut self) -> NavOutcome {
    self.step(false)
  }

  fn step(&mut self, forward: bool) -> NavOutcome {
    let count = self.entries.len();

    if count == 0 {
      return NavOutcome::Ignored;
    }

    let start = self
      .active_entry
      .unwrap_or(if forward { count - 1 } else { 0 });

    for offset in 1..=count {
      let index = if forward {
        (start + offset) % count
      } else {
        (start + count - offset) % count
      };

      if self.entries[index].view.is_some() {
        return self.activate(index);
      }
    }

    NavOutcome::Ignored
  }

  pub(crate) fn visible_view(&self) -> Option<&str> {
    self.views.get(self.visible).map(String::as_str)
  }
}
