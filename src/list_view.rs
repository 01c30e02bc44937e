pub(crate) struct ListView<T> {
  items: Vec<T>,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      selected: 0,
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self { items, selected: 0 }
  }

  pub(crate) fn position<P>(&self, predicate: P) -> Option<usize>
  where
    P: FnMut(&T) -> bool,
  {
    self.items.iter().position(predicate)
  }

  pub(crate) fn select_last(&mut self) {
    self.set_selected(self.items.len().saturating_sub(1));
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.items.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.items.len().saturating_sub(1));
    }
  }
}
