use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CommentNode {
  Block(Comment),
  Placeholder,
}

/// The rendered comment thread of one game.
///
/// Contents are only ever replaced wholesale from a fetched comment list;
/// a failed fetch leaves the previous rendering in place.
#[derive(Debug, Default)]
pub(crate) struct CommentsList {
  applied: Option<u64>,
  in_flight: usize,
  nodes: Vec<CommentNode>,
}

impl CommentsList {
  /// Replaces the rendering with `comments`, unless a response to a newer
  /// request has already been applied.
  pub(crate) fn apply(&mut self, request_id: u64, comments: Vec<Comment>) -> bool {
    if self.is_stale(request_id) {
      return false;
    }

    self.applied = Some(request_id);

    self.nodes.clear();

    if comments.is_empty() {
      self.nodes.push(CommentNode::Placeholder);
    } else {
      self.nodes.extend(comments.into_iter().map(CommentNode::Block));
    }

    true
  }

  pub(crate) fn begin_request(&mut self) {
    self.in_flight = self.in_flight.saturating_add(1);
  }

  pub(crate) fn finish_request(&mut self) {
    self.in_flight = self.in_flight.saturating_sub(1);
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.in_flight > 0
  }

  /// Whether a response to a newer request than `request_id` has
  /// already been rendered.
  pub(crate) fn is_stale(&self, request_id: u64) -> bool {
    self.applied.is_some_and(|applied| request_id < applied)
  }

  pub(crate) fn lines(&self, width: usize) -> Vec<Line<'static>> {
    if self.nodes().is_empty() && self.is_loading() {
      return vec![Line::from(Span::styled(
        LOADING_COMMENTS_STATUS,
        Style::default().fg(Color::DarkGray),
      ))];
    }

    let mut lines = Vec::new();

    for node in self.nodes() {
      match node {
        CommentNode::Block(comment) => {
          lines.push(Line::from(Span::styled(
            comment.username.clone(),
            Style::default()
              .fg(Color::White)
              .add_modifier(Modifier::BOLD),
          )));

          for line in wrap_text(&comment.content, width.max(1)) {
            lines.push(Line::from(line));
          }

          lines.push(Line::from(Span::styled(
            comment.created_at.clone(),
            Style::default().fg(Color::DarkGray),
          )));

          lines.push(Line::default());
        }
        CommentNode::Placeholder => {
          lines.push(Line::from(Span::styled(
            NO_COMMENTS_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
          )));
        }
      }
    }

    lines
  }

  pub(crate) fn nodes(&self) -> &[CommentNode] {
    &self.nodes
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(username: &str, content: &str, created_at: &str) -> Comment {
    Comment {
      content: content.into(),
      created_at: created_at.into(),
      username: username.into(),
    }
  }

  fn text(lines: &[Line]) -> Vec<String> {
    lines
      .iter()
      .map(|line| {
        line
          .spans
          .iter()
          .map(|span| span.content.as_ref())
          .collect::<String>()
      })
      .collect()
  }

  #[test]
  fn empty_list_renders_only_the_placeholder() {
    let mut list = CommentsList::default();

    assert!(list.apply(0, Vec::new()));

    assert_eq!(list.nodes(), [CommentNode::Placeholder]);
    assert_eq!(text(&list.lines(40)), ["No hay comentarios aún."]);
  }

  #[test]
  fn comments_render_one_block_each_in_server_order() {
    let mut list = CommentsList::default();

    list.apply(
      0,
      vec![comment("a", "hi", "t1"), comment("b", "yo", "t2")],
    );

    assert_eq!(
      list.nodes(),
      [
        CommentNode::Block(comment("a", "hi", "t1")),
        CommentNode::Block(comment("b", "yo", "t2")),
      ]
    );

    assert_eq!(
      text(&list.lines(40)),
      ["a", "hi", "t1", "", "b", "yo", "t2", ""]
    );
  }

  #[test]
  fn rerendering_replaces_previous_nodes() {
    let mut list = CommentsList::default();

    let comments = vec![comment("a", "hi", "t1")];

    list.apply(0, comments.clone());
    list.apply(1, comments.clone());

    assert_eq!(list.nodes(), [CommentNode::Block(comments[0].clone())]);

    list.apply(2, Vec::new());

    assert_eq!(list.nodes(), [CommentNode::Placeholder]);
  }

  #[test]
  fn stale_responses_are_dropped() {
    let mut list = CommentsList::default();

    assert!(list.apply(5, vec![comment("nuevo", "x", "t2")]));
    assert!(!list.apply(4, vec![comment("viejo", "y", "t1")]));

    assert!(list.is_stale(4));
    assert!(!list.is_stale(5));

    assert_eq!(
      list.nodes(),
      [CommentNode::Block(comment("nuevo", "x", "t2"))]
    );
  }

  #[test]
  fn loading_indicator_only_shows_before_first_render() {
    let mut list = CommentsList::default();

    assert!(list.lines(40).is_empty());

    list.begin_request();
    assert_eq!(text(&list.lines(40)), ["Cargando comentarios..."]);

    list.apply(0, Vec::new());
    assert_eq!(text(&list.lines(40)), ["No hay comentarios aún."]);

    list.finish_request();
    assert!(!list.is_loading());
  }
}
