use super::*;

fn default_view() -> String {
  DEFAULT_VIEW.to_string()
}

/// The page manifest: navigation entries, views and the game items they
/// list. Fixed for the lifetime of a load; a reload replaces it wholesale.
#[derive(Debug, Deserialize)]
pub(crate) struct Page {
  #[serde(default = "default_view")]
  pub(crate) default_view: String,
  #[serde(default)]
  pub(crate) nav: Vec<NavEntry>,
  pub(crate) views: Vec<ViewSpec>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewSpec {
  #[serde(default)]
  pub(crate) body: Option<String>,
  #[serde(default)]
  pub(crate) games: Option<Vec<Game>>,
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) title: Option<String>,
}

impl Page {
  pub(crate) fn from_json(data: &str) -> Result<Self> {
    let page = serde_json::from_str::<Self>(data)
      .context("page manifest is not valid JSON")?;

    page.validate()?;

    Ok(page)
  }

  pub(crate) fn games(&self) -> impl Iterator<Item = &Game> {
    self
      .views
      .iter()
      .filter_map(|view| view.games.as_deref())
      .flatten()
  }

  pub(crate) fn into_parts(self) -> (Navigator, Vec<View>) {
    let view_ids = self
      .views
      .iter()
      .map(|view| view.id.clone())
      .collect::<Vec<_>>();

    let navigator = Navigator::new(self.nav, view_ids, &self.default_view);

    (navigator, self.views.into_iter().map(View::from).collect())
  }

  fn validate(&self) -> Result {
    ensure!(!self.views.is_empty(), "page declares no views");

    let mut view_ids = HashSet::new();

    for view in &self.views {
      ensure!(!view.id.trim().is_empty(), "page declares a view without id");

      ensure!(
        view_ids.insert(view.id.as_str()),
        "view `{}` is declared more than once",
        view.id
      );
    }

    for entry in &self.nav {
      if let Some(target) = &entry.view {
        ensure!(
          view_ids.contains(target.as_str()),
          "navigation entry `{}` targets unknown view `{target}`",
          entry.label
        );
      }
    }

    for game in self.games() {
      ensure!(!game.id.is_empty(), "game `{}` has no id", game.name);

      ensure!(
        !game
          .id
          .chars()
          .any(|ch| matches!(ch, '/' | '?' | '#') || ch.is_whitespace()),
        "game id `{}` cannot be used in a request path",
        game.id
      );
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MANIFEST: &str = r#"{
    "nav": [
      {"label": "Inicio", "view": "home"},
      {"label": "Catálogo", "view": "games"},
      {"label": "Donaciones", "href": "/donaciones"}
    ],
    "views": [
      {"id": "home", "title": "Inicio", "body": "Bienvenido"},
      {"id": "games", "games": [
        {"id": 1, "name": "Nebula"},
        {"id": "2", "name": "Orbit", "comments": false}
      ]},
      {"id": "library", "games": [{"id": 1, "name": "Nebula"}]}
    ]
  }"#;

  #[test]
  fn manifest_defaults_to_home_view() {
    let page = Page::from_json(MANIFEST).unwrap();

    assert_eq!(page.default_view, "home");
    assert_eq!(page.nav.len(), 3);
  }

  #[test]
  fn games_are_listed_across_views_in_page_order() {
    let page = Page::from_json(MANIFEST).unwrap();

    let ids = page.games().map(|game| game.id.as_str()).collect::<Vec<_>>();

    assert_eq!(ids, ["1", "2", "1"]);
  }

  #[test]
  fn into_parts_builds_text_and_game_views() {
    let (navigator, views) = Page::from_json(MANIFEST).unwrap().into_parts();

    assert_eq!(navigator.visible_view(), Some("home"));

    assert!(matches!(&views[0].content, ViewContent::Text(body) if body == "Bienvenido"));
    assert_eq!(views[1].title, "games");
    assert_eq!(views[1].games().map(ListView::len), Some(2));
  }

  #[test]
  fn unknown_navigation_target_is_rejected() {
    let error = Page::from_json(
      r#"{"nav": [{"label": "X", "view": "nope"}], "views": [{"id": "home"}]}"#,
    )
    .unwrap_err();

    assert!(error.to_string().contains("unknown view `nope`"));
  }

  #[test]
  fn duplicate_view_ids_are_rejected() {
    assert!(
      Page::from_json(r#"{"views": [{"id": "home"}, {"id": "home"}]}"#)
        .is_err()
    );
  }

  #[test]
  fn empty_view_list_is_rejected() {
    assert!(Page::from_json(r#"{"views": []}"#).is_err());
  }

  #[test]
  fn game_ids_must_be_path_safe() {
    let error = Page::from_json(
      r#"{"views": [{"id": "games", "games": [{"id": "1/2", "name": "X"}]}]}"#,
    )
    .unwrap_err();

    assert!(error.to_string().contains("request path"));

    assert!(
      Page::from_json(
        r#"{"views": [{"id": "games", "games": [{"id": null, "name": "X"}]}]}"#,
      )
      .is_err()
    );
  }

  #[test]
  fn malformed_json_is_reported_with_context() {
    let error = Page::from_json("{").unwrap_err();

    assert_eq!(error.to_string(), "page manifest is not valid JSON");
  }
}
