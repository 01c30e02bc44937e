use super::*;

fn enabled() -> bool {
  true
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Game {
  #[serde(default = "enabled")]
  pub(crate) comments: bool,
  #[serde(default)]
  pub(crate) description: Option<String>,
  #[serde(default)]
  pub(crate) developer: Option<String>,
  #[serde(default = "enabled")]
  pub(crate) downloadable: bool,
  #[serde(default)]
  pub(crate) genre: Option<String>,
  #[serde(deserialize_with = "deserialize_lenient_string")]
  pub(crate) id: String,
  pub(crate) name: String,
  #[serde(default)]
  pub(crate) platform: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_lenient_string")]
  pub(crate) release_date: Option<String>,
  #[serde(default)]
  pub(crate) size: Option<String>,
}

impl Game {
  /// Labelled detail rows for the detail pane, skipping absent
  /// values.
  pub(crate) fn details(&self) -> Vec<(&'static str, &str)> {
    [
      ("Género", self.genre.as_deref()),
      ("Plataforma", self.platform.as_deref()),
      ("Tamaño", self.size.as_deref()),
      ("Desarrollador", self.developer.as_deref()),
      ("Lanzamiento", self.release_date.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
      value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| (label, value))
    })
    .collect()
  }

  pub(crate) fn summary(&self) -> Option<String> {
    let parts = [&self.genre, &self.platform, &self.size]
      .into_iter()
      .filter_map(|value| value.as_deref().map(str::trim))
      .filter(|value| !value.is_empty())
      .collect::<Vec<_>>();

    (!parts.is_empty()).then(|| parts.join(" • "))
  }
}
