use super::*;

/// Where the page manifest comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PageSource {
  File(PathBuf),
  Url(String),
}

impl Display for PageSource {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Url(url) => write!(f, "{url}"),
    }
  }
}

impl PageSource {
  pub(crate) fn parse(value: &str) -> Self {
    let value = value.trim();

    if value.starts_with("http://") || value.starts_with("https://") {
      Self::Url(value.to_string())
    } else {
      Self::File(PathBuf::from(value))
    }
  }
}
