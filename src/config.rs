use super::*;

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) log_dir: PathBuf,
  pub(crate) page: PageSource,
  pub(crate) session: Option<String>,
}

impl Config {
  const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

  fn base_dir<F>(lookup: &F, xdg_var: &str, home_suffix: &str) -> Result<PathBuf>
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(dir) = lookup(xdg_var) {
      return Ok(PathBuf::from(dir));
    }

    if let Some(home) = lookup("HOME") {
      return Ok(PathBuf::from(home).join(home_suffix));
    }

    Ok(env::current_dir()?.join(home_suffix))
  }

  pub(crate) fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let base_url = lookup("GAMECAT_BASE_URL")
      .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
      .trim()
      .trim_end_matches('/')
      .to_string();

    ensure!(
      base_url.starts_with("http://") || base_url.starts_with("https://"),
      "GAMECAT_BASE_URL must be an http or https URL, got `{base_url}`"
    );

    let page = match lookup("GAMECAT_PAGE") {
      Some(value) => PageSource::parse(&value),
      None => PageSource::File(
        Self::base_dir(&lookup, "XDG_CONFIG_HOME", ".config")?
          .join("gamecat")
          .join("page.json"),
      ),
    };

    let log_dir = match lookup("GAMECAT_LOG_DIR") {
      Some(dir) => PathBuf::from(dir),
      None => Self::base_dir(&lookup, "XDG_STATE_HOME", ".local/state")?
        .join("gamecat"),
    };

    Ok(Self {
      base_url,
      log_dir,
      page,
      session: lookup("GAMECAT_SESSION"),
    })
  }
}
