use {
  super::*,
  reqwest::header::{COOKIE, HeaderMap, HeaderValue},
};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) async fn add_comment(
    &self,
    game_id: &str,
    content: &str,
  ) -> Result<CommentSubmission> {
    let response = self
      .client
      .post(self.endpoint("/add_comment"))
      .json(&NewComment { content, game_id })
      .send()
      .await?;

    let status = response.status();

    response
      .json::<CommentSubmission>()
      .await
      .with_context(|| format!("unexpected comment response ({status})"))
  }

  pub(crate) async fn download_game(
    &self,
    game_id: &str,
  ) -> Result<DownloadResponse> {
    Ok(
      self
        .client
        .get(self.endpoint(&format!("/download_game/{game_id}")))
        .send()
        .await?
        .error_for_status()?
        .json::<DownloadResponse>()
        .await?,
    )
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }

  pub(crate) async fn fetch_comments(
    &self,
    game_id: &str,
  ) -> Result<Vec<Comment>> {
    Ok(
      self
        .client
        .get(self.endpoint(&format!("/get_comments/{game_id}")))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<Vec<Comment>>>()
        .await?
        .unwrap_or_default(),
    )
  }

  pub(crate) async fn load_page(&self, source: &PageSource) -> Result<Page> {
    let data = match source {
      PageSource::File(path) => tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?,
      PageSource::Url(url) => self
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?,
    };

    Page::from_json(&data)
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let mut headers = HeaderMap::new();

    if let Some(session) = &config.session {
      let mut value = HeaderValue::from_str(session)
        .context("GAMECAT_SESSION is not a valid cookie header")?;

      value.set_sensitive(true);

      headers.insert(COOKIE, value);
    }

    Ok(Self {
      base_url: config.base_url.clone(),
      client: reqwest::Client::builder()
        .default_headers(headers)
        .build()?,
    })
  }

  /// Resolves a navigation `href` the way a browser would against the
  /// server root.
  pub(crate) fn resolve_url(&self, href: &str) -> String {
    let href = href.trim();

    if href.starts_with("http://") || href.starts_with("https://") {
      href.to_string()
    } else if href.starts_with('/') {
      self.endpoint(href)
    } else {
      self.endpoint(&format!("/{href}"))
    }
  }
}
