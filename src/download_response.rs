use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct DownloadResponse {
  #[serde(default, deserialize_with = "deserialize_optional_lenient_string")]
  pub(crate) message: Option<String>,
  pub(crate) success: bool,
}

impl DownloadResponse {
  /// The text shown to the user, falling back to a generic one when the
  /// server sent no message.
  pub(crate) fn notice_text(&self) -> String {
    match self.message.as_deref().map(str::trim) {
      Some(message) if !message.is_empty() => message.to_string(),
      _ if self.success => DOWNLOAD_ACCEPTED.into(),
      _ => DOWNLOAD_REFUSED.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(json: &str) -> DownloadResponse {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn server_message_is_shown_as_is() {
    let response = parse(r#"{"success": false, "message": "Ya tienes este juego"}"#);

    assert_eq!(response.notice_text(), "Ya tienes este juego");
  }

  #[test]
  fn missing_or_blank_messages_fall_back() {
    assert_eq!(parse(r#"{"success": false}"#).notice_text(), DOWNLOAD_REFUSED);

    assert_eq!(
      parse(r#"{"success": false, "message": "  "}"#).notice_text(),
      DOWNLOAD_REFUSED
    );

    assert_eq!(
      parse(r#"{"success": true, "message": null}"#).notice_text(),
      DOWNLOAD_ACCEPTED
    );
  }

  #[test]
  fn success_flag_is_required() {
    assert!(serde_json::from_str::<DownloadResponse>(r#"{"message": "m"}"#).is_err());
  }
}
