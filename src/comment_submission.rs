use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentSubmission {
  #[serde(default, deserialize_with = "deserialize_optional_lenient_string")]
  pub(crate) message: Option<String>,
  pub(crate) success: bool,
}

impl CommentSubmission {
  pub(crate) fn failure_message(&self) -> String {
    format!(
      "Error al agregar comentario: {}",
      self.message.as_deref().unwrap_or("error desconocido")
    )
  }
}
