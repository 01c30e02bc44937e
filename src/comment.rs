use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Comment {
  #[serde(default, deserialize_with = "deserialize_lenient_string")]
  pub(crate) content: String,
  #[serde(default, deserialize_with = "deserialize_lenient_string")]
  pub(crate) created_at: String,
  #[serde(default, deserialize_with = "deserialize_lenient_string")]
  pub(crate) username: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_and_null_fields_become_empty_strings() {
    let comment = serde_json::from_str::<Comment>(
      r#"{"username": null, "content": "hola"}"#,
    )
    .unwrap();

    assert_eq!(
      comment,
      Comment {
        content: "hola".into(),
        created_at: String::new(),
        username: String::new(),
      }
    );
  }

  #[test]
  fn numeric_fields_are_rendered_as_text() {
    let comment = serde_json::from_str::<Comment>(
      r#"{"username": 42, "content": "gg", "created_at": 1700000000}"#,
    )
    .unwrap();

    assert_eq!(comment.username, "42");
    assert_eq!(comment.created_at, "1700000000");
  }
}
