use super::*;

fn lenient_string(
  value: Option<Value>,
) -> Result<Option<String>, Unexpected<'static>> {
  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(Unexpected::Bool(b)),
    Some(Value::Array(_)) => Err(Unexpected::Seq),
    Some(Value::Object(_)) => Err(Unexpected::Map),
  }
}

/// Accepts a string, a number or null. Null becomes the empty string.
pub(crate) fn deserialize_lenient_string<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  deserialize_optional_lenient_string(deserializer)
    .map(Option::unwrap_or_default)
}

pub(crate) fn deserialize_optional_lenient_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  lenient_string(Option::<Value>::deserialize(deserializer)?).map_err(
    |unexpected| de::Error::invalid_type(unexpected, &"string or number"),
  )
}

/// Centers a box sized to fit `text` plus its border inside `area`.
pub(crate) fn centered_area(area: Rect, text: &str) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let (line_count, max_line_width) =
    text
      .lines()
      .fold((0usize, 0usize), |(count, width), line| {
        (count.saturating_add(1), width.max(line.chars().count()))
      });

  let desired_width =
    saturating_usize_to_u16(max_line_width.saturating_add(4)).max(1);

  let desired_height =
    saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, desired_width).min(area.width);
  let height = available_height.clamp(1, desired_height).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.lines() {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
      let word_width = word.chars().count();

      if current.is_empty() {
        current.push_str(word);
        current_width = word_width;
      } else if current_width + 1 + word_width <= width {
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
      } else {
        lines.push(std::mem::take(&mut current));
        current.push_str(word);
        current_width = word_width;
      }
    }

    lines.push(current);
  }

  lines
}
