use super::*;

fn scalar_to_string<E>(value: Value) -> Result<Option<String>, E>
where
  E: de::Error,
{
  match value {
    Value::Null => Ok(None),
    Value::String(s) => Ok(Some(s)),
    Value::Number(n) => Ok(Some(n.to_string())),
    Value::Bool(b) => Err(E::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Value::Array(_) => {
      Err(E::invalid_type(Unexpected::Seq, &"string or number"))
    }
    Value::Object(_) => {
      Err(E::invalid_type(Unexpected::Map, &"string or number"))
    }
  }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to leave a one
/// cell margin when `area` is too small.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = area.width.saturating_sub(2).clamp(1, width.max(1)).min(area.width);
  let height = area
    .height
    .saturating_sub(2)
    .clamp(1, height.max(1))
    .min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  scalar_to_string(Value::deserialize(deserializer)?)?
    .ok_or_else(|| de::Error::invalid_type(Unexpected::Unit, &"an id"))
}

pub(crate) fn deserialize_list<'de, D, T>(
  deserializer: D,
) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)? {
    None => Ok(None),
    Some(value) => scalar_to_string(value),
  }
}

pub(crate) fn format_comments(count: usize) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_tally(tally: i64) -> String {
  match tally {
    1 | -1 => format!("{tally} vote"),
    _ => format!("{tally} votes"),
  }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  let raw = raw.trim();

  if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
    return Some(parsed.with_timezone(&Utc));
  }

  raw
    .parse::<i64>()
    .ok()
    .and_then(DateTime::<Utc>::from_timestamp_millis)
}

fn plural(count: i64, unit: &str) -> String {
  if count == 1 {
    format!("1 {unit} ago")
  } else {
    format!("{count} {unit}s ago")
  }
}

pub(crate) fn time_ago(raw: Option<&str>, now: DateTime<Utc>) -> Option<String> {
  let created = parse_timestamp(raw?)?;

  let seconds = now.signed_duration_since(created).num_seconds().max(0);

  Some(match seconds {
    0..60 => "just now".to_string(),
    60..3_600 => plural(seconds / 60, "minute"),
    3_600..86_400 => plural(seconds / 3_600, "hour"),
    86_400..2_592_000 => plural(seconds / 86_400, "day"),
    2_592_000..31_536_000 => plural(seconds / 2_592_000, "month"),
    _ => plural(seconds / 31_536_000, "year"),
  })
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
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct IdWrapper {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct ListWrapper {
    #[serde(default, deserialize_with = "deserialize_list")]
    items: Vec<u32>,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct OptionalWrapper {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    value: Option<String>,
  }

  fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-10T12:00:00Z")
      .unwrap()
      .with_timezone(&Utc)
  }

  fn parse_value(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<OptionalWrapper>(input).map(|wrapper| wrapper.value)
  }

  #[test]
  fn centered_rect_fits_inside_area() {
    let area = Rect::new(0, 0, 100, 40);

    assert_eq!(centered_rect(area, 20, 10), Rect::new(40, 15, 20, 10));
    assert_eq!(centered_rect(area, 200, 80), Rect::new(1, 1, 98, 38));
  }

  #[test]
  fn deserialize_id_accepts_strings_and_numbers() {
    assert_eq!(
      serde_json::from_str::<IdWrapper>(r#"{"id": "17"}"#).unwrap().id,
      "17"
    );

    assert_eq!(
      serde_json::from_str::<IdWrapper>(r#"{"id": 17}"#).unwrap().id,
      "17"
    );

    assert!(serde_json::from_str::<IdWrapper>(r#"{"id": null}"#).is_err());
    assert!(serde_json::from_str::<IdWrapper>(r#"{"id": true}"#).is_err());
  }

  #[test]
  fn deserialize_list_treats_null_and_missing_as_empty() {
    assert_eq!(
      serde_json::from_str::<ListWrapper>(r#"{"items": null}"#)
        .unwrap()
        .items,
      Vec::<u32>::new()
    );

    assert_eq!(
      serde_json::from_str::<ListWrapper>("{}").unwrap().items,
      Vec::<u32>::new()
    );

    assert_eq!(
      serde_json::from_str::<ListWrapper>(r#"{"items": [1, 2]}"#)
        .unwrap()
        .items,
      vec![1, 2]
    );
  }

  #[test]
  fn deserialize_optional_string_supports_string_numbers_and_null() {
    assert_eq!(
      parse_value(r#"{"value": "hello"}"#).unwrap(),
      Some("hello".to_string())
    );

    assert_eq!(
      parse_value(r#"{"value": 42}"#).unwrap(),
      Some("42".to_string())
    );

    assert_eq!(parse_value(r#"{"value": null}"#).unwrap(), None);
    assert_eq!(parse_value("{}").unwrap(), None);

    assert!(
      parse_value(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );
  }

  #[test]
  fn format_tally_handles_singular_and_negative() {
    assert_eq!(format_tally(1), "1 vote");
    assert_eq!(format_tally(-1), "-1 vote");
    assert_eq!(format_tally(0), "0 votes");
    assert_eq!(format_tally(-4), "-4 votes");
  }

  #[test]
  fn format_comments_handles_singular_and_plural() {
    assert_eq!(format_comments(0), "0 comments");
    assert_eq!(format_comments(1), "1 comment");
    assert_eq!(format_comments(12), "12 comments");
  }

  #[test]
  fn time_ago_formats_rfc3339_timestamps() {
    assert_eq!(
      time_ago(Some("2024-05-10T11:59:30Z"), now()).as_deref(),
      Some("just now")
    );

    assert_eq!(
      time_ago(Some("2024-05-10T11:59:00Z"), now()).as_deref(),
      Some("1 minute ago")
    );

    assert_eq!(
      time_ago(Some("2024-05-10T09:00:00+00:00"), now()).as_deref(),
      Some("3 hours ago")
    );

    assert_eq!(
      time_ago(Some("2024-05-08T12:00:00Z"), now()).as_deref(),
      Some("2 days ago")
    );

    assert_eq!(
      time_ago(Some("2022-05-10T12:00:00Z"), now()).as_deref(),
      Some("2 years ago")
    );
  }

  #[test]
  fn time_ago_accepts_epoch_milliseconds() {
    let millis = now().timestamp_millis() - 5 * 60 * 1000;

    assert_eq!(
      time_ago(Some(&millis.to_string()), now()).as_deref(),
      Some("5 minutes ago")
    );
  }

  #[test]
  fn time_ago_is_none_for_missing_or_garbage() {
    assert_eq!(time_ago(None, now()), None);
    assert_eq!(time_ago(Some("yesterday"), now()), None);
  }

  #[test]
  fn time_ago_clamps_future_timestamps() {
    assert_eq!(
      time_ago(Some("2024-05-11T12:00:00Z"), now()).as_deref(),
      Some("just now")
    );
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }
}
