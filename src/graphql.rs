use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
  pub(crate) query: &'a str,
  pub(crate) variables: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
  pub(crate) message: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GraphQlResponse {
  #[serde(default)]
  pub(crate) data: Option<Map<String, Value>>,
  #[serde(default, deserialize_with = "deserialize_list")]
  pub(crate) errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
  /// Pulls one root field out of `data`. A `null` field is `Ok(None)`; a
  /// missing field or a missing `data` object is an error.
  pub(crate) fn field<T>(
    mut self,
    field: &'static str,
  ) -> Result<Option<T>, ClientError>
  where
    T: DeserializeOwned,
  {
    if !self.errors.is_empty() {
      return Err(Self::graphql_error(self.errors));
    }

    let value = self
      .data
      .as_mut()
      .and_then(|data| data.remove(field))
      .ok_or(ClientError::MissingField { field })?;

    if value.is_null() {
      return Ok(None);
    }

    serde_json::from_value(value)
      .map(Some)
      .map_err(|source| ClientError::Decode { field, source })
  }

  /// Decodes a response body. A failed status is reported as such unless the
  /// body is an envelope whose `errors` explain the failure.
  pub(crate) fn from_http(
    status: StatusCode,
    body: &[u8],
  ) -> Result<Self, ClientError> {
    let envelope = serde_json::from_slice::<Self>(body);

    if status.is_success() {
      return envelope.map_err(ClientError::Envelope);
    }

    match envelope {
      Ok(response) if !response.errors.is_empty() => {
        Err(Self::graphql_error(response.errors))
      }
      _ => Err(ClientError::Status { status }),
    }
  }

  fn graphql_error(errors: Vec<GraphQlError>) -> ClientError {
    ClientError::GraphQl {
      messages: errors.into_iter().map(|error| error.message).collect(),
    }
  }

  pub(crate) fn list<T>(self, field: &'static str) -> Result<Vec<T>, ClientError>
  where
    T: DeserializeOwned,
  {
    Ok(self.field(field)?.unwrap_or_default())
  }

  pub(crate) fn required<T>(self, field: &'static str) -> Result<T, ClientError>
  where
    T: DeserializeOwned,
  {
    self.field(field)?.ok_or(ClientError::MissingField { field })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn response(json: &str) -> GraphQlResponse {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn errors_take_precedence_and_keep_every_message() {
    let error = response(
      r#"{"data": {"getVote": []}, "errors": [{"message": "bad id"}, {"message": "denied"}]}"#,
    )
    .list::<Vote>("getVote")
    .unwrap_err();

    match &error {
      ClientError::GraphQl { messages } => {
        assert_eq!(messages, &["bad id".to_string(), "denied".to_string()]);
      }
      other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(error.to_string(), "GraphQL error: bad id; denied");
  }

  #[test]
  fn rejected_request_keeps_graphql_messages() {
    let error = GraphQlResponse::from_http(
      StatusCode::BAD_REQUEST,
      br#"{"data": null, "errors": [{"message": "Variable \"$id\" is required"}]}"#,
    )
    .unwrap_err();

    match error {
      ClientError::GraphQl { messages } => {
        assert_eq!(messages, vec![r#"Variable "$id" is required"#.to_string()]);
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn rejected_request_without_envelope_reports_status() {
    for body in [&b"<html>bad gateway</html>"[..], &br#"{"data": null}"#[..]] {
      assert!(matches!(
        GraphQlResponse::from_http(StatusCode::BAD_GATEWAY, body),
        Err(ClientError::Status { status }) if status == StatusCode::BAD_GATEWAY
      ));
    }

    assert_eq!(
      ClientError::Status {
        status: StatusCode::UNAUTHORIZED
      }
      .to_string(),
      "server responded with 401 Unauthorized"
    );
  }

  #[test]
  fn successful_request_must_be_an_envelope() {
    assert!(matches!(
      GraphQlResponse::from_http(StatusCode::OK, b"not json"),
      Err(ClientError::Envelope(_))
    ));

    let body = br#"{"data": {"getVote": []}}"#;

    let votes = GraphQlResponse::from_http(StatusCode::OK, body)
      .unwrap()
      .list::<Vote>("getVote")
      .unwrap();

    assert!(votes.is_empty());
  }

  #[test]
  fn null_lookup_is_none() {
    let subreddit = response(r#"{"data": {"getSubredditByTopic": null}}"#)
      .field::<Subreddit>("getSubredditByTopic")
      .unwrap();

    assert_eq!(subreddit, None);
  }

  #[test]
  fn null_list_is_empty() {
    let votes = response(r#"{"data": {"getVote": null}}"#)
      .list::<Vote>("getVote")
      .unwrap();

    assert!(votes.is_empty());
  }

  #[test]
  fn missing_field_and_missing_data_are_errors() {
    assert!(matches!(
      response(r#"{"data": {}}"#).list::<Vote>("getVote"),
      Err(ClientError::MissingField { field: "getVote" })
    ));

    assert!(matches!(
      response(r#"{"data": null}"#).field::<Post>("getPost"),
      Err(ClientError::MissingField { field: "getPost" })
    ));
  }

  #[test]
  fn null_mutation_result_is_an_error() {
    assert!(matches!(
      response(r#"{"data": {"insertVote": null}}"#).required::<Vote>("insertVote"),
      Err(ClientError::MissingField { field: "insertVote" })
    ));
  }

  #[test]
  fn malformed_field_is_a_decode_error() {
    assert!(matches!(
      response(r#"{"data": {"insertSubreddit": {"id": 1}}}"#)
        .required::<Subreddit>("insertSubreddit"),
      Err(ClientError::Decode {
        field: "insertSubreddit",
        ..
      })
    ));
  }

  #[test]
  fn request_serializes_query_and_variables() {
    let request = GraphQlRequest {
      query: GET_VOTES_BY_POST_ID,
      variables: json!({ "id": "3" }),
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["variables"]["id"], "3");
    assert!(value["query"].as_str().unwrap().contains("getVote(id: $id)"));
  }
}
