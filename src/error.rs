use super::*;

#[derive(Debug, Error)]
pub(crate) enum ClientError {
  #[error("could not decode `{field}` in response")]
  Decode {
    field: &'static str,
    #[source]
    source: serde_json::Error,
  },
  #[error("response is not a GraphQL envelope")]
  Envelope(#[source] serde_json::Error),
  #[error("GraphQL error: {}", .messages.join("; "))]
  GraphQl { messages: Vec<String> },
  #[error("request failed")]
  Http(#[from] reqwest::Error),
  #[error("response is missing `{field}`")]
  MissingField { field: &'static str },
  #[error("server responded with {status}")]
  Status { status: StatusCode },
}
