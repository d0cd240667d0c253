use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_key: Option<String>,
  client: reqwest::Client,
  endpoint: String,
}

impl Client {
  fn comment_variables(comment: &NewComment) -> Value {
    json!({
      "created_at": comment.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
      "post_id": comment.post_id,
      "text": comment.text,
      "username": comment.username,
    })
  }

  /// Inserts a comment and returns the refetched post it belongs to.
  pub(crate) async fn create_comment(
    &self,
    comment: &NewComment,
  ) -> Result<Option<Post>> {
    self.insert_comment(comment).await?;
    self.fetch_post(&comment.post_id).await
  }

  /// Inserts a post, creating its subreddit first when the topic is new.
  pub(crate) async fn create_post(&self, post: &NewPost) -> Result<Post> {
    let subreddit = match self.fetch_subreddit_by_topic(&post.topic).await? {
      Some(subreddit) => subreddit,
      None => {
        info!(topic = %post.topic, "creating subreddit");
        self.insert_subreddit(&post.topic).await?
      }
    };

    self.insert_post(post, &subreddit.id).await
  }

  async fn execute(
    &self,
    operation: &'static str,
    query: &str,
    variables: Value,
  ) -> Result<GraphQlResponse, ClientError> {
    debug!(operation, "sending request");

    let mut request = self
      .client
      .post(&self.endpoint)
      .json(&GraphQlRequest { query, variables });

    if let Some(key) = &self.api_key {
      request = request.header(AUTHORIZATION, format!("Apikey {key}"));
    }

    let response = request.send().await?;

    let status = response.status();

    if !status.is_success() {
      warn!(operation, %status, "request rejected");
    }

    let response = GraphQlResponse::from_http(status, &response.bytes().await?)?;

    if !response.errors.is_empty() {
      warn!(
        operation,
        errors = response.errors.len(),
        "request returned errors"
      );
    }

    Ok(response)
  }

  pub(crate) async fn fetch_all_posts(&self) -> Result<Vec<Post>> {
    Ok(
      self
        .execute("getAllPost", GET_ALL_POSTS, json!({}))
        .await?
        .list("getAllPost")?,
    )
  }

  pub(crate) async fn fetch_category_items(
    &self,
    category: &Category,
    subreddit_limit: usize,
  ) -> Result<Vec<ListEntry>> {
    Ok(match category {
      Category::Communities => {
        ListEntry::from_subreddits(self.fetch_subreddits(subreddit_limit).await?)
      }
      Category::Home => ListEntry::from_posts(self.fetch_all_posts().await?),
      Category::Topic(topic) => {
        ListEntry::from_posts(self.fetch_posts_by_topic(topic).await?)
      }
    })
  }

  pub(crate) async fn fetch_post(&self, post_id: &str) -> Result<Option<Post>> {
    Ok(
      self
        .execute("getPost", GET_POST_BY_POST_ID, json!({ "post_id": post_id }))
        .await?
        .field("getPost")?,
    )
  }

  pub(crate) async fn fetch_posts_by_topic(&self, topic: &str) -> Result<Vec<Post>> {
    Ok(
      self
        .execute(
          "getPostListByTopic",
          GET_ALL_POSTS_BY_TOPIC,
          json!({ "topic": topic }),
        )
        .await?
        .list("getPostListByTopic")?,
    )
  }

  pub(crate) async fn fetch_subreddit_by_topic(
    &self,
    topic: &str,
  ) -> Result<Option<Subreddit>> {
    Ok(
      self
        .execute(
          "getSubredditByTopic",
          GET_SUBREDDIT_BY_TOPIC,
          json!({ "topic": topic }),
        )
        .await?
        .field("getSubredditByTopic")?,
    )
  }

  pub(crate) async fn fetch_subreddits(&self, limit: usize) -> Result<Vec<Subreddit>> {
    Ok(
      self
        .execute(
          "getSubredditWithLimit",
          GET_SUBREDDITS_WITH_LIMIT,
          json!({ "limit": limit }),
        )
        .await?
        .list("getSubredditWithLimit")?,
    )
  }

  pub(crate) async fn fetch_votes(&self, post_id: &str) -> Result<Vec<Vote>> {
    Ok(
      self
        .execute("getVote", GET_VOTES_BY_POST_ID, json!({ "id": post_id }))
        .await?
        .list("getVote")?,
    )
  }

  pub(crate) async fn insert_comment(&self, comment: &NewComment) -> Result<Comment> {
    Ok(
      self
        .execute(
          "insertComment",
          ADD_COMMENT,
          Self::comment_variables(comment),
        )
        .await?
        .required("insertComment")?,
    )
  }

  pub(crate) async fn insert_post(
    &self,
    post: &NewPost,
    subreddit_id: &str,
  ) -> Result<Post> {
    Ok(
      self
        .execute(
          "insertPost",
          ADD_POST,
          Self::post_variables(post, subreddit_id),
        )
        .await?
        .required("insertPost")?,
    )
  }

  pub(crate) async fn insert_subreddit(&self, topic: &str) -> Result<Subreddit> {
    Ok(
      self
        .execute("insertSubreddit", ADD_SUBREDDIT, json!({ "topic": topic }))
        .await?
        .required("insertSubreddit")?,
    )
  }

  pub(crate) async fn insert_vote(&self, vote: &NewVote) -> Result<Vote> {
    Ok(
      self
        .execute("insertVote", ADD_VOTE, Self::vote_variables(vote))
        .await?
        .required("insertVote")?,
    )
  }

  pub(crate) async fn load_tabs(
    &self,
    subreddit_limit: usize,
  ) -> Result<Vec<(Tab, ListView<ListEntry>)>> {
    let tasks = Category::defaults().into_iter().map(|category| {
      let client = self.clone();

      async move {
        let entries = client
          .fetch_category_items(&category, subreddit_limit)
          .await
          .with_context(|| format!("failed to load {}", category.label()))?;

        Ok::<_, anyhow::Error>((Tab::new(category), ListView::new(entries)))
      }
    });

    join_all(tasks).await.into_iter().collect()
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .context("could not build HTTP client")?;

    Ok(Self {
      api_key: config.api_key.clone(),
      client,
      endpoint: config.endpoint.clone(),
    })
  }

  fn post_variables(post: &NewPost, subreddit_id: &str) -> Value {
    json!({
      "body": post.body,
      "image": post.image,
      "subreddit_id": subreddit_id,
      "title": post.title,
      "username": post.username,
    })
  }

  /// Inserts the vote, then refetches every vote on the post so the caller
  /// sees what the server now holds.
  pub(crate) async fn submit_vote(&self, vote: &NewVote) -> Result<Vec<Vote>> {
    self.insert_vote(vote).await?;
    self.fetch_votes(&vote.post_id).await
  }

  fn vote_variables(vote: &NewVote) -> Value {
    json!({
      "created_at": vote.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
      "post_id": vote.post_id,
      "upvote": vote.direction.is_up(),
      "username": vote.username,
    })
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-10T12:00:00Z")
      .unwrap()
      .with_timezone(&Utc)
  }

  #[test]
  fn vote_variables_match_insert_vote_arguments() {
    let vote = NewVote {
      created_at: now(),
      direction: VoteDirection::Down,
      post_id: "8".to_string(),
      username: "alice".to_string(),
    };

    assert_eq!(
      Client::vote_variables(&vote),
      json!({
        "created_at": "2024-05-10T12:00:00.000Z",
        "post_id": "8",
        "upvote": false,
        "username": "alice",
      })
    );
  }

  #[test]
  fn post_variables_carry_resolved_subreddit_id() {
    let post = NewPost {
      body: "hello".to_string(),
      image: String::new(),
      title: "First".to_string(),
      topic: "rust".to_string(),
      username: "alice".to_string(),
    };

    assert_eq!(
      Client::post_variables(&post, "12"),
      json!({
        "body": "hello",
        "image": "",
        "subreddit_id": "12",
        "title": "First",
        "username": "alice",
      })
    );
  }

  #[test]
  fn comment_variables_are_timestamped() {
    let comment = NewComment {
      created_at: now(),
      post_id: "3".to_string(),
      text: "nice".to_string(),
      username: "bob".to_string(),
    };

    assert_eq!(
      Client::comment_variables(&comment),
      json!({
        "created_at": "2024-05-10T12:00:00.000Z",
        "post_id": "3",
        "text": "nice",
        "username": "bob",
      })
    );
  }

  #[tokio::test]
  async fn unreachable_endpoint_is_an_error() {
    let config = Config {
      api_key: Some("key".to_string()),
      endpoint: "http://127.0.0.1:9/graphql".to_string(),
      log_file: PathBuf::from("/tmp/rdt-test.log"),
      subreddit_limit: 10,
      timeout: Duration::from_secs(2),
      topic: None,
      username: None,
    };

    let client = Client::new(&config).unwrap();

    assert!(client.fetch_votes("1").await.is_err());
  }
}
