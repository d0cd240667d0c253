//! GraphQL documents sent to the community API. Field selections mirror the
//! entity models one to one.

pub(crate) const ADD_COMMENT: &str = "\
mutation AddComment($post_id: ID!, $username: String!, $text: String!, $created_at: DateTime!) {
  insertComment(post_id: $post_id, text: $text, username: $username, created_at: $created_at) {
    created_at
    id
    post_id
    text
    username
  }
}";

pub(crate) const ADD_POST: &str = "\
mutation AddPost($body: String!, $subreddit_id: ID!, $title: String!, $username: String!, $image: String!) {
  insertPost(body: $body, subreddit_id: $subreddit_id, title: $title, username: $username, image: $image) {
    body
    created_at
    id
    subreddit_id
    title
    username
    image
  }
}";

pub(crate) const ADD_SUBREDDIT: &str = "\
mutation AddSubreddit($topic: String!) {
  insertSubreddit(topic: $topic) {
    id
    topic
    created_at
  }
}";

pub(crate) const ADD_VOTE: &str = "\
mutation AddVote($post_id: ID!, $username: String!, $upvote: Boolean!, $created_at: DateTime!) {
  insertVote(post_id: $post_id, username: $username, upvote: $upvote, created_at: $created_at) {
    created_at
    id
    post_id
    upvote
    username
  }
}";

pub(crate) const GET_ALL_POSTS: &str = "\
query GetAllPosts {
  getAllPost {
    body
    created_at
    id
    image
    title
    subreddit_id
    username
    comment {
      created_at
      id
      post_id
      text
      username
    }
    subreddit {
      created_at
      id
      topic
    }
    vote {
      created_at
      id
      post_id
      upvote
      username
    }
  }
}";

pub(crate) const GET_ALL_POSTS_BY_TOPIC: &str = "\
query GetPostsByTopic($topic: String!) {
  getPostListByTopic(topic: $topic) {
    body
    created_at
    id
    image
    title
    subreddit_id
    username
    comment {
      created_at
      id
      post_id
      text
      username
    }
    subreddit {
      created_at
      id
      topic
    }
    vote {
      created_at
      id
      post_id
      upvote
      username
    }
  }
}";

pub(crate) const GET_POST_BY_POST_ID: &str = "\
query GetPost($post_id: ID!) {
  getPost(post_id: $post_id) {
    body
    created_at
    id
    image
    title
    subreddit_id
    username
    comment {
      created_at
      id
      post_id
      text
      username
    }
    subreddit {
      created_at
      id
      topic
    }
    vote {
      created_at
      id
      post_id
      upvote
      username
    }
  }
}";

pub(crate) const GET_SUBREDDIT_BY_TOPIC: &str = "\
query GetSubredditByTopic($topic: String!) {
  getSubredditByTopic(topic: $topic) {
    id
    topic
    created_at
  }
}";

pub(crate) const GET_SUBREDDITS_WITH_LIMIT: &str = "\
query GetSubreddits($limit: Int!) {
  getSubredditWithLimit(limit: $limit) {
    created_at
    id
    topic
  }
}";

pub(crate) const GET_VOTES_BY_POST_ID: &str = "\
query GetVotes($id: ID!) {
  getVote(id: $id) {
    created_at
    id
    post_id
    upvote
    username
  }
}";
