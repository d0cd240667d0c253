use {
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::Arguments,
  category::Category,
  chrono::{DateTime, SecondsFormat, Utc},
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_draft::{CommentDraft, NewComment},
  composer::{Composer, Draft},
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  documents::{
    ADD_COMMENT, ADD_POST, ADD_SUBREDDIT, ADD_VOTE, GET_ALL_POSTS,
    GET_ALL_POSTS_BY_TOPIC, GET_POST_BY_POST_ID, GET_SUBREDDIT_BY_TOPIC,
    GET_SUBREDDITS_WITH_LIMIT, GET_VOTES_BY_POST_ID,
  },
  effect::Effect,
  error::ClientError,
  event::Event,
  futures::future::join_all,
  graphql::{GraphQlRequest, GraphQlResponse},
  help_view::HelpView,
  list_entry::ListEntry,
  list_view::ListView,
  mode::Mode,
  notification::Notification,
  post::Post,
  post_draft::{NewPost, PostDraft, PostField},
  post_view::PostView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  reqwest::{StatusCode, header::AUTHORIZATION},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::{Map, Value, json},
  session::Session,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  subreddit::Subreddit,
  tab::Tab,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  topic_input::TopicInput,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{
    centered_rect, deserialize_id, deserialize_list,
    deserialize_optional_string, format_comments, format_tally, time_ago,
    truncate, wrap_text,
  },
  vote::{NewVote, Vote, VoteDirection},
  vote_gate::VoteDecision,
  vote_state::VoteState,
  vote_summary::VoteSummary,
};

mod app;
mod arguments;
mod category;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_draft;
mod composer;
mod config;
mod documents;
mod effect;
mod error;
mod event;
mod graphql;
mod help_view;
mod list_entry;
mod list_view;
mod logging;
mod mode;
mod notification;
mod post;
mod post_draft;
mod post_view;
mod session;
mod state;
mod subreddit;
mod tab;
mod topic_input;
mod utils;
mod vote;
mod vote_gate;
mod vote_state;
mod vote_summary;

const LIST_STATUS: &str = "↑/k up • ↓/j down • enter open • u/d vote • n new post • / go to subreddit • q/esc quit • ? help";

const POST_STATUS: &str = "↑/k up • ↓/j down • u/d vote • c comment • o open image • r refresh • esc back";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_ENTRIES_STATUS: &str = "Loading posts...";
const LOADING_POST_STATUS: &str = "Loading post...";

const SIGN_IN_TO_COMMENT: &str = "Please sign in to comment";
const SIGN_IN_TO_POST: &str = "Sign in to post";
const SIGN_IN_TO_VOTE: &str = "You'll need to sign in to vote!";

const COMMENT_POSTED: &str = "Comment Successfully Posted!";
const CREATING_POST: &str = "Creating new post...";
const GENERIC_FAILURE: &str = "Whoops something went wrong!";
const NOTHING_TO_OPEN: &str = "Nothing to open";
const POST_CREATED: &str = "New Post Created!";
const POST_NOT_FOUND: &str = "Post not found";
const POSTING_COMMENT: &str = "Posting your comment...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous tab
  → / l   next tab
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first item
  end     jump to last item

Actions:
  enter   open the selected post or subreddit
  o       open the post image in your browser
  u       upvote the selected post
  d       downvote the selected post
  n       create a post
  /       go to a subreddit (type a topic, enter to open)
  r       reload
  q       quit rdt
  esc     close help or quit from the list
  ?       toggle this help

Post:
  ↑ / k   move through comments
  ↓ / j   move through comments
  u / d   vote on the post
  c       write a comment
  r       reload the post
  esc     return to the list
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load(Arguments::parse())?;

  logging::init(&config.log_file)?;

  info!(
    endpoint = %config.endpoint,
    signed_in = config.username.is_some(),
    "starting"
  );

  let client = Client::new(&config)?;

  let tabs = client
    .load_tabs(config.subreddit_limit)
    .await
    .context("could not reach the community API")?;

  let mut state = State::new(tabs, Session::new(config.username.clone()));

  if let Some(topic) = config
    .topic
    .as_deref()
    .map(|topic| topic.trim().trim_start_matches("r/"))
    .filter(|topic| !topic.is_empty())
  {
    state.open_topic(topic);
  }

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, state, config.subreddit_limit);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    tracing::error!("{error:#}");

    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
