use super::*;

#[derive(Debug, Default, Parser)]
#[command(
  name = "rdt",
  version,
  about = "Browse, vote, and post on a Reddit-style GraphQL community"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "RDT_API_KEY",
    hide_env_values = true,
    help = "API key sent as `Authorization: Apikey <key>`"
  )]
  pub(crate) api_key: Option<String>,
  #[arg(long, env = "RDT_CONFIG", help = "Path to the TOML config file")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, env = "RDT_ENDPOINT", help = "GraphQL endpoint URL")]
  pub(crate) endpoint: Option<String>,
  #[arg(long, env = "RDT_LOG_FILE", help = "Where to write logs")]
  pub(crate) log_file: Option<PathBuf>,
  #[arg(long, help = "Open this subreddit on start")]
  pub(crate) topic: Option<String>,
  #[arg(long, env = "RDT_USERNAME", help = "Sign in as this user")]
  pub(crate) username: Option<String>,
}
