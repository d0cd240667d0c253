use super::*;

const DEFAULT_ENDPOINT: &str = "http://localhost:5001/api/graphql";
const DEFAULT_SUBREDDIT_LIMIT: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// On-disk settings. Every field is optional. Flags and their environment
/// variables override these, and unset fields fall back to defaults.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
  pub(crate) api_key: Option<String>,
  pub(crate) endpoint: Option<String>,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) subreddit_limit: Option<usize>,
  pub(crate) timeout_secs: Option<u64>,
  pub(crate) username: Option<String>,
}

impl ConfigFile {
  pub(crate) fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let contents = fs::read_to_string(path)
      .with_context(|| format!("could not read {}", path.display()))?;

    toml::from_str(&contents)
      .with_context(|| format!("could not parse {}", path.display()))
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) api_key: Option<String>,
  pub(crate) endpoint: String,
  pub(crate) log_file: PathBuf,
  pub(crate) subreddit_limit: usize,
  pub(crate) timeout: Duration,
  pub(crate) topic: Option<String>,
  pub(crate) username: Option<String>,
}

impl Config {
  fn base_dir(xdg_var: &str, home_suffix: &[&str]) -> Result<PathBuf> {
    if let Ok(dir) = env::var(xdg_var) {
      return Ok(PathBuf::from(dir));
    }

    let mut base = if let Ok(home) = env::var("HOME") {
      PathBuf::from(home)
    } else {
      env::current_dir()?
    };

    base.extend(home_suffix);

    Ok(base)
  }

  fn default_config_path() -> Result<PathBuf> {
    Ok(
      Self::base_dir("XDG_CONFIG_HOME", &[".config"])?
        .join("rdt")
        .join("config.toml"),
    )
  }

  fn default_log_file() -> Result<PathBuf> {
    Ok(
      Self::base_dir("XDG_STATE_HOME", &[".local", "state"])?
        .join("rdt")
        .join("rdt.log"),
    )
  }

  pub(crate) fn load(arguments: Arguments) -> Result<Self> {
    let path = match &arguments.config {
      Some(path) => path.clone(),
      None => Self::default_config_path()?,
    };

    let file = ConfigFile::load(&path)?;

    Self::resolve(arguments, file)
  }

  pub(crate) fn resolve(arguments: Arguments, file: ConfigFile) -> Result<Self> {
    let log_file = match arguments.log_file.or(file.log_file) {
      Some(path) => path,
      None => Self::default_log_file()?,
    };

    let subreddit_limit = file.subreddit_limit.unwrap_or(DEFAULT_SUBREDDIT_LIMIT);

    if subreddit_limit == 0 {
      bail!("subreddit_limit must be at least 1");
    }

    Ok(Self {
      api_key: arguments
        .api_key
        .or(file.api_key)
        .filter(|key| !key.trim().is_empty()),
      endpoint: arguments
        .endpoint
        .or(file.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
      log_file,
      subreddit_limit,
      timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
      topic: arguments.topic,
      username: arguments.username.or(file.username),
    })
  }
}
