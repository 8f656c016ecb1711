use clap::{Parser, Subcommand};
use docbase::config::DEFAULT_PROFILE;
use std::path::PathBuf;

/// Environment variables that switch on verbose output when set to anything
/// other than an empty string, `0` or `false`.
pub const VERBOSE_ENV_VARS: [&str; 3] = ["DOCBASE_VERBOSE", "DOCBASE_DEBUG", "DEBUG"];

/// Returns the version string, with the git hash for non-release builds.
/// Format: "0.2.0" for releases, "0.2.0 (rev: abc1234)" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{} (rev: {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "docbase", bin_name = "docbase", version = get_version())]
#[command(about = "CLI client for the DocBase API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (also DOCBASE_VERBOSE, DOCBASE_DEBUG, DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ACCESS_TOKEN for the DocBase API
    #[arg(long, global = true, env = "DOCBASE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Team NAME on docbase.io
    #[arg(long, global = true, env = "DOCBASE_DOMAIN")]
    pub domain: Option<String>,

    /// Profile to read from the config file
    #[arg(long, global = true, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Path of the config file
    #[arg(long, global = true, env = "DOCBASE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The `--verbose` flag or any of [`VERBOSE_ENV_VARS`].
    pub fn is_verbose(&self) -> bool {
        self.verbose || VERBOSE_ENV_VARS.iter().any(|name| env_flag(name))
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| is_truthy(&v)).unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show post title and body
    #[command(display_order = 1)]
    View {
        /// POST_ID
        id: Option<String>,

        /// NUM of body lines to display; 0 displays all
        #[arg(short, long, default_value_t = 0)]
        lines: usize,

        /// Open the post in the browser
        #[arg(short, long)]
        web: bool,
    },

    /// Search and list posts
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search query, e.g. "tag:rust author:me"
        #[arg(short, long)]
        query: Option<String>,

        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Number of posts on a page
        #[arg(long = "per-page", default_value_t = 20)]
        per_page: u32,

        /// Display the Total/Next/Prev footer
        #[arg(short, long)]
        meta: bool,
    },

    /// Create a new post; opens the editor unless a body is given
    #[command(display_order = 3)]
    New {
        /// Title of the post (defaults to "<today> memo")
        #[arg(short, long)]
        title: Option<String>,

        /// Body text
        #[arg(short, long, conflicts_with = "body_file")]
        body: Option<String>,

        /// PATH of a file holding the body
        #[arg(long)]
        body_file: Option<PathBuf>,
    },

    /// Edit the body of a post; opens the editor unless a body is given
    #[command(display_order = 4)]
    Edit {
        /// POST_ID
        id: Option<String>,

        /// Body text
        #[arg(short, long, conflicts_with = "body_file")]
        body: Option<String>,

        /// PATH of a file holding the body
        #[arg(long)]
        body_file: Option<PathBuf>,
    },

    /// Show the team's tags
    #[command(display_order = 5)]
    Tags,
}
