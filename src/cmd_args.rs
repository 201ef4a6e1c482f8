use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile section to read from the profile file
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(long, help = "API base URL, e.g. https://pokeapi.co/api/v2")]
    base_url: Option<String>,

    #[clap(long, help = "number of entries to load initially")]
    page_size: Option<usize>,

    /// Skips the login form when given
    #[clap(short = 'u', long, help = "log in as this user on startup")]
    user: Option<String>,

    #[clap(long, help = "write logs to this file")]
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    base_url: Option<String>,
    page_size: Option<usize>,
    user: Option<String>,
    log_file: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            base_url: args.base_url,
            page_size: args.page_size,
            user: args.user,
            log_file: args.log_file,
        }
    }
}
