use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "fuel-dashboard", author, about)]
pub struct Opts {
    /// Show only warnings and errors
    #[structopt(short = "s", long = "silent", conflicts_with = "verbose")]
    pub silent: bool,

    /// Show all log messages
    #[structopt(short = "v", long = "verbose", conflicts_with = "silent")]
    pub verbose: bool,

    /// Suppress timestamps in logs, useful with journald
    #[structopt(long = "suppress-log-timestamps")]
    pub suppress_log_timestamps: bool,

    /// Settings file
    #[structopt(
        long,
        parse(from_os_str),
        env = "FUEL_DASHBOARD_SETTINGS",
        default_value = "fuel-dashboard.toml"
    )]
    pub settings: PathBuf,

    /// Navixy session key, overrides the one from the settings
    #[structopt(long, env = "NAVIXY_HASH", hide_env_values = true)]
    pub hash: Option<String>,

    /// Write the page to the file instead of stdout
    #[structopt(short = "o", long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Write the loaded dashboard as JSON instead of HTML
    #[structopt(long = "dump-json")]
    pub dump_json: bool,
}
