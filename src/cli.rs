use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use ftc_events::{TimeRange, TournamentLevel};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// FIRST Tech Challenge Events API client
///
/// Queries the FTC Events API and prints the decoded response as JSON.
/// Credentials come from the config file (see `ftc_events config`) or the
/// FTC_API_USERNAME and FTC_API_KEY environment variables.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Use a different API server for this run, e.g. a local mock.
    #[arg(long, global = true, value_name = "URL", help_heading = "Connection")]
    pub server: Option<String>,

    /// Also print debug logs to stderr.
    #[arg(long, global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Match number bounds shared by the match, schedule and score commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First match number to include
    #[arg(long)]
    pub start: Option<u32>,

    /// Last match number to include
    #[arg(long)]
    pub end: Option<u32>,
}

impl From<&RangeArgs> for TimeRange {
    fn from(args: &RangeArgs) -> Self {
        TimeRange {
            start: args.start,
            end: args.end,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConfigUpdate {
    /// API server base URL
    #[arg(long = "set-server", value_name = "URL")]
    pub new_server: Option<String>,

    /// Account username
    #[arg(long)]
    pub username: Option<String>,

    /// Authorization key issued for the account
    #[arg(long = "key")]
    pub authorization_key: Option<String>,

    /// Persistent log file path
    #[arg(long = "set-log-file", conflicts_with = "clear_log_file")]
    pub new_log_file: Option<String>,

    /// Revert to the default log location
    #[arg(long = "clear-log-file")]
    pub clear_log_file: bool,

    /// Request timeout in seconds
    #[arg(long = "timeout")]
    pub http_timeout_seconds: Option<u64>,

    /// Skip TLS certificate verification (true/false)
    #[arg(long = "accept-invalid-certs", value_name = "BOOL")]
    pub accept_invalid_certs: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// API status and current season
    Index,

    /// Season summary
    Season { season: i32 },

    /// Events of a season
    Events {
        season: i32,
        #[arg(long = "event")]
        event_code: Option<String>,
        #[arg(long = "team")]
        team_number: Option<u32>,
    },

    /// Teams of a season; all pages unless --page is given
    Teams {
        season: i32,
        #[arg(long = "team")]
        team_number: Option<u32>,
        #[arg(long = "event")]
        event_code: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },

    /// Match results of an event
    Matches {
        season: i32,
        event_code: String,
        #[arg(long = "level")]
        tournament_level: Option<TournamentLevel>,
        #[arg(long = "team")]
        team_number: Option<u32>,
        #[arg(long = "match")]
        match_number: Option<u32>,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Match schedule of an event
    Schedule {
        season: i32,
        event_code: String,
        #[arg(long = "level")]
        tournament_level: Option<TournamentLevel>,
        #[arg(long = "team")]
        team_number: Option<u32>,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Schedule merged with results for one level (qual or playoff)
    HybridSchedule {
        season: i32,
        event_code: String,
        level: TournamentLevel,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Detailed scores for one level (qual or playoff)
    Scores {
        season: i32,
        event_code: String,
        level: TournamentLevel,
        #[arg(long = "team")]
        team_number: Option<u32>,
        #[arg(long = "match")]
        match_number: Option<u32>,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Awards of an event, or of a team across the season
    Awards {
        season: i32,
        #[arg(required_unless_present = "team_number")]
        event_code: Option<String>,
        #[arg(long = "team")]
        team_number: Option<u32>,
    },

    /// Award types offered in a season
    AwardList { season: i32 },

    /// Qualification rankings of an event
    Rankings {
        season: i32,
        event_code: String,
        #[arg(long = "team")]
        team_number: Option<u32>,
        #[arg(long)]
        top: Option<u32>,
    },

    /// Playoff alliances of an event
    Alliances { season: i32, event_code: String },

    /// Alliance selection steps of an event
    AllianceSelection { season: i32, event_code: String },

    /// Teams advancing from an event
    Advancement {
        season: i32,
        event_code: String,
        #[arg(long)]
        exclude_skipped: bool,
    },

    /// Where an event's teams advanced from
    AdvancementSource { season: i32, event_code: String },

    /// Leagues of a season
    Leagues {
        season: i32,
        #[arg(long = "region")]
        region_code: Option<String>,
        #[arg(long = "league")]
        league_code: Option<String>,
    },

    /// Team numbers in a league
    LeagueMembers {
        season: i32,
        region_code: String,
        league_code: String,
    },

    /// Cumulative rankings of a league
    LeagueRankings {
        season: i32,
        region_code: String,
        league_code: String,
    },

    /// Update and save configuration settings
    Config(ConfigUpdate),

    /// List current configuration settings
    ListConfig,
}

impl Command {
    /// Configuration commands run without building an API client.
    pub fn is_config_command(&self) -> bool {
        matches!(self, Command::Config(_) | Command::ListConfig)
    }
}
