//! Command-line surface of `xa`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use domain::value_objects::{TravelMode, UnitSystem};

/// Default project name
pub const DEFAULT_PROJECT_NAME: &str = "charlotte";
/// Default virtual environment name
pub const DEFAULT_VENV_NAME: &str = "venv";

/// xa - personal assistant scaffolding with a location and weather engine
#[derive(Debug, Parser)]
#[command(name = "xa")]
#[command(author, version, about = "Scaffold assistant projects and ask about places and weather", long_about = None)]
pub struct Cli {
    /// Log at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: ./config.toml when present)
    #[arg(long, global = true, env = "XA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level picked by the flags; debug wins over verbose over quiet
    #[must_use]
    pub const fn log_level(&self) -> Option<&'static str> {
        if self.debug {
            Some("debug")
        } else if self.verbose {
            Some("info")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a project, its profile and its virtual environment
    Create(CreateArgs),

    /// Describe the weather for a place and time window
    Weather(WeatherArgs),

    /// Travel distance and duration to a destination
    Distance(DistanceArgs),

    /// Coordinates and zone of a place
    Locate(LocateArgs),

    /// Index of a weekday counted from today
    Weekday(WeekdayArgs),
}

/// `xa create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(subcommand)]
    pub target: Option<CreateTarget>,

    /// Name of the project
    #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
    pub name: String,

    /// Directory the project is created in (default: current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Name of the virtual environment
    #[arg(long = "venv", default_value = DEFAULT_VENV_NAME)]
    pub venv_name: String,

    /// Directory copied as the project skeleton
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CreateTarget {
    /// Create only the project skeleton
    Project {
        /// Name of the project
        #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
        name: String,

        /// Directory the project is created in (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Directory copied as the project skeleton
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Fill in the profile of an existing project
    Profile {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Create the virtual environment of an existing project
    Venv {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Name of the virtual environment
        #[arg(long = "venv", default_value = DEFAULT_VENV_NAME)]
        venv_name: String,
    },
}

/// `xa weather`
#[derive(Debug, Args)]
pub struct WeatherArgs {
    /// Place to forecast (default: current position)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Days ahead, 1 to 7
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Hours ahead, 1 to 48
    #[arg(long, allow_negative_numbers = true)]
    pub hours: Option<i64>,

    /// Use imperial units
    #[arg(long)]
    pub imperial: bool,

    /// Print the report record as JSON
    #[arg(long)]
    pub json: bool,
}

/// `xa distance`
#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Destination place
    pub destination: String,

    /// Origin place (default: current position)
    #[arg(short, long)]
    pub origin: Option<String>,

    /// Travel mode: driving, walking, bicycling or transit
    #[arg(short, long, default_value = TravelMode::WALKING)]
    pub mode: String,

    /// Use imperial units
    #[arg(long)]
    pub imperial: bool,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

/// `xa locate`
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Place to resolve (default: current position)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Address field to report as the zone, e.g. city
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Print the place as JSON
    #[arg(long)]
    pub json: bool,
}

/// `xa weekday`
#[derive(Debug, Args)]
pub struct WeekdayArgs {
    /// Lowercase weekday name, e.g. friday
    pub day: String,

    /// Report the last index of the window instead
    #[arg(long)]
    pub next_week: bool,
}

/// Unit system from an `--imperial` flag
#[must_use]
pub const fn units(imperial: bool) -> UnitSystem {
    UnitSystem::from_metric(!imperial)
}
