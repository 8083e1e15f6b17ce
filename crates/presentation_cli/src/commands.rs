//! Command execution
//!
//! Each subcommand writes its result to the given writer so the binary
//! decides where output goes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use application::ports::{ClockPort, ConnectivityPort, ForecastPort, GeocodingPort, RoutingPort};
use application::temporal::resolve_weekday_index;
use application::{
    DistanceEstimator, ForecastComposer, ForecastRequest, GeoResolver, PhraseChooser,
};
use chrono::Datelike;
use domain::entities::ForecastOutcome;
use domain::value_objects::TravelMode;
use infrastructure::{
    AppConfig, ForecastAdapter, HttpConnectivityProbe, MapsAdapter, ProfileDefaults,
    SystemClock, TemplateEngine,
};
use serde_json::json;
use tracing::{debug, instrument};

use crate::cli::{
    Commands, CreateArgs, CreateTarget, DistanceArgs, LocateArgs, WeatherArgs, WeekdayArgs,
    units,
};
use crate::scaffold::{self, ProfilePrompter, TerminalPrompter, VENV_PROGRAM};

/// Location and weather services wired to their adapters
pub struct Services {
    resolver: GeoResolver,
    estimator: DistanceEstimator,
    composer: ForecastComposer,
    templates: TemplateEngine,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}

impl Services {
    /// Wire services over arbitrary ports
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        routing: Arc<dyn RoutingPort>,
        forecast: Arc<dyn ForecastPort>,
        connectivity: Arc<dyn ConnectivityPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self> {
        let resolver = GeoResolver::new(geocoding);
        Ok(Self {
            estimator: DistanceEstimator::new(resolver.clone(), routing),
            composer: ForecastComposer::new(resolver.clone(), forecast, connectivity, clock),
            resolver,
            templates: TemplateEngine::new()?,
        })
    }

    /// Wire services to the HTTP oracles described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let maps = Arc::new(MapsAdapter::from_config(
            &config.maps.to_maps_config(),
            &config.nominatim.to_nominatim_config(),
        )?);
        let forecast = Arc::new(ForecastAdapter::with_config(
            config.forecast.to_weather_config(),
        )?);
        let probe = Arc::new(HttpConnectivityProbe::new(config.connectivity.url.clone()));
        debug!(probe = probe.url(), "Wired oracles");

        Ok(Self::new(maps.clone(), maps, forecast, probe, Arc::new(SystemClock))?
            .with_probe_timeout(config.connectivity.timeout()))
    }

    /// Replace the connectivity probe timeout
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.composer = self.composer.with_probe_timeout(timeout);
        self
    }

    /// Replace the phrase chooser used in forecasts
    #[must_use]
    pub fn with_chooser(mut self, chooser: Arc<dyn PhraseChooser>) -> Self {
        self.composer = self.composer.with_chooser(chooser);
        self
    }

    #[instrument(skip(self, out))]
    pub async fn weather(&self, args: &WeatherArgs, out: &mut dyn Write) -> Result<()> {
        let mut request = ForecastRequest::new().units(units(args.imperial));
        if let Some(location) = &args.location {
            request = request.at(location.clone());
        }
        if let Some(days) = args.days {
            request = request.days(days);
        }
        if let Some(hours) = args.hours {
            request = request.hours(hours);
        }

        match self.composer.compose(&request).await? {
            ForecastOutcome::Available(report) if args.json => {
                writeln!(out, "{}", serde_json::to_string(&report.record())?)?;
            },
            ForecastOutcome::Available(report) => {
                write!(out, "{}", self.templates.render_forecast(&report)?)?;
            },
            ForecastOutcome::Unavailable if args.json => {
                writeln!(out, "{}", json!({ "status": "unavailable" }))?;
            },
            ForecastOutcome::Unavailable => writeln!(out, "No internet connection")?,
        }
        Ok(())
    }

    #[instrument(skip(self, out))]
    pub async fn distance(&self, args: &DistanceArgs, out: &mut dyn Write) -> Result<()> {
        let mode = TravelMode::new(args.mode.as_str());
        let estimate = self
            .estimator
            .estimate(
                &args.destination,
                args.origin.as_deref(),
                &mode,
                units(args.imperial),
            )
            .await?;

        if args.json {
            writeln!(out, "{}", serde_json::to_string(&estimate)?)?;
        } else {
            write!(
                out,
                "{}",
                self.templates
                    .render_distance(&args.destination, &estimate, &mode)?
            )?;
        }
        Ok(())
    }

    #[instrument(skip(self, out))]
    pub async fn locate(&self, args: &LocateArgs, out: &mut dyn Write) -> Result<()> {
        let place = self
            .resolver
            .resolve_coordinates(args.location.as_deref(), args.zone.as_deref())
            .await?;

        if args.json {
            writeln!(
                out,
                "{}",
                json!({
                    "latitude": place.latitude(),
                    "longitude": place.longitude(),
                    "zone": place.zone,
                })
            )?;
        } else {
            writeln!(out, "{place}")?;
        }
        Ok(())
    }
}

/// Print the weekday index of `args.day` relative to the clock's today
///
/// Needs no oracle, so the oracle configuration is not consulted.
pub fn weekday(args: &WeekdayArgs, clock: &dyn ClockPort, out: &mut dyn Write) -> Result<()> {
    let today = clock.now().weekday();
    let index = resolve_weekday_index(&args.day, today, args.next_week)?;
    writeln!(out, "{index}")?;
    Ok(())
}

/// Run a parsed command
pub async fn run(command: &Commands, config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Create(args) => create(args, &config.profile, &TerminalPrompter, out),
        Commands::Weather(args) => Services::from_config(config)?.weather(args, out).await,
        Commands::Distance(args) => Services::from_config(config)?.distance(args, out).await,
        Commands::Locate(args) => Services::from_config(config)?.locate(args, out).await,
        Commands::Weekday(args) => weekday(args, &SystemClock, out),
    }
}

fn base_dir(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().context("Cannot read the current directory"),
    }
}

/// Run `xa create` and its subcommands
pub fn create(
    args: &CreateArgs,
    defaults: &ProfileDefaults,
    prompter: &dyn ProfilePrompter,
    out: &mut dyn Write,
) -> Result<()> {
    match &args.target {
        Some(CreateTarget::Project {
            name,
            path,
            template,
        }) => {
            let base = base_dir(path.as_deref())?;
            let project = scaffold::create_project(&base, name, template.as_deref())?;
            writeln!(out, "Created project at {}", project.display())?;
        },
        Some(CreateTarget::Profile { path }) => {
            let project = base_dir(path.as_deref())?;
            create_profile(&project, defaults, prompter, out)?;
        },
        Some(CreateTarget::Venv { path, venv_name }) => {
            let project = base_dir(path.as_deref())?;
            let venv = scaffold::create_venv(&project, venv_name, VENV_PROGRAM)?;
            writeln!(out, "Created virtual environment at {}", venv.display())?;
        },
        None => {
            let base = base_dir(args.path.as_deref())?;
            let project = scaffold::create_project(&base, &args.name, args.template.as_deref())?;
            writeln!(out, "Created project at {}", project.display())?;
            create_profile(&project, defaults, prompter, out)?;
            let venv = scaffold::create_venv(&project, &args.venv_name, VENV_PROGRAM)?;
            writeln!(out, "Created virtual environment at {}", venv.display())?;
        },
    }
    Ok(())
}

fn create_profile(
    project: &Path,
    defaults: &ProfileDefaults,
    prompter: &dyn ProfilePrompter,
    out: &mut dyn Write,
) -> Result<()> {
    let status = scaffold::inspect_project(project)?;
    writeln!(out, "{status} profile file detected.")?;

    let answers = prompter.ask(defaults)?;
    let engine = TemplateEngine::new()?;
    let status = scaffold::write_profile(project, answers, &engine, &mut rand::rng())?;
    writeln!(out, "Profile {}", status.as_str().to_lowercase())?;
    Ok(())
}
