//! Forecast composer
//!
//! Builds a phrased [`ForecastReport`] for one forecast window. The
//! pipeline is linear: connectivity gate, place resolution, forecast fetch,
//! window selection, then phrasing.

use std::{fmt, sync::Arc, time::Duration};

use chrono::{Datelike, Timelike};
use domain::entities::{ForecastOutcome, ForecastReport};
use domain::value_objects::{ForecastWindow, UnitSystem};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ClockPort, ConnectivityPort, ForecastDataPoint, ForecastPayload, ForecastPort},
    services::GeoResolver,
    temporal::{self, PhraseChooser, RandomChooser},
};

/// Zone field reported alongside a forecast
pub const FORECAST_ZONE: &str = "city";

/// Default connectivity probe timeout in seconds
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Compass labels, clockwise from north
const DIRECTIONS: [&str; 8] = [
    "northern",
    "northeastern",
    "eastern",
    "southeastern",
    "southern",
    "southwestern",
    "western",
    "northwestern",
];

/// What to forecast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Place name; the current position when absent
    pub location: Option<String>,
    /// Day offset, 1..=7 selects the daily series
    pub days: Option<i64>,
    /// Hour offset, 1..=48 selects the hourly series
    pub hours: Option<i64>,
    /// Unit system of the report
    #[serde(default)]
    pub units: UnitSystem,
}

impl ForecastRequest {
    /// Current conditions at the current position, metric units
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forecast for a named place
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the day offset
    #[must_use]
    pub const fn days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the hour offset
    #[must_use]
    pub const fn hours(mut self, hours: i64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Set the unit system
    #[must_use]
    pub const fn units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// The window this request selects
    #[must_use]
    pub fn window(&self) -> ForecastWindow {
        ForecastWindow::select(self.days, self.hours)
    }
}

/// Compass label of a wind bearing in degrees
///
/// Buckets are 22.5 degrees wide and offset by 11.25; the bucket number is
/// taken modulo the eight labels, so the labels go round twice per full
/// circle. 0 and 360 both read "northern".
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn wind_direction(degrees: f64) -> &'static str {
    let bucket = ((degrees + 11.25) / 22.5).floor() as i64;
    DIRECTIONS[bucket.rem_euclid(DIRECTIONS.len() as i64) as usize]
}

/// Rephrase a one-line condition summary for use in a sentence
///
/// The summary is lowercased and loses its trailing period. The rewrite
/// rules then run in order, each testing the string as left by the rules
/// before it, and each replacing every occurrence of its keyword.
pub fn normalize_condition(summary: &str) -> String {
    let lowered = summary.to_lowercase();
    let mut condition = lowered.strip_suffix('.').unwrap_or(&lowered).to_string();

    if condition.starts_with("possible") {
        condition = format!("{} weather", condition.replace("possible", "possible to have"));
    }
    if condition.starts_with("rain") {
        condition = condition.replace("rain", "rainy weather");
    }
    if condition.ends_with("cloudy") {
        condition.push_str(" weather");
    }
    if condition.starts_with("light") {
        condition = format!("{} weather", condition.replace("light", "possible to have light"));
    }
    if condition.starts_with("heavy") {
        condition = format!("{} weather", condition.replace("heavy", "possible to have heavy"));
    }
    condition
}

/// "brighter" below half cloud cover, "darker" otherwise
pub fn sky_brightness(cloud_cover: f64) -> &'static str {
    if cloud_cover < 0.5 { "brighter" } else { "darker" }
}

/// "day" for exactly one day, "days" for anything else
pub fn day_grammar(days: Option<i64>) -> &'static str {
    if days == Some(1) { "day" } else { "days" }
}

/// Render a reading the way the forecast oracle's numbers read
///
/// Whole numbers keep one decimal (`92.0`); others use the shortest
/// representation that round-trips (`2.02`).
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.trunc() == value && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Builds forecast reports
pub struct ForecastComposer {
    resolver: GeoResolver,
    forecast: Arc<dyn ForecastPort>,
    connectivity: Arc<dyn ConnectivityPort>,
    clock: Arc<dyn ClockPort>,
    chooser: Arc<dyn PhraseChooser>,
    probe_timeout: Duration,
}

impl fmt::Debug for ForecastComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastComposer")
            .field("resolver", &self.resolver)
            .field("chooser", &self.chooser)
            .field("probe_timeout", &self.probe_timeout)
            .finish_non_exhaustive()
    }
}

impl ForecastComposer {
    /// Create a composer with random phrase choice and a 10 second probe
    pub fn new(
        resolver: GeoResolver,
        forecast: Arc<dyn ForecastPort>,
        connectivity: Arc<dyn ConnectivityPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            resolver,
            forecast,
            connectivity,
            clock,
            chooser: Arc::new(RandomChooser),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }

    /// Replace the phrase chooser
    #[must_use]
    pub fn with_chooser(mut self, chooser: Arc<dyn PhraseChooser>) -> Self {
        self.chooser = chooser;
        self
    }

    /// Replace the connectivity probe timeout
    #[must_use]
    pub const fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Compose a report for `request`
    ///
    /// Returns [`ForecastOutcome::Unavailable`] without touching any oracle
    /// when the connectivity probe fails. Oracle errors propagate.
    #[instrument(skip(self), fields(window = %request.window()))]
    pub async fn compose(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastOutcome, ApplicationError> {
        if !self.connectivity.is_reachable(self.probe_timeout).await {
            warn!("Connectivity probe failed, forecast unavailable");
            return Ok(ForecastOutcome::Unavailable);
        }

        let place = self
            .resolver
            .resolve_coordinates(request.location.as_deref(), Some(FORECAST_ZONE))
            .await?;

        let units = request.units;
        let payload = self.forecast.get_forecast(&place.location, units).await?;
        debug!(
            hourly = payload.hourly.len(),
            daily = payload.daily.len(),
            "Fetched forecast"
        );

        let window = request.window();
        let selection = select_entries(&payload, window)?;
        let degree = units.degree_symbol();
        let entry = selection.entry;

        let now = self.clock.now();
        let report = ForecastReport {
            zone: place.zone,
            mode_tag: window.mode_tag(),
            temperature: format!(
                "{}{degree}",
                format_number(required(selection.temperature, "temperature")?)
            ),
            feels_like: format!(
                "{}{degree}",
                format_number(required(selection.feels_like, "apparentTemperature")?)
            ),
            max_temperature: format!(
                "{}{degree}",
                format_number(required(
                    selection.extremes.apparent_temperature_max,
                    "apparentTemperatureMax"
                )?)
            ),
            min_temperature: format!(
                "{}{degree}",
                format_number(required(
                    selection.extremes.apparent_temperature_min,
                    "apparentTemperatureMin"
                )?)
            ),
            humidity: format!("{}%", format_number(entry.humidity * 100.0)),
            wind_speed: format!("{} {}", format_number(entry.wind_speed), units.speed_unit()),
            daily_summary: payload.daily_summary.to_lowercase(),
            condition: normalize_condition(&entry.summary),
            sky: sky_brightness(entry.cloud_cover).to_string(),
            wind_direction: wind_direction(entry.wind_bearing).to_string(),
            part_of_day: temporal::part_of_day(now.hour(), self.chooser.as_ref()).to_string(),
            day_label: temporal::resolve_day_label(
                request.days,
                now.weekday(),
                self.chooser.as_ref(),
            ),
            day_grammar: day_grammar(request.days).to_string(),
        };

        info!(%window, zone = report.zone.as_deref().unwrap_or("-"), "Composed forecast");
        Ok(ForecastOutcome::Available(Box::new(report)))
    }
}

/// Entries of the payload a report draws from
struct Selection<'a> {
    /// Entry for condition, humidity, wind and cloud cover
    entry: &'a ForecastDataPoint,
    /// Entry for the apparent max/min
    extremes: &'a ForecastDataPoint,
    temperature: Option<f64>,
    feels_like: Option<f64>,
}

fn select_entries(
    payload: &ForecastPayload,
    window: ForecastWindow,
) -> Result<Selection<'_>, ApplicationError> {
    let currently = &payload.currently;
    match window {
        ForecastWindow::Daily(offset) => {
            let entry = series_entry(&payload.daily, "daily", usize::from(offset))?;
            Ok(Selection {
                entry,
                extremes: entry,
                temperature: currently.temperature,
                feels_like: currently.apparent_temperature,
            })
        },
        ForecastWindow::Hourly(offset) => {
            let entry = series_entry(&payload.hourly, "hourly", usize::from(offset))?;
            Ok(Selection {
                entry,
                extremes: series_entry(&payload.daily, "daily", 0)?,
                temperature: entry.temperature,
                feels_like: entry.apparent_temperature,
            })
        },
        ForecastWindow::Current => Ok(Selection {
            entry: currently,
            extremes: series_entry(&payload.daily, "daily", 0)?,
            temperature: currently.temperature,
            feels_like: currently.apparent_temperature,
        }),
    }
}

fn series_entry<'a>(
    series: &'a [ForecastDataPoint],
    name: &str,
    index: usize,
) -> Result<&'a ForecastDataPoint, ApplicationError> {
    series.get(index).ok_or_else(|| {
        ApplicationError::ForecastDataMissing(format!(
            "{name} entry {index} (series has {})",
            series.len()
        ))
    })
}

fn required(value: Option<f64>, field: &str) -> Result<f64, ApplicationError> {
    value.ok_or_else(|| ApplicationError::ForecastDataMissing(field.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::ports::{
        AddressComponents, MockClockPort, MockConnectivityPort, MockForecastPort,
        MockGeocodingPort,
    };
    use crate::temporal::FixedChooser;
    use domain::value_objects::{DayLabel, GeoLocation};

    fn point(summary: &str, temperature: f64, apparent: f64) -> ForecastDataPoint {
        ForecastDataPoint {
            summary: summary.to_string(),
            temperature: Some(temperature),
            apparent_temperature: Some(apparent),
            apparent_temperature_max: None,
            apparent_temperature_min: None,
            humidity: 0.92,
            wind_speed: 6.24,
            wind_bearing: 135.0,
            cloud_cover: 0.8,
        }
    }

    fn day(summary: &str, max: f64, min: f64) -> ForecastDataPoint {
        ForecastDataPoint {
            summary: summary.to_string(),
            temperature: None,
            apparent_temperature: None,
            apparent_temperature_max: Some(max),
            apparent_temperature_min: Some(min),
            humidity: 0.5,
            wind_speed: 10.0,
            wind_bearing: 270.0,
            cloud_cover: 0.2,
        }
    }

    fn payload() -> ForecastPayload {
        ForecastPayload {
            currently: point("Light Rain.", 2.02, -0.46),
            hourly: (0..49)
                .map(|h| point("Possible drizzle.", f64::from(h), -1.5))
                .collect(),
            daily: [12.94, 13.5, 14.25, 15.94, 11.0, 10.5, 9.75, 8.0]
                .into_iter()
                .map(|max| day("Heavy cloudy.", max, 5.33))
                .collect(),
            daily_summary: "Light rain tomorrow through next Thursday.".to_string(),
        }
    }

    fn geocoding() -> MockGeocodingPort {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_forward_geocode()
            .returning(|_| Ok(GeoLocation::new_unchecked(51.5, -0.12)));
        geocoding
            .expect_current_position()
            .returning(|| Ok(GeoLocation::new_unchecked(51.5, -0.12)));
        geocoding.expect_reverse_geocode().returning(|_| {
            Ok(AddressComponents::from([
                ("city".to_string(), "London".to_string()),
                ("country".to_string(), "United Kingdom".to_string()),
            ]))
        });
        geocoding
    }

    fn clock_at(hour: u32) -> MockClockPort {
        // 2024-01-03 is a Wednesday
        let now = NaiveDate::from_ymd_opt(2024, 1, 3)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().return_const(now);
        clock
    }

    fn reachable() -> MockConnectivityPort {
        let mut connectivity = MockConnectivityPort::new();
        connectivity.expect_is_reachable().return_const(true);
        connectivity
    }

    fn composer_with(forecast: MockForecastPort, hour: u32) -> ForecastComposer {
        ForecastComposer::new(
            GeoResolver::new(Arc::new(geocoding())),
            Arc::new(forecast),
            Arc::new(reachable()),
            Arc::new(clock_at(hour)),
        )
        .with_chooser(Arc::new(FixedChooser::first()))
    }

    fn forecast_returning(payload: ForecastPayload) -> MockForecastPort {
        let mut forecast = MockForecastPort::new();
        forecast
            .expect_get_forecast()
            .returning(move |_, _| Ok(payload.clone()));
        forecast
    }

    #[test]
    fn wind_direction_wraps_at_north() {
        assert_eq!(wind_direction(0.0), "northern");
        assert_eq!(wind_direction(360.0), "northern");
        assert_eq!(wind_direction(11.0), "northern");
    }

    #[test]
    fn wind_direction_buckets() {
        assert_eq!(wind_direction(22.5), "northeastern");
        assert_eq!(wind_direction(45.0), "eastern");
        assert_eq!(wind_direction(67.5), "southeastern");
        assert_eq!(wind_direction(90.0), "southern");
        assert_eq!(wind_direction(112.5), "southwestern");
        assert_eq!(wind_direction(135.0), "western");
        assert_eq!(wind_direction(157.5), "northwestern");
    }

    #[test]
    fn wind_direction_labels_repeat_every_half_turn() {
        assert_eq!(wind_direction(180.0), "northern");
        assert_eq!(wind_direction(270.0), "southern");
        assert_eq!(wind_direction(-20.0), "northwestern");
    }

    #[test]
    fn normalize_light_rain() {
        assert_eq!(normalize_condition("Light rain."), "possible to have light rain weather");
    }

    #[test]
    fn normalize_heavy_cloudy_compounds() {
        assert_eq!(
            normalize_condition("Heavy cloudy."),
            "possible to have heavy cloudy weather weather"
        );
    }

    #[test]
    fn normalize_other_rules() {
        assert_eq!(
            normalize_condition("Possible drizzle."),
            "possible to have drizzle weather"
        );
        assert_eq!(normalize_condition("Rain."), "rainy weather");
        assert_eq!(normalize_condition("Rain and rain."), "rainy weather and rainy weather");
        assert_eq!(normalize_condition("Mostly Cloudy"), "mostly cloudy weather");
        assert_eq!(normalize_condition("Clear."), "clear");
    }

    #[test]
    fn sky_and_grammar() {
        assert_eq!(sky_brightness(0.49), "brighter");
        assert_eq!(sky_brightness(0.5), "darker");
        assert_eq!(day_grammar(Some(1)), "day");
        assert_eq!(day_grammar(Some(2)), "days");
        assert_eq!(day_grammar(None), "days");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(92.0), "92.0");
        assert_eq!(format_number(2.02), "2.02");
        assert_eq!(format_number(-0.46), "-0.46");
        assert_eq!(format_number(0.92 * 100.0), "92.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn request_builder() {
        let request = ForecastRequest::new()
            .at("London")
            .days(3)
            .hours(10)
            .units(UnitSystem::Imperial);
        assert_eq!(request.location.as_deref(), Some("London"));
        assert_eq!(request.window(), ForecastWindow::Daily(3));
        assert_eq!(request.units, UnitSystem::Imperial);
    }

    #[tokio::test]
    async fn unavailable_when_offline() {
        let mut connectivity = MockConnectivityPort::new();
        connectivity
            .expect_is_reachable()
            .withf(|timeout| *timeout == Duration::from_secs(3))
            .times(1)
            .return_const(false);
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_forward_geocode().never();
        geocoding.expect_current_position().never();
        geocoding.expect_reverse_geocode().never();
        let mut forecast = MockForecastPort::new();
        forecast.expect_get_forecast().never();

        let composer = ForecastComposer::new(
            GeoResolver::new(Arc::new(geocoding)),
            Arc::new(forecast),
            Arc::new(connectivity),
            Arc::new(MockClockPort::new()),
        )
        .with_probe_timeout(Duration::from_secs(3));

        for request in [
            ForecastRequest::new(),
            ForecastRequest::new().at("London").days(3),
            ForecastRequest::new().hours(12).units(UnitSystem::Imperial),
        ] {
            let outcome = composer.compose(&request).await.unwrap();
            assert!(outcome.is_unavailable());
        }
    }

    #[tokio::test]
    async fn current_window_report() {
        let composer = composer_with(forecast_returning(payload()), 13);
        let outcome = composer.compose(&ForecastRequest::new()).await.unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.zone.as_deref(), Some("London"));
        assert_eq!(report.mode_tag, 2);
        assert_eq!(report.temperature, "2.02°C");
        assert_eq!(report.feels_like, "-0.46°C");
        assert_eq!(report.max_temperature, "12.94°C");
        assert_eq!(report.min_temperature, "5.33°C");
        assert_eq!(report.humidity, "92.0%");
        assert_eq!(report.wind_speed, "6.24 kph");
        assert_eq!(report.daily_summary, "light rain tomorrow through next thursday.");
        assert_eq!(report.condition, "possible to have light rain weather");
        assert_eq!(report.sky, "darker");
        assert_eq!(report.wind_direction, "western");
        assert_eq!(report.part_of_day, "afternoon");
        assert_eq!(report.day_label, DayLabel::named("today"));
        assert_eq!(report.day_grammar, "days");
    }

    #[tokio::test]
    async fn daily_window_wins_over_hourly() {
        let composer = composer_with(forecast_returning(payload()), 18);
        let request = ForecastRequest::new().at("London").days(3).hours(10);
        let outcome = composer.compose(&request).await.unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.mode_tag, 0);
        assert_eq!(report.temperature, "2.02°C");
        assert_eq!(report.max_temperature, "15.94°C");
        assert_eq!(report.humidity, "50.0%");
        assert_eq!(report.condition, "possible to have heavy cloudy weather weather");
        assert_eq!(report.sky, "brighter");
        assert_eq!(report.wind_direction, "southern");
        assert_eq!(report.part_of_day, "evening");
        // Wednesday + 3
        assert_eq!(report.day_label, DayLabel::named("saturday"));
        assert_eq!(report.day_grammar, "days");
    }

    #[tokio::test]
    async fn hourly_window_uses_hourly_temperature_and_todays_extremes() {
        let composer = composer_with(forecast_returning(payload()), 22);
        let request = ForecastRequest::new().hours(10).units(UnitSystem::Imperial);
        let outcome = composer.compose(&request).await.unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.mode_tag, 1);
        assert_eq!(report.temperature, "10.0°F");
        assert_eq!(report.max_temperature, "12.94°F");
        assert_eq!(report.wind_speed, "6.24 mph");
        assert_eq!(report.condition, "possible to have drizzle weather");
        assert_eq!(report.part_of_day, "night");
    }

    #[tokio::test]
    async fn one_day_uses_singular_grammar() {
        let composer = composer_with(forecast_returning(payload()), 8);
        let outcome = composer
            .compose(&ForecastRequest::new().days(1))
            .await
            .unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.day_label, DayLabel::named("tomorrow"));
        assert_eq!(report.day_grammar, "day");
        assert_eq!(report.part_of_day, "morning");
    }

    #[tokio::test]
    async fn short_series_is_reported_missing() {
        let mut short = payload();
        short.daily.truncate(2);
        let composer = composer_with(forecast_returning(short), 12);

        let err = composer
            .compose(&ForecastRequest::new().days(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ForecastDataMissing(_)));
    }

    #[tokio::test]
    async fn missing_city_is_zone_field_not_found() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_current_position()
            .returning(|| Ok(GeoLocation::new_unchecked(0.0, 0.0)));
        geocoding.expect_reverse_geocode().returning(|_| {
            Ok(AddressComponents::from([("state".to_string(), "X".to_string())]))
        });
        let mut forecast = MockForecastPort::new();
        forecast.expect_get_forecast().never();

        let composer = ForecastComposer::new(
            GeoResolver::new(Arc::new(geocoding)),
            Arc::new(forecast),
            Arc::new(reachable()),
            Arc::new(clock_at(9)),
        );
        let err = composer.compose(&ForecastRequest::new()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ZoneFieldNotFound { ref field } if field == "city"));
    }

    #[tokio::test]
    async fn forecast_error_propagates() {
        let mut forecast = MockForecastPort::new();
        forecast
            .expect_get_forecast()
            .returning(|_, _| Err(ApplicationError::AuthenticationFailure("403".into())));
        let composer = composer_with(forecast, 12);

        let err = composer.compose(&ForecastRequest::new()).await.unwrap_err();
        assert!(err.is_authentication_failure());
    }
}
