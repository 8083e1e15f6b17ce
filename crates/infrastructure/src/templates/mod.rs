//! Template engine module for rendering profiles and command output
//!
//! Uses the Tera templating engine with embedded templates for:
//! - The scaffolded project's `user/profile.yml`
//! - Weather report sentences
//! - Distance sentences
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let yaml = engine.render_profile(&profile)?;
//! ```

use std::sync::Arc;

use domain::entities::{AssistantProfile, DistanceEstimate, ForecastReport};
use domain::value_objects::TravelMode;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

/// Template name of the profile file
pub const PROFILE_TEMPLATE: &str = "user/profile.yml";
/// Template name of the weather sentence
pub const WEATHER_TEMPLATE: &str = "weather/report.txt";
/// Template name of the distance sentence
pub const DISTANCE_TEMPLATE: &str = "distance/report.txt";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const PROFILE: &str = r"# This file contains the User specific details.

# General
# User specific details that the NLA would use for quick assist.
user:
    id: {{ user_id }}
    name: {{ user_name }}
    address_as: {{ address_as }}

# Natural UI
# Character specifications for the NLA.
ai:
    name: {{ assistant_name }}     # [optional] (default: charlotte)

# Security keys
# Keys for making API calls.
key:
    google_cloud: {{ maps_key }}
    darksky: {{ forecast_key }}

# Ports
# Ports on which the actions & hosting will be performed.
port:
    action_server: {{ action_server_port }}     # [optional] (default: 6969)
    socketio: {{ socket_port }}     # [optional] (default: 1414)
";

    pub const WEATHER_REPORT: &str = r"{% if mode_tag == 0 -%}
{{ day_label | capitalize }} in {{ zone }} expect {{ condition }}, between {{ min_temperature }} and {{ max_temperature }}.
{%- elif mode_tag == 1 -%}
Later this {{ part_of_day }} in {{ zone }} expect {{ condition }}, around {{ temperature }} and feeling like {{ feels_like }}.
{%- else -%}
It is {{ temperature }} in {{ zone }} this {{ part_of_day }} with {{ condition }}, feeling like {{ feels_like }}.
{%- endif %}
Humidity is at {{ humidity }} with {{ wind_speed }} winds from the {{ wind_direction }} side, and the sky is getting {{ sky }}.
{% if daily_summary %}Over the coming {{ day_grammar }}: {{ daily_summary }}
{% endif %}";

    pub const DISTANCE_REPORT: &str = r"{{ destination }} is {{ distance }} away, about {{ duration }} {{ mode }}.
";
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            (PROFILE_TEMPLATE, embedded::PROFILE),
            (WEATHER_TEMPLATE, embedded::WEATHER_REPORT),
            (DISTANCE_TEMPLATE, embedded::DISTANCE_REPORT),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the project's `user/profile.yml`
    pub fn render_profile(&self, profile: &AssistantProfile) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("user_id", &profile.user_id);
        ctx.insert("user_name", &profile.user_name);
        ctx.insert("address_as", &profile.address_as);
        ctx.insert("assistant_name", &profile.assistant_name);
        ctx.insert("maps_key", &profile.maps_key);
        ctx.insert("forecast_key", &profile.forecast_key);
        ctx.insert("action_server_port", &profile.action_server_port);
        ctx.insert("socket_port", &profile.socket_port);

        self.render(PROFILE_TEMPLATE, &ctx)
    }

    /// Render a forecast report as sentences
    pub fn render_forecast(&self, report: &ForecastReport) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("zone", report.zone.as_deref().unwrap_or("your area"));
        ctx.insert("mode_tag", &report.mode_tag);
        ctx.insert("temperature", &report.temperature);
        ctx.insert("feels_like", &report.feels_like);
        ctx.insert("max_temperature", &report.max_temperature);
        ctx.insert("min_temperature", &report.min_temperature);
        ctx.insert("humidity", &report.humidity);
        ctx.insert("wind_speed", &report.wind_speed);
        ctx.insert("daily_summary", &report.daily_summary);
        ctx.insert("condition", &report.condition);
        ctx.insert("sky", &report.sky);
        ctx.insert("wind_direction", &report.wind_direction);
        ctx.insert("part_of_day", &report.part_of_day);
        ctx.insert("day_label", &report.day_label.to_string());
        ctx.insert("day_grammar", &report.day_grammar);

        self.render(WEATHER_TEMPLATE, &ctx)
    }

    /// Render a distance estimate as a sentence
    pub fn render_distance(
        &self,
        destination: &str,
        estimate: &DistanceEstimate,
        mode: &TravelMode,
    ) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("destination", destination);
        ctx.insert("distance", &estimate.distance_text);
        ctx.insert("duration", &estimate.duration_text);
        ctx.insert("mode", mode.as_str());

        self.render(DISTANCE_TEMPLATE, &ctx)
    }
}
