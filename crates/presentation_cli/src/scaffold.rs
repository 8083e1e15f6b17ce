//! Project scaffolding: skeleton, profile and virtual environment
//!
//! A project looks like this:
//!
//! ```text
//! <name>/
//!   user/profile.yml
//!   files/temp/cache/profile_tmp
//!   database/
//!   frontend/
//! ```
//!
//! `profile_tmp` records the profile status (`Created`, `Updated`,
//! `Incomplete` or `Modified`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use dialoguer::Input;
use domain::DomainError;
use domain::entities::{AssistantProfile, ProfileStatus};
use infrastructure::{ProfileDefaults, TemplateEngine, TemplateError};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Profile file, relative to the project root
pub const PROFILE_PATH: &str = "user/profile.yml";
/// Cache directory, relative to the project root
pub const CACHE_PATH: &str = "files/temp/cache";
/// Marker file inside the cache directory
pub const MARKER_FILE: &str = "profile_tmp";
/// Directories of the built-in skeleton
pub const SKELETON_DIRS: [&str; 4] = ["user", CACHE_PATH, "database", "frontend"];
/// Program that creates virtual environments
pub const VENV_PROGRAM: &str = "virtualenv";

const PLACEHOLDER_PROFILE: &str = "# This file contains the User specific details.\n\
# Run `xa create profile` to fill it in.\n";

/// Scaffolding errors
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project directory does not exist
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A file the project needs is missing
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Filesystem failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The marker holds an unknown status
    #[error("Invalid profile marker at {}: {source}", path.display())]
    InvalidMarker {
        /// Marker path
        path: PathBuf,
        /// Parse failure
        #[source]
        source: DomainError,
    },

    /// Profile rendering failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Reading an answer failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The virtual environment could not be created
    #[error("Virtual environment creation failed: {0}")]
    Venv(String),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Create `<base>/<name>` from the built-in skeleton or a template directory
///
/// Existing files are overwritten; other files in the target are kept.
#[instrument]
pub fn create_project(
    base: &Path,
    name: &str,
    template: Option<&Path>,
) -> Result<PathBuf, ScaffoldError> {
    let project = base.join(name);

    match template {
        Some(template) => {
            if !template.is_dir() {
                return Err(ScaffoldError::PathNotFound(template.to_path_buf()));
            }
            copy_tree(template, &project)?;
        },
        None => write_skeleton(&project)?,
    }

    info!(project = %project.display(), "Created project structure");
    Ok(project)
}

fn write_skeleton(project: &Path) -> Result<(), ScaffoldError> {
    for dir in SKELETON_DIRS {
        let path = project.join(dir);
        fs::create_dir_all(&path).map_err(io_error(&path))?;
    }

    let profile = project.join(PROFILE_PATH);
    fs::write(&profile, PLACEHOLDER_PROFILE).map_err(io_error(&profile))?;
    write_status(project, ProfileStatus::Created)
}

/// Recursively copy `from` into `to`
pub fn copy_tree(from: &Path, to: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(to).map_err(io_error(to))?;

    for entry in fs::read_dir(from).map_err(io_error(from))? {
        let entry = entry.map_err(io_error(from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(io_error(&source))?;

        if file_type.is_dir() {
            copy_tree(&source, &target)?;
        } else {
            fs::copy(&source, &target).map_err(io_error(&source))?;
            debug!(file = %target.display(), "Copied");
        }
    }
    Ok(())
}

/// Check the project layout and read the marker status
///
/// # Errors
///
/// `PathNotFound` when the project is missing, `FileNotFound` when the
/// profile or the marker is, `InvalidMarker` when the marker holds an
/// unknown status.
pub fn inspect_project(project: &Path) -> Result<ProfileStatus, ScaffoldError> {
    if !project.exists() {
        return Err(ScaffoldError::PathNotFound(project.to_path_buf()));
    }

    let profile = project.join(PROFILE_PATH);
    if !profile.is_file() {
        return Err(ScaffoldError::FileNotFound(profile));
    }

    let marker = marker_path(project);
    if !marker.is_file() {
        return Err(ScaffoldError::FileNotFound(marker));
    }

    let contents = fs::read_to_string(&marker).map_err(io_error(&marker))?;
    contents
        .lines()
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|source| ScaffoldError::InvalidMarker {
            path: marker,
            source,
        })
}

fn marker_path(project: &Path) -> PathBuf {
    project.join(CACHE_PATH).join(MARKER_FILE)
}

fn write_status(project: &Path, status: ProfileStatus) -> Result<(), ScaffoldError> {
    let marker = marker_path(project);
    fs::write(&marker, status.as_str()).map_err(io_error(&marker))
}

/// Answers collected for a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAnswers {
    pub user_name: String,
    pub address_as: String,
    pub assistant_name: String,
    pub maps_key: String,
    pub forecast_key: String,
    pub action_server_port: u16,
    pub socket_port: u16,
}

impl ProfileAnswers {
    /// Build the profile, capitalizing names and drawing a ten-digit id
    pub fn into_profile(self, rng: &mut impl Rng) -> AssistantProfile {
        AssistantProfile {
            user_id: rng.random_range(AssistantProfile::MIN_USER_ID..=AssistantProfile::MAX_USER_ID),
            user_name: capitalize(&self.user_name),
            address_as: capitalize(&self.address_as),
            assistant_name: capitalize(&self.assistant_name),
            maps_key: self.maps_key.trim().to_string(),
            forecast_key: self.forecast_key.trim().to_string(),
            action_server_port: self.action_server_port,
            socket_port: self.socket_port,
        }
    }
}

/// Uppercase the first character and lowercase the rest
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Source of profile answers
pub trait ProfilePrompter {
    /// Ask every profile question
    fn ask(&self, defaults: &ProfileDefaults) -> Result<ProfileAnswers, ScaffoldError>;
}

/// Asks on the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn text(prompt: &str, default: Option<&str>) -> Result<String, ScaffoldError> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }

    fn port(prompt: &str, default: u16) -> Result<u16, ScaffoldError> {
        Input::<u16>::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }
}

impl ProfilePrompter for TerminalPrompter {
    fn ask(&self, defaults: &ProfileDefaults) -> Result<ProfileAnswers, ScaffoldError> {
        Ok(ProfileAnswers {
            user_name: Self::text("Please enter a username", Some(&defaults.user_name))?,
            address_as: Self::text("How should you be addressed as?", Some(&defaults.address_as))?,
            assistant_name: Self::text(
                "Please provide a name to your assistant",
                Some(&defaults.assistant_name),
            )?,
            maps_key: Self::text("Your Google Cloud API key", None)?,
            forecast_key: Self::text("Your forecast API key", None)?,
            action_server_port: Self::port("Action server port", defaults.action_server_port)?,
            socket_port: Self::port("Socket server port", defaults.socket_port)?,
        })
    }
}

/// Render and write the profile of an existing project
///
/// Returns the status written to the marker.
#[instrument(skip(answers, engine, rng))]
pub fn write_profile(
    project: &Path,
    answers: ProfileAnswers,
    engine: &TemplateEngine,
    rng: &mut impl Rng,
) -> Result<ProfileStatus, ScaffoldError> {
    let profile = answers.into_profile(rng);
    if let Err(e) = profile.validate() {
        warn!(error = %e, "Profile fails validation");
    }

    let rendered = engine.render_profile(&profile)?;
    let path = project.join(PROFILE_PATH);
    fs::write(&path, rendered).map_err(io_error(&path))?;

    let status = profile.status();
    write_status(project, status)?;
    info!(%status, "Saved profile");
    Ok(status)
}

/// Run `virtualenv <project>/<venv>`
#[instrument]
pub fn create_venv(project: &Path, venv_name: &str, program: &str) -> Result<PathBuf, ScaffoldError> {
    if !project.exists() {
        return Err(ScaffoldError::PathNotFound(project.to_path_buf()));
    }

    let target = project.join(venv_name);
    let status = Command::new(program)
        .arg(&target)
        .status()
        .map_err(|e| ScaffoldError::Venv(format!("{program}: {e}")))?;

    if !status.success() {
        return Err(ScaffoldError::Venv(format!("{program} exited with {status}")));
    }
    Ok(target)
}
