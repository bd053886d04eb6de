//! Process configuration, read once at startup.

use std::{env, path::PathBuf};

use anyhow::Context;

/// The address the server listens on unless `ADDRESS` is set.
const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";

/// The name of the managed directory, placed beside the executable unless `RECORDS_DIR` is set.
const DEFAULT_RECORDS_DIR_NAME: &str = "Sample";

/// The service's configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Config {
    /// The socket address to bind.
    pub(crate) address: String,

    /// The managed directory records are written to and listed from.
    pub(crate) records_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from the environment (including a `.env` file, if present), falling
    /// back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but isn't valid Unicode, or if the default managed
    /// directory is needed and the executable's location can't be determined.
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        let address = optional_var("ADDRESS")?.unwrap_or_else(|| DEFAULT_ADDRESS.to_owned());

        let records_dir = match optional_var("RECORDS_DIR")? {
            Some(records_dir) => PathBuf::from(records_dir),
            None => default_records_dir()?,
        };

        Ok(Self {
            address,
            records_dir,
        })
    }
}

/// Gets an environment variable, or `None` if it isn't set.
///
/// # Errors
///
/// Returns an error if the variable is set but isn't valid Unicode.
fn optional_var(key: &str) -> anyhow::Result<Option<String>> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(env::VarError::NotPresent)) => Ok(None),
        Err(error) => {
            Err(error).with_context(|| format!("environment variable `{key}` is invalid"))
        }
    }
}

/// Returns the default managed directory: [`DEFAULT_RECORDS_DIR_NAME`] inside the directory
/// containing the running executable.
///
/// # Errors
///
/// Returns an error if the executable's path can't be determined.
fn default_records_dir() -> anyhow::Result<PathBuf> {
    let exe = env::current_exe().context("failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .context("the running executable should be inside a directory")?;

    Ok(exe_dir.join(DEFAULT_RECORDS_DIR_NAME))
}
