use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// File name of a store inside its application directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// Resolves default locations for store files
///
/// Follows the XDG Base Directory specification so an application that
/// does not pick a path itself gets a conventional one.
pub struct StorePaths;

impl StorePaths {
    /// Returns the configuration directory for `app_name`
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends `app_name` to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir(app_name: &str) -> Result<PathBuf, Error> {
        let xdg = env::var("XDG_CONFIG_HOME").ok();
        let home = env::var("HOME").ok();

        Self::config_dir_from(xdg.as_deref(), home.as_deref(), app_name)
    }

    /// Returns the default store file for `app_name`
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn store_file(app_name: &str) -> Result<PathBuf, Error> {
        Ok(Self::config_dir(app_name)?.join(STORE_FILE_NAME))
    }

    pub(crate) fn config_dir_from(
        xdg_config_home: Option<&str>,
        home: Option<&str>,
        app_name: &str,
    ) -> Result<PathBuf, Error> {
        let config_home = xdg_config_home
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| home.map(|home| PathBuf::from(home).join(".config")))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(config_home.join(app_name))
    }
}
