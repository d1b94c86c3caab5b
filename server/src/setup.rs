use std::env;
use std::env::VarError;
use std::fmt::{Display, Formatter};

/// Database file used when the `DATABASE_URL` environment variable is not set
pub const DEFAULT_DATABASE_URL: &str = "hotel_last_resort.db";
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_LISTEN_PORT: u16 = 5001;

/// Get the database URL (i.e. the path of the SQLite database file) from the environment variable.
pub fn get_database_url_from_env() -> Result<String, SetupError> {
    Ok(optional_env_var("DATABASE_URL")?.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()))
}

/// Get the web server TCP listening port from the environment variable
pub fn get_listen_port_from_env() -> Result<u16, SetupError> {
    optional_env_var("LISTEN_PORT")?
        .map(|v| parse_listen_port(&v))
        .unwrap_or(Ok(DEFAULT_LISTEN_PORT))
}

/// Get the web server TCP listening interface address from the environment variable
pub fn get_listen_address_from_env() -> Result<String, SetupError> {
    Ok(optional_env_var("LISTEN_ADDRESS")?.unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_owned()))
}

fn optional_env_var(variable_name: &'static str) -> Result<Option<String>, SetupError> {
    match env::var(variable_name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(SetupError::from_env_error(e, variable_name)),
    }
}

fn parse_listen_port(value: &str) -> Result<u16, SetupError> {
    value
        .trim()
        .parse()
        .map_err(|_| SetupError::EnvVariableInvalid {
            variable_name: "LISTEN_PORT",
            problem: "Not a valid uint16",
        })
}

#[derive(Debug, PartialEq)]
pub enum SetupError {
    EnvVariableInvalid {
        variable_name: &'static str,
        problem: &'static str,
    },
}

impl SetupError {
    fn from_env_error(error: VarError, variable_name: &'static str) -> Self {
        match error {
            VarError::NotPresent => Self::EnvVariableInvalid {
                variable_name,
                problem: "not present",
            },
            VarError::NotUnicode(_) => Self::EnvVariableInvalid {
                variable_name,
                problem: "no valid unicode",
            },
        }
    }
}

impl Display for SetupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::EnvVariableInvalid {
                variable_name,
                problem,
            } => write!(
                f,
                "Value of environment variable {} is invalid: {}",
                variable_name, problem
            ),
        }
    }
}
