use {
    color_eyre::eyre::{Result, WrapErr as _},
    std::{env, net::SocketAddr, path::PathBuf},
};

pub const DATA_PATH_VAR: &str = "CARS_API_DATA_PATH";
pub const BIND_VAR: &str = "CARS_API_BIND";

const DEFAULT_DATA_PATH: &str = "data.json";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, PartialEq)]
pub struct Config {
    /// Where the catalog document lives.
    pub data_path: PathBuf,
    pub bind: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_path = lookup(DATA_PATH_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_owned());

        let bind = lookup(BIND_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("{} is not a socket address: {:?}", BIND_VAR, bind))?;

        Ok(Config {
            data_path: data_path.into(),
            bind,
        })
    }
}
