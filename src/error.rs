use reqwest::StatusCode;

use crate::{menu, parse};
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    Menu(menu::Error),
    Request(reqwest::Error),
    Json(serde_json::Error),
    Config(String),
    /// The webhook answered with a non-success status.
    Delivery(StatusCode),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<menu::Error> for Error {
    fn from(e: menu::Error) -> Self {
        Self::Menu(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Menu(e) => write!(f, "Menu error: {e}"),
            Self::Request(e) => write!(f, "Request error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Delivery(status) => write!(f, "Delivery error: webhook returned {status}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
