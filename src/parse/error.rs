use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The section header did not advertise a week number.
    WeekNumber(String),
    HtmlParse(String),
}

impl Error {
    pub fn week_number_error(msg: &str) -> Self {
        Self::WeekNumber(msg.to_string())
    }

    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeekNumber(msg) => write!(f, "Week Number Parse Error: {msg}"),
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
