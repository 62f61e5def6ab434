use std::fmt;

#[derive(Debug)]
pub enum Error {
    // Fetching airports.dat over the network
    Download(attohttpc::Error),
    // Malformed airports.dat row
    AirportData(csv::Error),
    // Malformed config.json
    Config(serde_json::Error),
    Io(std::io::Error),
    // Codes that could not be found in the airport directory
    UnresolvedAirports(Vec<String>),
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Download(e) => write!(f, "Could not download airport data: {}", e),
            Self::AirportData(e) => match e.position() {
                Some(pos) => write!(f, "Bad airport data on line {}: {}", pos.line(), e),
                None => write!(f, "Bad airport data: {}", e),
            },
            // Line 0 means the file itself could not be read
            Self::Config(e) if e.line() == 0 => write!(f, "Bad config: {}", e),
            Self::Config(e) => write!(f, "Bad config on line {}: {}", e.line(), e),
            Self::Io(e) => write!(f, "{}", e),
            Self::UnresolvedAirports(_) => {
                write!(f, "Invalid IATA code(s). Please check your input.")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Download(e) => Some(e),
            Self::AirportData(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<attohttpc::Error> for Error {
    fn from(e: attohttpc::Error) -> Self {
        Self::Download(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::AirportData(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
