#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    ConfigDirNotFound,
    InvalidConfig(String),
    TomlSerialize(toml::ser::Error),
    TomlDeserialize(toml::de::Error),
    InvalidObservationCode(String),
    InputClosed,
    Engine(crate::engine::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::IO(value)
    }
}

impl From<crate::engine::error::Error> for Error {
    fn from(value: crate::engine::error::Error) -> Self {
        Error::Engine(value)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(value: toml::ser::Error) -> Self {
        Error::TomlSerialize(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::TomlDeserialize(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(e) => write!(f, "IO error: {e}"),
            Self::ConfigDirNotFound => write!(f, "no configuration directory on this platform"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::TomlSerialize(e) => write!(f, "TOML serialization error: {e}"),
            Self::TomlDeserialize(e) => write!(f, "TOML deserialization error: {e}"),
            Self::InvalidObservationCode(code) => write!(f, "invalid observation code: {code:?}"),
            Self::InputClosed => write!(f, "input closed"),
            Self::Engine(e) => write!(f, "engine error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IO(e) => e.source(),
            Self::ConfigDirNotFound => None,
            Self::InvalidConfig(_) => None,
            Self::TomlSerialize(e) => e.source(),
            Self::TomlDeserialize(e) => e.source(),
            Self::InvalidObservationCode(_) => None,
            Self::InputClosed => None,
            Self::Engine(e) => e.source(),
        }
    }
}
