use std::env;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

/// Coarse classification of an [`Error`] by the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Initialization,
    Validation,
    Routing,
    Transport,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self.code {
            3 | 4 | 6 | 105 => ErrorKind::Transport,
            101 => ErrorKind::Validation,
            102 | 104 => ErrorKind::Routing,
            103 => ErrorKind::Initialization,
            _ => ErrorKind::Internal,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        decode_error(err)
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn validation_error(message: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn routing_error(message: impl Into<String>) -> Error {
    Error {
        code: 102,
        message: message.into(),
    }
}

pub fn missing_reference_error(id: &str, referenced_by: &str) -> Error {
    Error {
        code: 103,
        message: format!("unknown location `{}` referenced by {}", id, referenced_by),
    }
}

pub fn empty_route_error() -> Error {
    Error {
        code: 104,
        message: "route contains no stops".into(),
    }
}

pub fn unknown_stop_error(id: &str) -> Error {
    Error {
        code: 105,
        message: format!("route names unknown location `{}`", id),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: 1,
        message: format!("environment variable error: {}", err),
    }
}

pub fn config_error(name: &str, value: &str) -> Error {
    Error {
        code: 2,
        message: format!("invalid value `{}` for {}", value, name),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: format!("reqwest error: {}", err),
    }
}

pub fn upstream_error(status: u16) -> Error {
    Error {
        code: 4,
        message: format!("upstream error: status {}", status),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn decode_error<T: Display>(err: T) -> Error {
    Error {
        code: 6,
        message: format!("decode error: {}", err),
    }
}

#[test]
fn error_kinds_follow_codes() {
    assert_eq!(validation_error("x").kind(), ErrorKind::Validation);
    assert_eq!(routing_error("no path found").kind(), ErrorKind::Routing);
    assert_eq!(empty_route_error().kind(), ErrorKind::Routing);
    assert_eq!(missing_reference_error("A", "road A-B").kind(), ErrorKind::Initialization);
    assert_eq!(unknown_stop_error("Q").kind(), ErrorKind::Transport);
    assert_eq!(upstream_error(502).kind(), ErrorKind::Transport);
    assert_eq!(decode_error("eof").kind(), ErrorKind::Transport);
    assert_eq!(invalid_state_error().kind(), ErrorKind::Internal);
    assert_eq!(unexpected_error().kind(), ErrorKind::Internal);
}

#[test]
fn routing_error_keeps_server_message() {
    let err = routing_error("no path found");

    assert_eq!(err.message, "no path found");
    assert_eq!(err.to_string(), "no path found (code 102)");
}
