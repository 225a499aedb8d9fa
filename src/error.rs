use std::error;
use std::fmt;
use std::io;

/// Crate-wide error: a kind plus an optional context message. Binning and
/// selection stay total, so errors only come out of parsing and file I/O.
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    DateParse,
    ScheduleParse,
    ConfigParse,
    IOError(io::Error),
}

impl ErrorKind {
    fn describe(&self) -> &'static str {
        match self {
            ErrorKind::DateParse => "invalid date format",
            ErrorKind::ScheduleParse => "invalid schedule format",
            ErrorKind::ConfigParse => "invalid config format",
            ErrorKind::IOError(_) => "io error",
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let ErrorKind::IOError(io_error) = &self.kind {
            return match &self.message {
                Some(msg) => write!(f, "{}: {}", msg, io_error),
                None => io_error.fmt(f),
            };
        }

        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.describe(), msg),
            None => f.write_str(self.kind.describe()),
        }
    }
}

impl error::Error for Error {}
