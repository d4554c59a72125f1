//! Result classification.
//!
//! Maps the first response of a probe (or its absence) to one of six
//! classifications using the leading digit of the status code.

use serde::{Serialize, Serializer};
use strum_macros::EnumIter as EnumIterMacro;

use crate::target::Target;

/// The bucket a probe result falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// 2xx
    Success,
    /// 3xx, reported with its `Location` header
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// Any other status code (1xx, non-standard values)
    Unclassified,
    /// No response at all
    Unreachable,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Classification {
    /// Stable snake_case name, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Success => "success",
            Classification::Redirect => "redirect",
            Classification::ClientError => "client_error",
            Classification::ServerError => "server_error",
            Classification::Unclassified => "unclassified",
            Classification::Unreachable => "unreachable",
        }
    }
}

/// What a single probe observed.
///
/// Every variant except `Unreachable` carries the status code; only `Redirect`
/// carries a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx response
    Success {
        /// HTTP status code
        status: u16,
    },
    /// 3xx response
    Redirect {
        /// HTTP status code
        status: u16,
        /// `Location` header, empty if the server sent none
        location: String,
    },
    /// 4xx response
    ClientError {
        /// HTTP status code
        status: u16,
    },
    /// 5xx response
    ServerError {
        /// HTTP status code
        status: u16,
    },
    /// Response with any other status code
    Unclassified {
        /// HTTP status code
        status: u16,
    },
    /// No response (DNS, connect, TLS, timeout or malformed target)
    Unreachable,
}

impl Outcome {
    /// Classifies a received status code.
    ///
    /// `location` is only kept for 3xx responses; a missing header becomes an
    /// empty string.
    pub fn from_status(status: u16, location: Option<String>) -> Self {
        match leading_digit(status) {
            2 => Outcome::Success { status },
            3 => Outcome::Redirect {
                status,
                location: location.unwrap_or_default(),
            },
            4 => Outcome::ClientError { status },
            5 => Outcome::ServerError { status },
            _ => Outcome::Unclassified { status },
        }
    }

    /// The bucket this outcome falls into.
    pub fn classification(&self) -> Classification {
        match self {
            Outcome::Success { .. } => Classification::Success,
            Outcome::Redirect { .. } => Classification::Redirect,
            Outcome::ClientError { .. } => Classification::ClientError,
            Outcome::ServerError { .. } => Classification::ServerError,
            Outcome::Unclassified { .. } => Classification::Unclassified,
            Outcome::Unreachable => Classification::Unreachable,
        }
    }

    /// Status code, `None` when unreachable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Outcome::Success { status }
            | Outcome::Redirect { status, .. }
            | Outcome::ClientError { status }
            | Outcome::ServerError { status }
            | Outcome::Unclassified { status } => Some(*status),
            Outcome::Unreachable => None,
        }
    }

    /// Redirect location, `None` unless this is a redirect.
    pub fn location(&self) -> Option<&str> {
        match self {
            Outcome::Redirect { location, .. } => Some(location),
            _ => None,
        }
    }
}

fn leading_digit(mut status: u16) -> u16 {
    while status >= 10 {
        status /= 10;
    }
    status
}

/// The outcome of probing one target.
///
/// Produced once per target and moved to the sink whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// The probed target
    pub target: Target,
    /// What the probe observed
    pub outcome: Outcome,
}

impl ProbeResult {
    /// Pairs a target with its outcome.
    pub fn new(target: Target, outcome: Outcome) -> Self {
        Self { target, outcome }
    }

    /// Result for a target that gave no response.
    pub fn unreachable(target: Target) -> Self {
        Self::new(target, Outcome::Unreachable)
    }

    /// See [`Outcome::classification`].
    pub fn classification(&self) -> Classification {
        self.outcome.classification()
    }

    /// See [`Outcome::status_code`].
    pub fn status_code(&self) -> Option<u16> {
        self.outcome.status_code()
    }

    /// See [`Outcome::location`].
    pub fn location(&self) -> Option<&str> {
        self.outcome.location()
    }
}

#[derive(Serialize)]
struct ProbeResultRecord<'a> {
    target: &'a str,
    classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
}

impl Serialize for ProbeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ProbeResultRecord {
            target: self.target.as_str(),
            classification: self.classification(),
            status_code: self.status_code(),
            location: self.location(),
        }
        .serialize(serializer)
    }
}
