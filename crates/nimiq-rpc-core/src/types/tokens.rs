//! Open, string-backed enumerations.
//!
//! The node may add tokens over time, so these wrap the raw string instead of
//! a closed Rust enum. The known tokens are exposed as associated constants
//! and unknown ones round-trip untouched.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! string_token {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$cmeta:meta])* $constant:ident = $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $( $(#[$cmeta])* pub const $constant: Self = Self(Cow::Borrowed($token)); )+

            /// Every token this crate knows about.
            pub const KNOWN: &'static [&'static str] = &[$($token),+];

            pub fn new(token: impl Into<String>) -> Self {
                Self(Cow::Owned(token.into()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the token is one of [`Self::KNOWN`].
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(&self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0.into_owned()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

string_token! {
    /// Consensus state reported by `consensus`. Only `established` means the
    /// node is in sync with the network.
    pub struct ConsensusState {
        CONNECTING = "connecting",
        SYNCING = "syncing",
        ESTABLISHED = "established",
    }
}

impl ConsensusState {
    pub fn is_established(&self) -> bool {
        *self == Self::ESTABLISHED
    }
}

string_token! {
    /// Verbosity passed to the `log` method.
    pub struct LogLevel {
        TRACE = "trace",
        VERBOSE = "verbose",
        DEBUG = "debug",
        INFO = "info",
        WARN = "warn",
        ERROR = "error",
        ASSERT = "assert",
    }
}
