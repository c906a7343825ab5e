//! Closed category vocabularies.
//!
//! Each category maps between a small wire-string vocabulary and the
//! integer form stored in documents. Both directions reject unknown input
//! rather than defaulting; callers treat `None` as a validation failure.

use crate::Error;
use serde::{Deserialize, Serialize};

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $int:literal => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "i64", try_from = "i64")]
        pub enum $name {
            $($variant = $int,)+
        }

        impl $name {
            /// Every defined value, in storage-integer order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Parses the wire-string form. Unknown strings yield `None`.
            #[must_use]
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the wire-string form.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parses the storage-integer form. Unknown integers yield `None`.
            #[must_use]
            pub fn from_int(v: i64) -> Option<Self> {
                match v {
                    $($int => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the storage-integer form.
            #[must_use]
            pub const fn as_int(self) -> i64 {
                self as i64
            }
        }

        impl From<$name> for i64 {
            fn from(v: $name) -> i64 {
                v.as_int()
            }
        }

        impl TryFrom<i64> for $name {
            type Error = Error;

            fn try_from(v: i64) -> Result<Self, Error> {
                Self::from_int(v).ok_or(Error::UnknownCategory(v))
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(v: $name) -> serde_json::Value {
                serde_json::Value::from(v.as_int())
            }
        }
    };
}

category! {
    /// Document lifecycle status. Deletion is a status value, not a removal.
    Status {
        Active = 0 => "active",
        Deleted = 1 => "deleted",
    }
}

category! {
    /// User gender.
    Gender {
        Unknown = 0 => "unknown",
        Male = 1 => "male",
        Female = 2 => "female",
    }
}

category! {
    /// How a user's sign-in code is interpreted.
    CodeType {
        Phone = 0 => "phone",
        Code = 1 => "code",
    }
}

category! {
    /// Which pipeline shape a unit's config describes.
    ConfigType {
        Chain = 0 => "chain",
        End2End = 1 => "end2end",
    }
}
