//! Integer-coded enumerations accepted by the API.
//!
//! Every argument that takes one of these also accepts a raw integer
//! through [`EnumOrInt`]. Integers outside the enum's range are not
//! rejected: they fall back to the enum's default member.

use serde::{Deserialize, Serialize};

/// Shared behaviour of the API's integer-coded enums.
pub trait ApiEnum: Copy {
    /// Member substituted for out-of-range integers.
    const FALLBACK: Self;

    fn value(self) -> u8;

    fn from_value(value: i64) -> Option<Self>;

    /// Map an integer to a member, using [`ApiEnum::FALLBACK`] when it is out of range.
    fn coerce(value: i64) -> Self {
        Self::from_value(value).unwrap_or(Self::FALLBACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GameMode {
    #[default]
    FourKeys = 1,
    SevenKeys = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RankStatus {
    Unranked = 1,
    #[default]
    Ranked = 2,
}

impl ApiEnum for GameMode {
    const FALLBACK: Self = Self::FourKeys;

    fn value(self) -> u8 {
        self as u8
    }

    fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::FourKeys),
            2 => Some(Self::SevenKeys),
            _ => None,
        }
    }
}

impl ApiEnum for RankStatus {
    const FALLBACK: Self = Self::Ranked;

    fn value(self) -> u8 {
        self as u8
    }

    fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Unranked),
            2 => Some(Self::Ranked),
            _ => None,
        }
    }
}

macro_rules! impl_u8_conversions {
    ($($ty:ident),*) => {$(
        impl From<$ty> for u8 {
            fn from(value: $ty) -> u8 {
                value.value()
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                <$ty>::from_value(i64::from(value))
                    .ok_or_else(|| format!("{value} is not a valid {}", stringify!($ty)))
            }
        }

        impl From<$ty> for EnumOrInt<$ty> {
            fn from(value: $ty) -> Self {
                Self::Enum(value)
            }
        }

        impl From<i32> for EnumOrInt<$ty> {
            fn from(value: i32) -> Self {
                Self::Int(i64::from(value))
            }
        }

        impl From<i64> for EnumOrInt<$ty> {
            fn from(value: i64) -> Self {
                Self::Int(value)
            }
        }

        impl Default for EnumOrInt<$ty> {
            fn default() -> Self {
                Self::Enum(<$ty>::default())
            }
        }
    )*};
}

impl_u8_conversions!(GameMode, RankStatus);

/// Either a typed enum member or the raw integer the API accepts in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumOrInt<E> {
    Enum(E),
    Int(i64),
}

impl<E: ApiEnum> EnumOrInt<E> {
    /// Integer sent on the wire.
    pub fn normalize(self) -> u8 {
        match self {
            Self::Enum(member) => member.value(),
            Self::Int(raw) => E::coerce(raw).value(),
        }
    }
}
