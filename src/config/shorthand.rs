//! Shorthand values: `true` / `false` standing in for an options object
//!
//! Raw config accepts `Shorthand<T>` wherever a boolean may replace an
//! object. Before merging, every shorthand is normalised into a `Toggle`,
//! which is also the shape written to the resolved config (`false` or the
//! full object).

use serde::{Deserialize, Serialize, Serializer};

/// A raw value that is either a boolean flag or an options object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shorthand<T> {
    Flag(bool),
    Options(T),
}

impl<T> Shorthand<T> {
    /// Whether the value turns the feature on
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match *self {
            Self::Flag(flag) => flag,
            Self::Options(_) => true,
        }
    }

    /// The options object, if one was given
    #[must_use]
    pub const fn options(&self) -> Option<&T> {
        match *self {
            Self::Flag(_) => None,
            Self::Options(ref options) => Some(options),
        }
    }
}

/// A resolved feature that is either disabled or fully configured
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Toggle<T> {
    #[default]
    Disabled,
    Enabled(T),
}

impl<T> Toggle<T> {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(*self, Self::Enabled(_))
    }

    #[must_use]
    pub const fn as_enabled(&self) -> Option<&T> {
        match *self {
            Self::Disabled => None,
            Self::Enabled(ref value) => Some(value),
        }
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(ref value) => value.serialize(serializer),
        }
    }
}

/// Resolve a shorthand-capable field against its inherited value.
///
/// - no input keeps `baseline`
/// - `false` disables
/// - `true` enables, keeping `baseline` when it is already enabled and
///   falling back to `fallback` otherwise
/// - an options object is applied on top of that same enabled base
pub fn resolve_toggle<T, I, E>(
    baseline: &Toggle<T>,
    fallback: &T,
    input: Option<&Shorthand<I>>,
    apply: impl FnOnce(&mut T, &I) -> Result<(), E>,
) -> Result<Toggle<T>, E>
where
    T: Clone,
{
    let Some(input) = input else {
        return Ok(baseline.clone());
    };

    let mut base = baseline
        .as_enabled()
        .map_or_else(|| fallback.clone(), Clone::clone);

    match *input {
        Shorthand::Flag(false) => Ok(Toggle::Disabled),
        Shorthand::Flag(true) => Ok(Toggle::Enabled(base)),
        Shorthand::Options(ref options) => {
            apply(&mut base, options)?;
            Ok(Toggle::Enabled(base))
        }
    }
}
