use crate::error::ExtractError;
use std::str::FromStr;

/// What to do with a trailing group that is shorter than the group size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incomplete<T> {
    /// Pad the last group with the given filler.
    Fill(T),
    /// Fail with [`ExtractError::LengthMismatch`].
    Strict,
    /// Drop the last group.
    Ignore,
}

impl<T: Default> Default for Incomplete<T> {
    fn default() -> Self {
        Self::Fill(T::default())
    }
}

/// Policy name without a filler, as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncompletePolicy {
    #[default]
    Fill,
    Strict,
    Ignore,
}

impl IncompletePolicy {
    pub fn with_filler<T>(self, filler: T) -> Incomplete<T> {
        match self {
            Self::Fill => Incomplete::Fill(filler),
            Self::Strict => Incomplete::Strict,
            Self::Ignore => Incomplete::Ignore,
        }
    }
}

impl FromStr for IncompletePolicy {
    type Err = ExtractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fill" => Ok(Self::Fill),
            "strict" => Ok(Self::Strict),
            "ignore" => Ok(Self::Ignore),
            other => Err(ExtractError::InvalidConfiguration(format!(
                "expected fill, strict, or ignore, got {other:?}"
            ))),
        }
    }
}

/// Collects items into non-overlapping groups of `size`.
///
/// `grouper("ABCDEFG", 3, Fill('x'))` gives `ABC DEF Gxx`, `Strict` fails and
/// `Ignore` gives `ABC DEF`.
pub fn grouper<T, I>(
    items: I,
    size: usize,
    incomplete: Incomplete<T>,
) -> Result<Vec<Vec<T>>, ExtractError>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    if size == 0 {
        return Err(ExtractError::InvalidConfiguration(
            "group size must be at least 1".to_string(),
        ));
    }

    let items = items.into_iter().collect::<Vec<_>>();
    let remainder = items.len() % size;

    if remainder != 0 && matches!(incomplete, Incomplete::Strict) {
        return Err(ExtractError::LengthMismatch {
            len: items.len(),
            size,
        });
    }

    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut current = Vec::with_capacity(size);

    for item in items {
        current.push(item);
        if current.len() == size {
            groups.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }

    if !current.is_empty() {
        if let Incomplete::Fill(filler) = incomplete {
            current.resize(size, filler);
            groups.push(current);
        }
    }

    Ok(groups)
}

/// Flattens one level of nesting, preserving order.
pub fn flatten<G>(groups: impl IntoIterator<Item = G>) -> impl Iterator<Item = G::Item>
where
    G: IntoIterator,
{
    groups.into_iter().flatten()
}
