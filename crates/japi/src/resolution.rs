/// Whether an assembly input was supplied or has to be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Provided(T),
    NeedsDefault,
}

impl<T> Resolution<T> {
    #[must_use]
    pub const fn needs_default(&self) -> bool {
        matches!(self, Self::NeedsDefault)
    }

    /// The provided value, or the result of `default`.
    pub fn resolve_with<E>(self, default: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        match self {
            Self::Provided(value) => Ok(value),
            Self::NeedsDefault => default(),
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NeedsDefault, Self::Provided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_values_skip_the_default() {
        let resolved = Resolution::from(Some(3)).resolve_with(|| Err::<i32, ()>(()));
        assert_eq!(resolved, Ok(3));
    }

    #[test]
    fn missing_values_run_the_default() {
        let missing: Resolution<i32> = None.into();
        assert!(missing.needs_default());
        assert_eq!(missing.resolve_with(|| Ok::<_, ()>(7)), Ok(7));
    }
}
