use crate::ui::mvi::UiState;
use std::fmt;

/// The single integer tracked by the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Count(i64);

impl UiState for Count {}

impl Count {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Odd regardless of sign: -3 is odd, -4 is not.
    pub const fn is_odd(self) -> bool {
        self.0.rem_euclid(2) == 1
    }

    /// Saturates at `i64::MAX` so reducing never panics.
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Saturates at `i64::MIN`.
    pub const fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Count;

    #[test]
    fn default_is_zero() {
        assert_eq!(Count::default().value(), 0);
    }

    #[test]
    fn oddness_ignores_sign() {
        assert!(Count::new(3).is_odd());
        assert!(Count::new(-3).is_odd());
        assert!(Count::new(-1).is_odd());
        assert!(!Count::new(0).is_odd());
        assert!(!Count::new(-4).is_odd());
        assert!(Count::new(i64::MIN + 1).is_odd());
        assert!(!Count::new(i64::MIN).is_odd());
    }

    #[test]
    fn arithmetic_saturates_at_bounds() {
        assert_eq!(Count::new(i64::MAX).incremented(), Count::new(i64::MAX));
        assert_eq!(Count::new(i64::MIN).decremented(), Count::new(i64::MIN));
    }
}
