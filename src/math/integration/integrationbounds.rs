/// Limits of a definite integral. The two limits may be given in either order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationBounds {
    lower_limit: f64,
    upper_limit: f64
}

impl IntegrationBounds {
    pub fn new(lower_limit: f64, upper_limit: f64) -> IntegrationBounds {
        IntegrationBounds { lower_limit, upper_limit }
    }

    /// `(min, max)` of the two limits.
    pub fn ordered(&self) -> (f64, f64) {
        (self.lower_limit.min(self.upper_limit), self.lower_limit.max(self.upper_limit))
    }

    pub fn is_degenerate(&self) -> bool {
        self.lower_limit == self.upper_limit
    }

    pub fn width(&self) -> f64 {
        (self.upper_limit - self.lower_limit).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_limits_are_ordered() {
        let bounds = IntegrationBounds::new(4.0, -1.0);
        assert_eq!(bounds.ordered(), (-1.0, 4.0));
        assert_eq!(bounds.width(), 5.0);
    }

    #[test]
    fn equal_limits_are_degenerate() {
        assert!(IntegrationBounds::new(3.0, 3.0).is_degenerate());
        assert!(!IntegrationBounds::new(3.0, 3.5).is_degenerate());
    }
}
