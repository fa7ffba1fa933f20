//! Composite Simpson quadrature, Gaussian tail probabilities built on it, and
//! secant-method root finding.

pub mod configuration;

pub mod error;

pub mod math {
    pub mod function {
        pub mod parametricfunction;
    }

    pub mod distribution {
        pub mod distributionparameters;
        pub mod gaussian;
        pub mod tailprobability;
    }

    pub mod integration {
        pub mod integrationbounds;
        pub mod simpson;
    }

    pub mod rootfinding {
        pub mod secant;
        pub mod costfunction;
    }
}
