//! Domain-agnostic many-objective evolutionary optimization.
//!
//! Provides a generic implementation of **NSGA-III**, the
//! reference-point-based evolutionary algorithm for problems with three or
//! more objectives:
//!
//! - **Trait-based problem definition**: implement
//!   [`nsga3::Nsga3Problem`] with your genome type, evaluation function,
//!   and variation operators — the engine handles ranking, normalization,
//!   and survival.
//! - **Reference-point niching**: per-generation hyperplane normalization
//!   (ideal/nadir estimation with degenerate-geometry fallback),
//!   nearest-direction association, and a frequency-balanced niching fill
//!   keep the population spread across the Pareto front.
//! - **Building blocks exposed**: non-dominated sorting, simplex-lattice
//!   reference directions, SBX/polynomial-mutation operators, and the
//!   environmental-selection procedure itself are public for callers that
//!   bring their own driver loop.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts — scheduling, design optimization,
//! portfolio selection, etc. are all defined by consumers at higher layers.
//! Dense linear algebra for the nadir-intercept system comes from
//! `nalgebra`; randomness is threaded explicitly through every stochastic
//! step via `rand`.

pub mod nsga3;
