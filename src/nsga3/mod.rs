//! NSGA-III: reference-point based many-objective evolutionary optimization.
//!
//! A generic, domain-agnostic implementation of NSGA-III built on
//! trait-based abstractions. Users define their problem by implementing
//! [`Nsga3Problem`], which specifies how to create, evaluate, crossover,
//! and mutate genomes; the engine evolves a population toward the
//! Pareto-optimal front while preserving spread across it.
//!
//! Diversity is maintained with **reference-point niching** instead of
//! NSGA-II's crowding distance: objective vectors are normalized into a
//! common unit-range space each generation (ideal point plus
//! hyperplane-intercept nadir estimation), associated with the nearest of a
//! fixed set of reference directions, and the boundary front is admitted
//! through a frequency-balanced niching fill.
//!
//! # Core Traits
//!
//! - [`Nsga3Problem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`Nsga3Config`]: Algorithm parameters (population size, reference set, rates)
//! - [`Nsga3Runner`]: Executes the evolutionary loop
//! - [`Nsga3Result`]: Final population with statistics
//! - [`Solution`]: A genome with its objective vector and selection metadata
//!
//! # Submodules
//!
//! - [`selection`]: Environmental selection (front truncation + niching)
//! - [`normalize`]: Hyperplane normalizer (ideal/nadir estimation)
//! - [`associate`]: Nearest-reference-direction association
//! - [`ranking`]: Fast non-dominated sorting
//! - [`reference`]: Simplex-lattice reference-direction generation
//! - [`geometry`]: Perpendicular-distance and vector primitives
//! - [`operators`]: Generic real-coded crossover and mutation (SBX, polynomial)
//!
//! # References
//!
//! - Deb & Jain (2014), *An Evolutionary Many-Objective Optimization
//!   Algorithm Using Reference-Point-Based Nondominated Sorting Approach,
//!   Part I*, IEEE Transactions on Evolutionary Computation 18(4), 577-601
//! - Das & Dennis (1998), *Normal-Boundary Intersection*, SIAM Journal on
//!   Optimization 8(3), 631-657
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;
mod types;

pub mod associate;
pub mod geometry;
pub mod normalize;
pub mod operators;
pub mod ranking;
pub mod reference;
pub mod selection;

pub use config::Nsga3Config;
pub use runner::{Nsga3Result, Nsga3Runner};
pub use types::{Nsga3Problem, Solution};
