// src/lib.rs

//! # quadlab
//!
//! Small numerical-analysis demonstrations: the classic composite quadrature
//! rules (midpoint, trapezium, Simpson's 1/3) together with a convergence
//! sampler that measures their error against a reference integral, and a
//! fixed-step scan counting samples across power-of-two float intervals.
//!
//! The library computes numeric series only; the `integration_convergence`
//! and `float_distribution` binaries consume those series to render charts
//! and print summaries.

//This section pertains to the composite quadrature rules and their error sweep
pub mod quadrature;
pub mod convergence;

//This section pertains to the float-density scan
pub mod float_scan;
