//! Rhythm Core Types and Definitions
//!
//! This crate provides the foundational types for drawing Rhythm overlays:
//! repeating guideline patterns (grids, baseline grids, keylines) drawn on top
//! of an application surface to verify spacing and alignment. It includes:
//!
//! - **Geometry**: Integer rectangles and margins ([`geometry`] module)
//! - **Colors**: Color handling with CSS and ARGB support ([`color::Color`])
//! - **Draw**: The [`draw::Canvas`] drawing surface and its SVG and recording implementations
//! - **Spec**: The [`spec::SpecLayer`] capability and the [`spec::GridLines`] layer

pub mod color;
pub mod draw;
pub mod geometry;
pub mod spec;
