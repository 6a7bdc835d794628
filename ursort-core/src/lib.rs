#![no_std]

//! ursort-core - Key Transform and Counting-Sort Engine
//!
//! This crate provides the pure, allocation-free building blocks of a
//! byte-wise radix sort for fixed-width elements: order-preserving key
//! transforms for signed integers and IEEE-754 floats, the stable
//! per-byte counting-sort engine, configuration values, and input
//! validation. Scratch memory is always caller-supplied, so everything
//! here runs without an allocator and independent sorts share no state.

pub mod codec;
pub mod config;
pub mod element;
pub mod engine;
pub mod error;
pub mod validation;

pub use codec::*;
pub use config::*;
pub use element::*;
pub use engine::*;
pub use error::*;
pub use validation::*;
