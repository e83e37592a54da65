//! Built-in vendor dictionaries.
//!
//! Each module declares the private attributes of one private creator,
//! along with a constant for each tag pattern.
//! Modules are gated by a Cargo feature of the same name.

#[cfg(feature = "gems-imag-01")]
pub mod gems_imag_01;
