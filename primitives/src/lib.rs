#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod entity;
pub mod genetics;
pub mod interfaces;

pub use ecosystem::*;
pub use entity::*;
