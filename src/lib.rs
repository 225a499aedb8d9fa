pub mod binning;
pub mod config;
pub mod daykey;
pub mod error;
pub mod grid;
pub mod schedule;
pub mod selection;
pub mod view;

pub use crate::error::{Error, ErrorKind};
