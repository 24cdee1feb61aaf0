#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod notation;
mod options;
mod path_access;
mod plan;
mod step;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{Accessor, ApplyArgs, DefaultValue, Fallback};
pub use error::{AccessError, NotationSyntaxError, PathNotFoundError, SyntaxErrorKind};
pub use notation::{Notation, Tokenizer};
pub use options::{AccessOptions, BracketMode};
pub use path_access::{NodePathAccess, get_path, get_path_or, set_path};
pub use plan::AccessorPlan;
pub use step::{AccessorStep, MissReason, OffsetStep, StepKind, StepMiss};
