#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_access as access;
pub use vc_value as value;

pub use vc_access::{Accessor, AccessorPlan, NodePathAccess};
pub use vc_access::{get_path, get_path_or, set_path};
