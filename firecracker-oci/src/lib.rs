// Copyright (c) Microsoft. All rights reserved.

//! Spec options that tell a Firecracker-backed containerd runtime which
//! microVM a container belongs in, and how much memory that microVM gets.
//!
//! ```
//! use firecracker_oci::{generate_spec, with_vm_id, with_vm_memory_mib, Container, SpecOpts};
//!
//! let container = Container::new("redis");
//! let opts: Vec<Box<dyn SpecOpts<(), ()>>> = vec![
//!     Box::new(with_vm_id("vm-42")),
//!     Box::new(with_vm_memory_mib(1024)),
//! ];
//!
//! let spec = generate_spec(&(), &(), &container, &opts).unwrap();
//! assert_eq!("vm-42", spec.annotations[firecracker_oci::VM_ID_ANNOTATION_KEY]);
//! assert_eq!("1024", spec.annotations[firecracker_oci::VM_MEMORY_MIB_ANNOTATION_KEY]);
//! ```

#![deny(rust_2018_idioms, warnings)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod annotation;
mod container;
mod error;
mod logging;
mod opts;
mod settings;

pub use crate::annotation::{
    with_vm_id, with_vm_memory_mib, WithVmId, WithVmMemoryMib, VM_ID_ANNOTATION_KEY,
    VM_MEMORY_MIB_ANNOTATION_KEY,
};
pub use crate::container::Container;
pub use crate::error::{Error, Result};
pub use crate::logging::log_failure;
pub use crate::opts::{apply_opts, generate_spec, spec_opt, FnOpt, SpecOpts};
pub use crate::settings::{PlacementSettings, ENV_PREFIX};

pub use oci_runtime::v1::Spec;
