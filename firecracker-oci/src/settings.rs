// Copyright (c) Microsoft. All rights reserved.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use log::info;
use serde::Deserialize;

use crate::annotation::{with_vm_id, with_vm_memory_mib};
use crate::error::Result;
use crate::opts::SpecOpts;

/// Prefix of environment variables that override file settings, e.g.
/// `FIRECRACKER_OCI_VM_ID`.
pub const ENV_PREFIX: &str = "FIRECRACKER_OCI";

/// Where a container should be placed, as read from configuration.
///
/// ```json
/// { "vm_id": "vm-42", "memory_mib": 1024 }
/// ```
///
/// Values are passed to the spec options unchecked.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct PlacementSettings {
    #[serde(default)]
    vm_id: Option<String>,

    #[serde(default)]
    memory_mib: Option<u32>,
}

impl PlacementSettings {
    /// Loads settings from a JSON file, then applies `FIRECRACKER_OCI_*`
    /// environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading placement settings from {}", path.display());

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(s, FileFormat::Json))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn vm_id(&self) -> Option<&str> {
        self.vm_id.as_deref()
    }

    #[must_use]
    pub fn with_vm_id(mut self, vm_id: Option<String>) -> Self {
        self.vm_id = vm_id;
        self
    }

    pub fn memory_mib(&self) -> Option<u32> {
        self.memory_mib
    }

    #[must_use]
    pub fn with_memory_mib(mut self, memory_mib: Option<u32>) -> Self {
        self.memory_mib = memory_mib;
        self
    }

    /// The spec options these settings ask for: VM ID first, then memory.
    /// Unset fields contribute nothing.
    pub fn spec_opts<Ctx, Cl>(&self) -> Vec<Box<dyn SpecOpts<Ctx, Cl>>>
    where
        Ctx: ?Sized,
        Cl: ?Sized,
    {
        let mut opts: Vec<Box<dyn SpecOpts<Ctx, Cl>>> = Vec::new();
        if let Some(vm_id) = &self.vm_id {
            opts.push(Box::new(with_vm_id(vm_id.as_str())));
        }
        if let Some(memory_mib) = self.memory_mib {
            opts.push(Box::new(with_vm_memory_mib(memory_mib)));
        }
        opts
    }
}
