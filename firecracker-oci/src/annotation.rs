// Copyright (c) Microsoft. All rights reserved.

use oci_runtime::v1::Spec;

use crate::container::Container;
use crate::error::Result;
use crate::opts::SpecOpts;

/// Runtime config annotation naming the Firecracker microVM the container
/// should be started in.
pub const VM_ID_ANNOTATION_KEY: &str = "aws.firecracker.vm.id";

/// Runtime config annotation holding the memory size, in MiB, of the
/// Firecracker microVM the container should be started in.
pub const VM_MEMORY_MIB_ANNOTATION_KEY: &str = "aws.firecracker.vm.mem_mib";

/// Spec option returned by [`with_vm_id`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithVmId {
    vm_id: String,
}

impl WithVmId {
    pub fn vm_id(&self) -> &str {
        &self.vm_id
    }
}

/// Annotates the container's runtime spec with the ID of the Firecracker VM
/// it should run in.
///
/// The ID is passed through as-is, empty string included. Whether it names a
/// real VM is up to the VM manager reading the annotation.
pub fn with_vm_id(vm_id: impl Into<String>) -> WithVmId {
    WithVmId {
        vm_id: vm_id.into(),
    }
}

impl<Ctx, Cl> SpecOpts<Ctx, Cl> for WithVmId
where
    Ctx: ?Sized,
    Cl: ?Sized,
{
    fn apply(&self, _: &Ctx, _: &Cl, _: &Container, spec: &mut Spec) -> Result<()> {
        spec.annotations
            .insert(VM_ID_ANNOTATION_KEY.to_string(), self.vm_id.clone());
        Ok(())
    }
}

/// Spec option returned by [`with_vm_memory_mib`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WithVmMemoryMib {
    memory_mib: u32,
}

impl WithVmMemoryMib {
    pub fn memory_mib(&self) -> u32 {
        self.memory_mib
    }
}

/// Annotates the container's runtime spec with the desired Firecracker VM
/// memory size in MiB, written as a plain base-10 string.
pub fn with_vm_memory_mib(memory_mib: u32) -> WithVmMemoryMib {
    WithVmMemoryMib { memory_mib }
}

impl<Ctx, Cl> SpecOpts<Ctx, Cl> for WithVmMemoryMib
where
    Ctx: ?Sized,
    Cl: ?Sized,
{
    fn apply(&self, _: &Ctx, _: &Cl, _: &Container, spec: &mut Spec) -> Result<()> {
        spec.annotations.insert(
            VM_MEMORY_MIB_ANNOTATION_KEY.to_string(),
            self.memory_mib.to_string(),
        );
        Ok(())
    }
}
