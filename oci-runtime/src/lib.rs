// Copyright (c) Microsoft. All rights reserved.

//! Types used by the [OCI Runtime Spec](https://github.com/opencontainers/runtime-spec)

pub mod v1;
