// Copyright (c) Microsoft. All rights reserved.

mod spec;

pub use spec::*;

use std::collections::HashMap;

/// Version of the OCI runtime spec that these types model.
pub const VERSION: &str = "1.0.2";

/// Arbitrary string metadata attached to a container's runtime config.
///
/// Keys SHOULD be namespaced using reverse domain notation, e.g.
/// `com.example.myKey`. Consumers MUST NOT fail on unknown keys. An absent
/// `annotations` field and an empty map are equivalent.
pub type Annotations = HashMap<String, String>;
