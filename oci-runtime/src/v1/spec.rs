// Copyright (c) Microsoft. All rights reserved.

use serde::{Deserialize, Serialize};

use super::{Annotations, VERSION};

/// Spec is the base configuration for the container.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Spec {
    /// Version of the Open Container Runtime Specification with which the
    /// bundle complies.
    #[serde(rename = "ociVersion")]
    pub version: String,
    /// Process configures the container process.
    #[serde(rename = "process", skip_serializing_if = "Option::is_none")]
    pub process: Option<Process>,
    /// Root configures the container's root filesystem.
    #[serde(rename = "root", skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
    /// Hostname configures the container's hostname.
    #[serde(rename = "hostname", skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Mounts configures additional mounts (on top of Root).
    #[serde(rename = "mounts", skip_serializing_if = "Vec::is_empty", default)]
    pub mounts: Vec<Mount>,
    /// Annotations contains arbitrary metadata for the container.
    ///
    /// Always present in memory. Left out of the serialized config when empty.
    #[serde(
        rename = "annotations",
        skip_serializing_if = "Annotations::is_empty",
        default
    )]
    pub annotations: Annotations,
}

impl Spec {
    /// An empty spec stamped with the supported runtime spec version.
    pub fn new() -> Self {
        Spec {
            version: VERSION.to_string(),
            ..Default::default()
        }
    }
}

/// Process contains information to start a specific application inside the
/// container.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Process {
    /// Terminal creates an interactive terminal for the container.
    #[serde(rename = "terminal", skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    /// User specifies user information for the process.
    #[serde(rename = "user")]
    pub user: User,
    /// Args specifies the binary and arguments for the application to execute.
    #[serde(rename = "args")]
    pub args: Vec<String>,
    /// Env populates the process environment for the process.
    #[serde(rename = "env", skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<String>>,
    /// Cwd is the current working directory for the process and must be
    /// relative to the container's root.
    #[serde(rename = "cwd")]
    pub cwd: String,
}

/// User specifies specific user (and group) information for the container
/// process.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct User {
    #[serde(rename = "uid")]
    pub uid: u32,
    #[serde(rename = "gid")]
    pub gid: u32,
    /// AdditionalGids are additional group ids set for the container's process.
    #[serde(rename = "additionalGids", skip_serializing_if = "Option::is_none")]
    pub additional_gids: Option<Vec<u32>>,
}

/// Root contains information about the container's root filesystem on the host.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Root {
    /// Path is the absolute path to the container's root filesystem.
    #[serde(rename = "path")]
    pub path: String,
    #[serde(rename = "readonly", skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
}

/// Mount specifies a mount for a container.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Mount {
    /// Destination is the absolute path where the mount will be placed in the
    /// container.
    #[serde(rename = "destination")]
    pub destination: String,
    /// Type specifies the mount kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Options are fstab style mount options.
    #[serde(rename = "options", skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn new_spec_has_version_and_no_annotations() {
        let spec = Spec::new();
        assert_eq!(VERSION, spec.version);
        assert!(spec.annotations.is_empty());
    }

    #[test]
    fn missing_annotations_deserialize_empty() {
        let spec: Spec = serde_json::from_value(json!({
            "ociVersion": "1.0.2",
            "hostname": "box",
        }))
        .unwrap();

        assert!(spec.annotations.is_empty());
        assert_eq!(Some("box"), spec.hostname.as_deref());
    }

    #[test]
    fn empty_annotations_are_not_serialized() {
        let value = serde_json::to_value(Spec::new()).unwrap();
        assert_eq!(json!({ "ociVersion": "1.0.2" }), value);
    }

    #[test]
    fn annotations_use_config_json_field_name() {
        let mut spec = Spec::new();
        spec.annotations
            .insert("com.example.key".to_string(), "value".to_string());

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(json!({ "com.example.key": "value" }), value["annotations"]);

        let back: Spec = serde_json::from_value(value).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn process_and_mounts_round_trip() {
        let config = json!({
            "ociVersion": "1.0.2",
            "process": {
                "user": { "uid": 0, "gid": 0 },
                "args": ["/bin/sh"],
                "cwd": "/",
            },
            "root": { "path": "rootfs", "readonly": true },
            "mounts": [
                { "destination": "/proc", "type": "proc", "source": "proc" },
            ],
        });

        let spec: Spec = serde_json::from_value(config.clone()).unwrap();
        assert_eq!(vec!["/bin/sh".to_string()], spec.process.as_ref().unwrap().args);
        assert_eq!(Some("proc"), spec.mounts[0].type_.as_deref());
        assert_eq!(config, serde_json::to_value(&spec).unwrap());
    }
}
