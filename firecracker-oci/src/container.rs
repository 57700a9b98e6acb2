// Copyright (c) Microsoft. All rights reserved.

use std::collections::BTreeMap;

/// The container a runtime spec is being generated for.
///
/// Spec options receive this for context only. Nothing here is validated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Container {
    id: String,
    image: Option<String>,
    labels: BTreeMap<String, String>,
    runtime: Option<String>,
    snapshotter: Option<String>,
    snapshot_key: Option<String>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Container {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    #[must_use]
    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// Name of the containerd runtime the container is created with, e.g.
    /// `aws.firecracker`.
    pub fn runtime(&self) -> Option<&str> {
        self.runtime.as_deref()
    }

    #[must_use]
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    pub fn snapshotter(&self) -> Option<&str> {
        self.snapshotter.as_deref()
    }

    #[must_use]
    pub fn with_snapshotter(mut self, snapshotter: impl Into<String>) -> Self {
        self.snapshotter = Some(snapshotter.into());
        self
    }

    pub fn snapshot_key(&self) -> Option<&str> {
        self.snapshot_key.as_deref()
    }

    #[must_use]
    pub fn with_snapshot_key(mut self, snapshot_key: impl Into<String>) -> Self {
        self.snapshot_key = Some(snapshot_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let labels: BTreeMap<_, _> = vec![("app".to_string(), "redis".to_string())]
            .into_iter()
            .collect();

        let container = Container::new("c1")
            .with_image("docker.io/library/redis:latest")
            .with_labels(labels.clone())
            .with_runtime("aws.firecracker")
            .with_snapshotter("devmapper")
            .with_snapshot_key("c1-snapshot");

        assert_eq!("c1", container.id());
        assert_eq!(Some("docker.io/library/redis:latest"), container.image());
        assert_eq!(&labels, container.labels());
        assert_eq!(Some("aws.firecracker"), container.runtime());
        assert_eq!(Some("devmapper"), container.snapshotter());
        assert_eq!(Some("c1-snapshot"), container.snapshot_key());
    }

    #[test]
    fn new_container_has_only_id() {
        let container = Container::new("");
        assert_eq!("", container.id());
        assert!(container.image().is_none());
        assert!(container.labels().is_empty());
        assert!(container.runtime().is_none());
    }
}
