//! Category CRUD board for the four label collections.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::dto::RemoveOutcome;
use crate::domain::entities::{Label, LabelCollection, LabelForm, LabelKind};
use crate::domain::errors::ApiError;
use crate::domain::ports::{ConfirmPort, ResourcePort};

/// Shared handle to one label collection.
pub type LabelResource = Arc<dyn ResourcePort<Label, LabelForm>>;

/// Board failures.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A category list could not be fetched; nothing was replaced.
    #[error("failed to load {kind}: {source}")]
    Load {
        /// Category that failed first.
        kind: LabelKind,
        /// Error returned for that category.
        #[source]
        source: ApiError,
    },
    /// No resource serves this category.
    #[error("no resource registered for {0}")]
    Unregistered(LabelKind),
    /// A save or delete was rejected.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl BoardError {
    /// Returns the underlying API error, if any.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Load { source, .. } => Some(source),
            Self::Api(e) => Some(e),
            Self::Unregistered(_) => None,
        }
    }
}

/// Maps every label kind to the resource serving it.
#[derive(Clone, Default)]
pub struct LabelRegistry {
    resources: HashMap<LabelKind, LabelResource>,
}

impl LabelRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry with one resource per kind.
    pub fn from_fn(mut build: impl FnMut(LabelKind) -> LabelResource) -> Self {
        let mut registry = Self::new();
        for kind in LabelKind::ALL {
            registry.insert(kind, build(kind));
        }
        registry
    }

    /// Registers `resource` for `kind`, replacing any previous one.
    pub fn insert(&mut self, kind: LabelKind, resource: LabelResource) {
        self.resources.insert(kind, resource);
    }

    fn resource(&self, kind: LabelKind) -> Result<&LabelResource, BoardError> {
        self.resources
            .get(&kind)
            .ok_or(BoardError::Unregistered(kind))
    }
}

/// Local mirror of the four label lists.
///
/// Lists only change after the server confirms a write.
pub struct LabelBoard {
    registry: LabelRegistry,
    active: LabelKind,
    labels: LabelCollection,
    loading: bool,
    busy: bool,
}

impl LabelBoard {
    /// Empty board on the Food Groups tab; call `load_all` to fill it.
    #[must_use]
    pub fn new(registry: LabelRegistry) -> Self {
        Self {
            registry,
            active: LabelKind::default(),
            labels: LabelCollection::new(),
            loading: false,
            busy: false,
        }
    }

    /// Fetches every list concurrently and replaces them all, or none.
    ///
    /// # Errors
    /// Returns `BoardError::Load` naming the first kind that failed.
    pub async fn load_all(&mut self) -> Result<(), BoardError> {
        self.loading = true;
        let result = self.fetch_all().await;
        self.loading = false;

        let lists = result.inspect_err(|e| warn!(error = %e, "Label refresh failed"))?;
        for (kind, labels) in lists {
            debug!(%kind, count = labels.len(), "Label list refreshed");
            self.labels.replace(kind, labels);
        }
        info!(total = self.labels.len(), "Labels loaded");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<(LabelKind, Vec<Label>)>, BoardError> {
        let mut fetches = Vec::with_capacity(LabelKind::ALL.len());
        for kind in LabelKind::ALL {
            let resource = self.registry.resource(kind)?.clone();
            fetches.push(async move {
                resource
                    .list(None)
                    .await
                    .map(|labels| (kind, labels))
                    .map_err(|source| BoardError::Load { kind, source })
            });
        }
        try_join_all(fetches).await
    }

    /// Creates a label when `existing_id` is empty, otherwise renames it.
    ///
    /// # Errors
    /// Returns `Validation` for a blank name without touching the network,
    /// or the server error; the local list is unchanged on failure.
    pub async fn save(
        &mut self,
        kind: LabelKind,
        name: &str,
        existing_id: Option<&str>,
    ) -> Result<Label, BoardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("name").into());
        }
        let resource = self.registry.resource(kind)?.clone();

        self.busy = true;
        let result = match existing_id.filter(|id| !id.is_empty()) {
            None => {
                debug!(%kind, name, "Creating label");
                resource
                    .create(&LabelForm::create(name))
                    .await
                    .map(|label| {
                        self.labels.append(kind, label.clone());
                        label
                    })
            }
            Some(id) => {
                debug!(%kind, id, name, "Updating label");
                resource
                    .update(id, &LabelForm::update(id, name))
                    .await
                    .map(|label| {
                        if !self.labels.update(kind, id, label.clone()) {
                            debug!(%kind, id, "Updated label was not in the local list");
                        }
                        label
                    })
            }
        };
        self.busy = false;

        let label = result.inspect_err(|e| warn!(%kind, error = %e, "Saving label failed"))?;
        info!(%kind, id = label.id(), "Label saved");
        Ok(label)
    }

    /// Deletes a label after the user confirms.
    ///
    /// # Errors
    /// Returns the server error; the local list is unchanged on failure.
    pub async fn remove(
        &mut self,
        kind: LabelKind,
        id: &str,
        confirm: &dyn ConfirmPort,
    ) -> Result<RemoveOutcome, BoardError> {
        let resource = self.registry.resource(kind)?.clone();
        let message = format!("Delete this {} entry?", kind.title().to_lowercase());
        if !confirm.confirm("Confirm Delete", &message) {
            debug!(%kind, id, "Delete declined");
            return Ok(RemoveOutcome::Declined);
        }

        self.busy = true;
        let result = resource.delete(id).await;
        self.busy = false;

        result.inspect_err(|e| warn!(%kind, id, error = %e, "Deleting label failed"))?;
        self.labels.remove(kind, id);
        info!(%kind, id, "Label deleted");
        Ok(RemoveOutcome::Removed)
    }

    /// Switches the active tab.
    pub fn select(&mut self, kind: LabelKind) {
        self.active = kind;
    }

    /// Tab currently shown.
    #[must_use]
    pub const fn active(&self) -> LabelKind {
        self.active
    }

    /// Last list confirmed by the server for `kind`.
    #[must_use]
    pub fn labels(&self, kind: LabelKind) -> &[Label] {
        self.labels.get(kind)
    }

    /// True while `load_all` is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while a save or delete is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }
}
