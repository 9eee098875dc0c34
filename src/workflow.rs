// SPDX-License-Identifier: GPL-3.0-only

//! The capture → filter preview → upload state machine
//!
//! [`CaptureUploadWorkflow`] owns the current photo and drives the whole
//! session: acquire an image, render the filter previews, commit one, and
//! push the result to the object store. The three collaborators sit behind
//! traits so the machine can be exercised without hardware or a network.

use crate::constants::{DEFAULT_OBJECT_PREFIX, UPLOAD_JPEG_QUALITY};
use crate::encoding;
use crate::errors::WorkflowError;
use crate::filters::{FilterService, FilterVariant};
use crate::photo::Photo;
use crate::sources::{CaptureSource, PickOutcome, SourceKind};
use crate::upload::ObjectStorage;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, info, warn};

/// Where the workflow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// No photo yet
    Idle,
    /// A photo is current, no filter committed
    PhotoSelected,
    /// Filter previews have been requested for the current photo
    FiltersPreviewed,
    /// A filtered rendition replaced the current photo
    FilterCommitted,
    /// An upload is in flight
    Uploading,
}

/// The photo-share workflow
///
/// One instance per session. At most one photo is current at any time;
/// previews are derived copies that never replace it until
/// [`commit_filter`](Self::commit_filter).
pub struct CaptureUploadWorkflow<C, F, S> {
    capture: C,
    filters: F,
    storage: S,
    state: WorkflowState,
    current: Option<Photo>,
    previews: Vec<(FilterVariant, Photo)>,
    object_prefix: String,
}

impl<C, F, S> CaptureUploadWorkflow<C, F, S>
where
    C: CaptureSource,
    F: FilterService,
    S: ObjectStorage,
{
    pub fn new(capture: C, filters: F, storage: S) -> Self {
        Self {
            capture,
            filters,
            storage,
            state: WorkflowState::Idle,
            current: None,
            previews: Vec::new(),
            object_prefix: DEFAULT_OBJECT_PREFIX.to_string(),
        }
    }

    /// Override the prefix used for uploaded object names
    pub fn with_object_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.object_prefix = prefix.into();
        self
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        self.current.as_ref()
    }

    /// Previews rendered so far, in arrival order
    pub fn previews(&self) -> &[(FilterVariant, Photo)] {
        &self.previews
    }

    /// Look up the rendered preview for one variant
    pub fn preview(&self, variant: FilterVariant) -> Option<&Photo> {
        self.previews
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, photo)| photo)
    }

    /// Pick a photo from the given source
    ///
    /// Returns `true` when a photo was picked and is now current, `false`
    /// when the user cancelled. An unavailable source fails with
    /// [`WorkflowError::SourceUnavailable`] and leaves the state untouched.
    pub async fn select_photo(&mut self, kind: SourceKind) -> Result<bool, WorkflowError> {
        if !self.capture.is_available(kind) {
            return Err(WorkflowError::SourceUnavailable(kind));
        }

        match self.capture.pick_image(kind).await? {
            PickOutcome::Picked(photo) => {
                info!(
                    source = kind.display_name(),
                    width = photo.width(),
                    height = photo.height(),
                    "Photo selected"
                );
                self.current = Some(photo);
                self.previews.clear();
                self.state = WorkflowState::PhotoSelected;
                Ok(true)
            }
            PickOutcome::Cancelled => {
                debug!(source = kind.display_name(), "Pick cancelled");
                Ok(false)
            }
        }
    }

    /// Render all filter previews for the current photo
    ///
    /// The three renders run concurrently with no ordering guarantee;
    /// `on_preview` fires for each rendition as it arrives. A variant whose
    /// render fails is logged and skipped.
    pub async fn preview_filters_with(
        &mut self,
        mut on_preview: impl FnMut(FilterVariant, &Photo),
    ) -> Result<(), WorkflowError> {
        let photo = self.current.clone().ok_or(WorkflowError::NoPhotoSelected)?;

        self.previews.clear();
        self.state = WorkflowState::FiltersPreviewed;

        let filters = &self.filters;
        let mut pending: FuturesUnordered<_> = FilterVariant::ALL
            .into_iter()
            .map(move |variant| {
                let photo = photo.clone();
                async move { (variant, filters.apply(variant, photo).await) }
            })
            .collect();

        while let Some((variant, rendered)) = pending.next().await {
            match rendered {
                Ok(rendered) => {
                    debug!(filter = variant.display_name(), "Preview ready");
                    on_preview(variant, &rendered);
                    self.previews.push((variant, rendered));
                }
                Err(e) => {
                    warn!(filter = variant.display_name(), error = %e, "Preview failed");
                }
            }
        }

        Ok(())
    }

    /// Render all filter previews without observing individual arrivals
    pub async fn preview_filters(&mut self) -> Result<(), WorkflowError> {
        self.preview_filters_with(|_, _| {}).await
    }

    /// Replace the current photo with the chosen filtered rendition
    ///
    /// The unfiltered photo and the other previews are dropped.
    pub fn commit_filter(&mut self, variant: FilterVariant) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::FiltersPreviewed {
            return Err(WorkflowError::FilterNotPreviewed(variant));
        }

        let index = self
            .previews
            .iter()
            .position(|(v, _)| *v == variant)
            .ok_or(WorkflowError::FilterNotPreviewed(variant))?;

        let (_, rendered) = self.previews.swap_remove(index);
        info!(filter = variant.display_name(), "Filter committed");
        self.current = Some(rendered);
        self.previews.clear();
        self.state = WorkflowState::FilterCommitted;
        Ok(())
    }

    /// Encode the current photo and push it to the object store
    ///
    /// Exactly one upload runs at a time; the state returns to its
    /// pre-upload value whether the attempt succeeded or failed, so a
    /// failed attempt can simply be retried with another call. No
    /// automatic retry.
    pub async fn upload(&mut self) -> Result<(), WorkflowError> {
        // Re-entrancy guard; `&mut self` already serializes normal callers
        if self.state == WorkflowState::Uploading {
            return Err(WorkflowError::UploadInFlight);
        }

        let photo = self.current.clone().ok_or(WorkflowError::NoPhotoSelected)?;
        let resume = self.state;
        self.state = WorkflowState::Uploading;

        let name = encoding::object_name(&self.object_prefix);
        let storage = &self.storage;
        let result = async {
            let data = encode_for_upload(photo).await?;
            storage
                .upload_image(data, &name)
                .await
                .map_err(|e| WorkflowError::UploadFailed(e.to_string()))
        }
        .await;

        self.state = resume;

        match &result {
            Ok(()) => info!(name = %name, "Upload succeeded"),
            Err(e) => warn!(name = %name, error = %e, "Upload failed"),
        }
        result
    }
}

/// Encode the photo for transport on the blocking pool
async fn encode_for_upload(photo: Photo) -> Result<Vec<u8>, WorkflowError> {
    tokio::task::spawn_blocking(move || encoding::encode_jpeg(&photo, UPLOAD_JPEG_QUALITY))
        .await
        .map_err(|e| WorkflowError::Photo(crate::errors::PhotoError::EncodingFailed(e.to_string())))?
        .map_err(WorkflowError::from)
}
