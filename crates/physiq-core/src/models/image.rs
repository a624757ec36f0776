// ABOUTME: Image intake types for uploaded and camera-captured photos
// ABOUTME: ImageData payload validation, data-URL decoding, and the capture error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Camera facing mode negotiated at capture time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraFacing {
    /// Rear camera (capture default)
    #[default]
    Back,
    /// Selfie camera; stills arrive mirrored
    Front,
}

/// Where the analyzed photo came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ImageSource {
    /// File picker or drag-and-drop upload
    Upload,
    /// Still frame extracted from the camera stream
    Camera {
        /// Which camera produced the frame
        facing: CameraFacing,
    },
}

/// An image accepted for analysis
///
/// The engine never decodes pixels itself; the payload is handed opaque to
/// the model adapters. Intake only validates that the payload looks like an
/// image at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// MIME type, always `image/*`
    pub mime_type: String,
    /// Raw encoded image bytes
    pub bytes: Bytes,
    /// Where the photo came from
    pub source: ImageSource,
}

impl ImageData {
    /// Accept an image payload for analysis
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` for a non-image MIME type and for
    /// an empty payload.
    pub fn new(
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
        source: ImageSource,
    ) -> AppResult<Self> {
        let mime_type = mime_type.into();
        if !mime_type.starts_with("image/") {
            return Err(AppError::invalid_input(format!(
                "expected an image MIME type, got {mime_type}"
            )));
        }
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(AppError::invalid_input("image payload is empty"));
        }
        Ok(Self {
            mime_type,
            bytes,
            source,
        })
    }

    /// Decode a `data:image/...;base64,...` URL into an image payload
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when the URL is not a base64 image
    /// data URL, or when the base64 payload fails to decode.
    pub fn from_data_url(url: &str, source: ImageSource) -> AppResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| AppError::invalid_input("not a data URL"))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| AppError::invalid_input("data URL is not base64 encoded"))?;
        let decoded = BASE64
            .decode(payload)
            .map_err(|e| AppError::invalid_input(format!("invalid base64 image data: {e}")))?;
        Self::new(mime_type, decoded, source)
    }

    /// Whether the still needs horizontal un-mirroring before display
    #[must_use]
    pub const fn is_mirrored(&self) -> bool {
        matches!(
            self.source,
            ImageSource::Camera {
                facing: CameraFacing::Front
            }
        )
    }

    /// Payload size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload is empty (never, for a validated image)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Classified camera-capture failure
///
/// Mirrors the error names surfaced by browser media-device stacks. Each
/// variant carries remediation text shown as a blocking alert before the
/// session falls back to upload mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaptureFailure {
    /// Camera permission denied by the user or platform policy
    PermissionDenied,
    /// No camera device present
    NotFound,
    /// Device exists but the stream could not be read (in use elsewhere)
    NotReadable,
    /// Requested constraints (resolution, facing) cannot be satisfied;
    /// a retry with relaxed constraints may succeed
    Overconstrained,
    /// Anything else
    Unknown,
}

impl CaptureFailure {
    /// Classify an adapter error name into the capture taxonomy
    #[must_use]
    pub fn classify(error_name: &str) -> Self {
        match error_name {
            "NotAllowedError" | "PermissionDeniedError" => Self::PermissionDenied,
            "NotFoundError" | "DevicesNotFoundError" => Self::NotFound,
            "NotReadableError" | "TrackStartError" => Self::NotReadable,
            "OverconstrainedError" | "ConstraintNotSatisfiedError" => Self::Overconstrained,
            _ => Self::Unknown,
        }
    }

    /// Whether the caller should retry capture with relaxed constraints
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Overconstrained)
    }

    /// User-facing remediation text for the blocking alert
    #[must_use]
    pub const fn remediation(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Camera access was denied. On iPhone: Settings > Safari > Camera > Allow. \
                 On Android: tap the lock icon in the address bar and allow Camera. \
                 Then reload and try again, or upload a photo instead."
            }
            Self::NotFound => "No camera was found on this device. Please upload a photo instead.",
            Self::NotReadable => {
                "The camera is in use by another app. Close other camera apps and try again."
            }
            Self::Overconstrained => {
                "The camera does not support the requested mode. Retrying with default settings."
            }
            Self::Unknown => "Could not start the camera. Please upload a photo instead.",
        }
    }

    /// Convert into the engine error type
    #[must_use]
    pub fn into_error(self) -> AppError {
        AppError::capture(self.remediation())
    }
}
