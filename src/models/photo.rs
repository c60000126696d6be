use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RecordId;

/// Opaque reference to a captured image.
///
/// Camera hardware is simulated, so the handle is all the app ever holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageHandle(pub String);

impl ImageHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Handle for a freshly simulated capture.
    pub fn capture() -> Self {
        Self(format!("capture://{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A dated belly photo on the progress timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPhoto {
    pub id: RecordId,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub week: u8,
    #[serde(rename = "imageUrl")]
    pub image: ImageHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_handles_are_unique() {
        let a = ImageHandle::capture();
        let b = ImageHandle::capture();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("capture://"));
    }
}
