//! Content Records
//!
//! Data model of the content API. All visitor-facing text is bilingual.

use std::fmt;

use kernel::BilingualText;
use kernel::id::{ContactMessageId, ImageId, ProjectId};
use serde::{Deserialize, Serialize};

/// Opaque image handle
///
/// Either a URL the image can be fetched from directly, or the raw bytes of
/// an upload that has not been stored yet.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ExternalBlob {
    Url(String),
    Bytes(Vec<u8>),
}

impl ExternalBlob {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    pub fn direct_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Bytes(_) => None,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Url(_) => None,
            Self::Bytes(bytes) => Some(bytes),
        }
    }
}

impl fmt::Debug for ExternalBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// Organization details shown in the header, footer and contact page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDetails {
    pub name: BilingualText,
    pub mission: BilingualText,
    pub address: BilingualText,
    pub email: String,
    pub phone: String,
    pub facebook_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ExternalBlob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: BilingualText,
    pub description: BilingualText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ExternalBlob>,
}

/// Gallery or homepage image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: ImageId,
    pub caption: BilingualText,
    pub image: ExternalBlob,
}

/// Message submitted through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_accessors() {
        let blob = ExternalBlob::from_url("https://cdn.example.org/logo.png");
        assert_eq!(blob.direct_url(), Some("https://cdn.example.org/logo.png"));
        assert_eq!(blob.bytes(), None);

        let blob = ExternalBlob::from_bytes(vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(blob.direct_url(), None);
        assert_eq!(blob.bytes(), Some(&[0x89, 0x50, 0x4e, 0x47][..]));
        assert_eq!(format!("{blob:?}"), "Bytes(4 bytes)");
    }

    #[test]
    fn test_organization_json_shape() {
        let details = OrganizationDetails {
            name: BilingualText::new("Seva Trust", "सेवा ट्रस्ट"),
            facebook_link: "https://facebook.com/seva".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["name"]["hindi"], "सेवा ट्रस्ट");
        assert_eq!(json["facebookLink"], "https://facebook.com/seva");
        assert!(json.get("logo").is_none());

        let back: OrganizationDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
    }
}
