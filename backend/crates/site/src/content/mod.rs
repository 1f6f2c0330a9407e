//! Content API
//!
//! Interface of the remote content service the site reads from and the
//! admin page writes to. Only the data model and an in-memory implementation
//! live here; transport is someone else's concern.

pub mod memory;
pub mod model;

use kernel::BilingualText;
use kernel::error::ErrorKind;
use kernel::id::{ImageId, ProjectId};
use thiserror::Error;

pub use memory::MemoryContentApi;
pub use model::{ContactMessage, ExternalBlob, GalleryImage, OrganizationDetails, Project};

/// Content API errors
#[derive(Debug, Error)]
pub enum ContentError {
    /// No record with this id
    #[error("Content not found: {0}")]
    NotFound(String),

    /// A record with this id already exists
    #[error("Content already exists: {0}")]
    Conflict(String),

    /// Service cannot be reached
    #[error("Content service unavailable: {0}")]
    Unavailable(String),
}

impl ContentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::NotFound(_) => ErrorKind::NotFound,
            ContentError::Conflict(_) => ErrorKind::Conflict,
            ContentError::Unavailable(_) => ErrorKind::StorageUnavailable,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Content service
#[trait_variant::make(ContentApi: Send)]
pub trait LocalContentApi {
    async fn get_organization_details(&self) -> ContentResult<OrganizationDetails>;
    async fn update_organization_details(&self, details: OrganizationDetails) -> ContentResult<()>;

    async fn get_about_us_content(&self) -> ContentResult<BilingualText>;
    async fn update_about_us_content(&self, content: BilingualText) -> ContentResult<()>;

    async fn get_projects(&self) -> ContentResult<Vec<Project>>;
    async fn add_project(&self, project: Project) -> ContentResult<()>;
    /// Replace the project with the same id
    async fn update_project(&self, project: Project) -> ContentResult<()>;
    async fn delete_project(&self, id: ProjectId) -> ContentResult<()>;

    async fn get_gallery_images(&self) -> ContentResult<Vec<GalleryImage>>;
    async fn add_gallery_image(&self, image: GalleryImage) -> ContentResult<()>;
    async fn delete_gallery_image(&self, id: ImageId) -> ContentResult<()>;

    async fn get_homepage_images(&self) -> ContentResult<Vec<GalleryImage>>;
    async fn add_homepage_image(&self, image: GalleryImage) -> ContentResult<()>;
    async fn delete_homepage_image(&self, id: ImageId) -> ContentResult<()>;

    async fn add_contact_message(&self, message: ContactMessage) -> ContentResult<()>;
    async fn get_contact_messages(&self) -> ContentResult<Vec<ContactMessage>>;
}
