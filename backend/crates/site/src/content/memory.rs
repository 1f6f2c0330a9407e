//! In-memory content service
//!
//! Records keep insertion order. Adding an existing id is a conflict;
//! updating or deleting an unknown id is not found.

use std::sync::atomic::{AtomicBool, Ordering};

use kernel::BilingualText;
use kernel::id::{Id, ImageId, ProjectId};
use tokio::sync::RwLock;

use super::model::{ContactMessage, GalleryImage, OrganizationDetails, Project};
use super::{ContentApi, ContentError, ContentResult};

trait Record {
    type Marker;
    fn id(&self) -> Id<Self::Marker>;
}

impl Record for Project {
    type Marker = kernel::id::markers::Project;
    fn id(&self) -> Id<Self::Marker> {
        self.id
    }
}

impl Record for GalleryImage {
    type Marker = kernel::id::markers::Image;
    fn id(&self) -> Id<Self::Marker> {
        self.id
    }
}

impl Record for ContactMessage {
    type Marker = kernel::id::markers::ContactMessage;
    fn id(&self) -> Id<Self::Marker> {
        self.id
    }
}

fn insert<T: Record>(items: &mut Vec<T>, item: T) -> ContentResult<()> {
    let id = item.id();
    if items.iter().any(|existing| existing.id() == id) {
        return Err(ContentError::Conflict(id.to_string()));
    }
    items.push(item);
    Ok(())
}

fn replace<T: Record>(items: &mut [T], item: T) -> ContentResult<()> {
    let id = item.id();
    let slot = items
        .iter_mut()
        .find(|existing| existing.id() == id)
        .ok_or_else(|| ContentError::NotFound(id.to_string()))?;
    *slot = item;
    Ok(())
}

fn remove<T: Record>(items: &mut Vec<T>, id: Id<T::Marker>) -> ContentResult<()> {
    let before = items.len();
    items.retain(|existing| existing.id() != id);
    if items.len() == before {
        return Err(ContentError::NotFound(id.to_string()));
    }
    Ok(())
}

#[derive(Debug, Default)]
struct ContentState {
    organization: OrganizationDetails,
    about_us: BilingualText,
    projects: Vec<Project>,
    gallery: Vec<GalleryImage>,
    homepage: Vec<GalleryImage>,
    messages: Vec<ContactMessage>,
}

/// In-memory [`ContentApi`] with a switchable outage
#[derive(Debug, Default)]
pub struct MemoryContentApi {
    state: RwLock<ContentState>,
    offline: AtomicBool,
}

impl MemoryContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with [`ContentError::Unavailable`]
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> ContentResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ContentError::Unavailable("content service offline".to_string()));
        }
        Ok(())
    }
}

impl ContentApi for MemoryContentApi {
    async fn get_organization_details(&self) -> ContentResult<OrganizationDetails> {
        self.ensure_online()?;
        Ok(self.state.read().await.organization.clone())
    }

    async fn update_organization_details(&self, details: OrganizationDetails) -> ContentResult<()> {
        self.ensure_online()?;
        self.state.write().await.organization = details;
        tracing::info!("Organization details updated");
        Ok(())
    }

    async fn get_about_us_content(&self) -> ContentResult<BilingualText> {
        self.ensure_online()?;
        Ok(self.state.read().await.about_us.clone())
    }

    async fn update_about_us_content(&self, content: BilingualText) -> ContentResult<()> {
        self.ensure_online()?;
        self.state.write().await.about_us = content;
        tracing::info!("About us content updated");
        Ok(())
    }

    async fn get_projects(&self) -> ContentResult<Vec<Project>> {
        self.ensure_online()?;
        Ok(self.state.read().await.projects.clone())
    }

    async fn add_project(&self, project: Project) -> ContentResult<()> {
        self.ensure_online()?;
        let id = project.id;
        insert(&mut self.state.write().await.projects, project)?;
        tracing::info!(project_id = %id, "Project added");
        Ok(())
    }

    async fn update_project(&self, project: Project) -> ContentResult<()> {
        self.ensure_online()?;
        let id = project.id;
        replace(&mut self.state.write().await.projects, project)?;
        tracing::info!(project_id = %id, "Project updated");
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> ContentResult<()> {
        self.ensure_online()?;
        remove(&mut self.state.write().await.projects, id)?;
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }

    async fn get_gallery_images(&self) -> ContentResult<Vec<GalleryImage>> {
        self.ensure_online()?;
        Ok(self.state.read().await.gallery.clone())
    }

    async fn add_gallery_image(&self, image: GalleryImage) -> ContentResult<()> {
        self.ensure_online()?;
        let id = image.id;
        insert(&mut self.state.write().await.gallery, image)?;
        tracing::info!(image_id = %id, "Gallery image added");
        Ok(())
    }

    async fn delete_gallery_image(&self, id: ImageId) -> ContentResult<()> {
        self.ensure_online()?;
        remove(&mut self.state.write().await.gallery, id)?;
        tracing::info!(image_id = %id, "Gallery image deleted");
        Ok(())
    }

    async fn get_homepage_images(&self) -> ContentResult<Vec<GalleryImage>> {
        self.ensure_online()?;
        Ok(self.state.read().await.homepage.clone())
    }

    async fn add_homepage_image(&self, image: GalleryImage) -> ContentResult<()> {
        self.ensure_online()?;
        let id = image.id;
        insert(&mut self.state.write().await.homepage, image)?;
        tracing::info!(image_id = %id, "Homepage image added");
        Ok(())
    }

    async fn delete_homepage_image(&self, id: ImageId) -> ContentResult<()> {
        self.ensure_online()?;
        remove(&mut self.state.write().await.homepage, id)?;
        tracing::info!(image_id = %id, "Homepage image deleted");
        Ok(())
    }

    async fn add_contact_message(&self, message: ContactMessage) -> ContentResult<()> {
        self.ensure_online()?;
        let id = message.id;
        insert(&mut self.state.write().await.messages, message)?;
        tracing::info!(message_id = %id, "Contact message received");
        Ok(())
    }

    async fn get_contact_messages(&self) -> ContentResult<Vec<ContactMessage>> {
        self.ensure_online()?;
        Ok(self.state.read().await.messages.clone())
    }
}
