//! Static Profile Store: the CV sections behind `/api/v1/cv`.
//!
//! The data is built once and shared; accessors are async and wait a fixed
//! latency so callers treat them the same way as the repository client.

pub mod data;
pub mod format;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use crate::models::profile::{
    Certification, CvData, Education, PersonalProject, Profile, Skills, WorkExperience,
};

#[derive(Clone)]
pub struct ProfileStore {
    data: Arc<CvData>,
    latency: Duration,
}

impl ProfileStore {
    pub fn new(latency: Duration) -> Self {
        Self {
            data: Arc::new(data::cv_data()),
            latency,
        }
    }

    async fn load(&self) -> &CvData {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        &self.data
    }

    pub async fn cv(&self) -> &CvData {
        self.load().await
    }

    pub async fn profile(&self) -> &Profile {
        &self.load().await.profile
    }

    pub async fn work_experience(&self) -> &[WorkExperience] {
        &self.load().await.work_experience
    }

    pub async fn education(&self) -> &[Education] {
        &self.load().await.education
    }

    pub async fn certifications(&self) -> &[Certification] {
        &self.load().await.certifications
    }

    pub async fn skills(&self) -> &Skills {
        &self.load().await.skills
    }

    pub async fn projects(&self) -> &[PersonalProject] {
        &self.load().await.projects
    }
}
