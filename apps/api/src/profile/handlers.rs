//! Axum route handlers for the CV sections.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::profile::{
    Certification, CvData, Education, PersonalProject, Profile, Skills, WorkExperience,
};
use crate::profile::format::{format_date, format_duration};
use crate::state::AppState;

/// A timeline entry with its display labels computed at request time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dated<T> {
    #[serde(flatten)]
    pub entry: T,
    pub start_label: String,
    pub end_label: String,
    pub elapsed: String,
}

impl<T> Dated<T> {
    fn new(entry: T, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            entry,
            start_label: format_date(Some(start)),
            end_label: format_date(end),
            elapsed: format_duration(start, end),
        }
    }
}

/// GET /api/v1/cv
pub async fn handle_get_cv(State(state): State<AppState>) -> Json<CvData> {
    Json(state.profile.cv().await.clone())
}

/// GET /api/v1/cv/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.profile().await.clone())
}

/// GET /api/v1/cv/experience
pub async fn handle_get_experience(
    State(state): State<AppState>,
) -> Json<Vec<Dated<WorkExperience>>> {
    let entries = state
        .profile
        .work_experience()
        .await
        .iter()
        .map(|job| Dated::new(job.clone(), job.start_date, job.end_date))
        .collect();
    Json(entries)
}

/// GET /api/v1/cv/education
pub async fn handle_get_education(State(state): State<AppState>) -> Json<Vec<Dated<Education>>> {
    let entries = state
        .profile
        .education()
        .await
        .iter()
        .map(|course| Dated::new(course.clone(), course.start_date, course.end_date))
        .collect();
    Json(entries)
}

/// GET /api/v1/cv/certifications
pub async fn handle_get_certifications(State(state): State<AppState>) -> Json<Vec<Certification>> {
    Json(state.profile.certifications().await.to_vec())
}

/// GET /api/v1/cv/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<Skills> {
    Json(state.profile.skills().await.clone())
}

/// GET /api/v1/cv/projects
pub async fn handle_get_projects(State(state): State<AppState>) -> Json<Vec<PersonalProject>> {
    Json(state.profile.projects().await.to_vec())
}
