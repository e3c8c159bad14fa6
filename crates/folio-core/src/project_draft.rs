//! Client-side, in-progress copy of a project being created or edited.

use crate::{Project, ProjectField, ProjectFields};

use chrono::{SecondsFormat, Utc};

/// Current time in the format the backend stores project dates in
pub fn current_date() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Mutable draft owned by a single form session.
///
/// A draft is never shared between sessions; resetting a form replaces the
/// whole value rather than clearing fields one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Stored image URL, or a session-local preview reference
    pub image_url: String,
    pub github_url: String,
    pub live_url: String,
    pub date: String,
}

impl ProjectDraft {
    /// Blank draft dated now, as shown by a fresh creation form
    pub fn blank() -> Self {
        Self {
            date: current_date(),
            ..Self::default()
        }
    }

    /// Draft pre-filled with the current values of a stored project
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            subtitle: project.subtitle.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            date: project.date.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Title => &self.title,
            ProjectField::Subtitle => &self.subtitle,
            ProjectField::Description => &self.description,
            ProjectField::GithubUrl => &self.github_url,
            ProjectField::LiveUrl => &self.live_url,
            ProjectField::Date => &self.date,
            ProjectField::Image => &self.image_url,
        }
    }

    pub fn set<S: Into<String>>(&mut self, field: ProjectField, value: S) {
        let slot = match field {
            ProjectField::Title => &mut self.title,
            ProjectField::Subtitle => &mut self.subtitle,
            ProjectField::Description => &mut self.description,
            ProjectField::GithubUrl => &mut self.github_url,
            ProjectField::LiveUrl => &mut self.live_url,
            ProjectField::Date => &mut self.date,
            ProjectField::Image => &mut self.image_url,
        };
        *slot = value.into();
    }

    /// Required text fields that are empty or whitespace only
    pub fn blank_required_fields(&self) -> Vec<ProjectField> {
        ProjectField::REQUIRED_TEXT
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Scalar values sent to the backend
    pub fn fields(&self) -> ProjectFields {
        ProjectFields {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            github_url: self.github_url.clone(),
            live_url: self.live_url.clone(),
            date: self.date.clone(),
        }
    }
}
