use folio_core::ProjectField;

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },
    /// Create a project with its image
    Create(CreateArgs),
    /// Edit a project; omitted fields keep their current values
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub subtitle: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub github_url: String,
    #[arg(long)]
    pub live_url: String,
    /// Image file to upload
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Project date (RFC 3339); defaults to now
    #[arg(long)]
    pub date: Option<String>,
}

impl CreateArgs {
    /// Field values to enter into a fresh creation form
    pub fn field_values(&self) -> Vec<(ProjectField, String)> {
        let mut values = vec![
            (ProjectField::Title, self.title.clone()),
            (ProjectField::Subtitle, self.subtitle.clone()),
            (ProjectField::Description, self.description.clone()),
            (ProjectField::GithubUrl, self.github_url.clone()),
            (ProjectField::LiveUrl, self.live_url.clone()),
        ];
        if let Some(ref date) = self.date {
            values.push((ProjectField::Date, date.clone()));
        }
        values
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Project ID
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub subtitle: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub github_url: Option<String>,
    #[arg(long)]
    pub live_url: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    /// Replacement image; the stored image is kept when omitted
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl EditArgs {
    /// Only the fields given on the command line
    pub fn field_overrides(&self) -> Vec<(ProjectField, String)> {
        [
            (ProjectField::Title, &self.title),
            (ProjectField::Subtitle, &self.subtitle),
            (ProjectField::Description, &self.description),
            (ProjectField::GithubUrl, &self.github_url),
            (ProjectField::LiveUrl, &self.live_url),
            (ProjectField::Date, &self.date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}
