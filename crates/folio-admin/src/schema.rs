use folio_config::ValidationConfig;
use folio_core::ProjectSchema;

/// Project form schema with the configured length limits
pub fn project_schema(config: &ValidationConfig) -> ProjectSchema {
    ProjectSchema {
        max_title_length: config.max_title_length,
        max_subtitle_length: config.max_subtitle_length,
        max_description_length: config.max_description_length,
    }
}
