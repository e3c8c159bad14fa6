//! Executes parsed commands against a project gateway.

use crate::{
    commands::Commands,
    error::{CliError, Result as CliResult},
    project_commands::{CreateArgs, EditArgs, ProjectCommands},
};

use folio_admin::{
    CreateForm, CreateOutcome, EditOutcome, EditPresentation, EditSession, Notifier,
    ProjectGateway, messages,
};
use folio_core::{ImageFile, ProjectSchema};

use log::info;
use serde_json::{Value, json};

/// Run one command and return the JSON value to print.
pub async fn run<G, N>(
    command: Commands,
    gateway: &G,
    schema: ProjectSchema,
    notifier: &N,
) -> CliResult<Value>
where
    G: ProjectGateway + ?Sized,
    N: Notifier + ?Sized,
{
    match command {
        Commands::Project { action } => match action {
            ProjectCommands::Get { id } => get_project(gateway, &id).await,
            ProjectCommands::Create(args) => create_project(gateway, notifier, args).await,
            ProjectCommands::Edit(args) => edit_project(gateway, schema, notifier, args).await,
        },
    }
}

async fn get_project<G>(gateway: &G, id: &str) -> CliResult<Value>
where
    G: ProjectGateway + ?Sized,
{
    match gateway.fetch_project(id).await? {
        Some(project) => Ok(serde_json::to_value(project)?),
        None => Err(CliError::not_found(id)),
    }
}

async fn create_project<G, N>(gateway: &G, notifier: &N, args: CreateArgs) -> CliResult<Value>
where
    G: ProjectGateway + ?Sized,
    N: Notifier + ?Sized,
{
    let mut form = CreateForm::new();
    for (field, value) in args.field_values() {
        form.set_field(field, value);
    }

    if let Some(ref path) = args.image {
        form.select_images(vec![ImageFile::from_path(path)?]);
    }

    match form.submit(gateway, notifier).await {
        CreateOutcome::Created => {
            info!("Created project {:?}", args.title);
            Ok(json!({ "status": "created", "title": args.title }))
        }
        CreateOutcome::MissingFields(fields) => {
            let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
            Err(CliError::rejected(format!(
                "{}: {}",
                messages::MISSING_FIELDS,
                names.join(", ")
            )))
        }
        CreateOutcome::MissingImage => Err(CliError::rejected(messages::MISSING_IMAGE)),
        CreateOutcome::Failed => Err(CliError::rejected(messages::CREATE_FAILURE)),
    }
}

async fn edit_project<G, N>(
    gateway: &G,
    schema: ProjectSchema,
    notifier: &N,
    args: EditArgs,
) -> CliResult<Value>
where
    G: ProjectGateway + ?Sized,
    N: Notifier + ?Sized,
{
    let mut session = EditSession::new(args.id.clone(), schema);
    session.load(gateway).await;

    match session.presentation() {
        EditPresentation::Form(_) => {}
        EditPresentation::NotFound => return Err(CliError::not_found(args.id)),
        EditPresentation::Loading | EditPresentation::FetchError => {
            return Err(CliError::fetch_failed(args.id));
        }
    }

    let image = match args.image {
        Some(ref path) => Some(ImageFile::from_path(path)?),
        None => None,
    };

    let Some(form) = session.form_mut() else {
        return Err(CliError::not_found(args.id));
    };

    for (field, value) in args.field_overrides() {
        form.set_field(field, value);
    }
    if let Some(image) = image {
        form.select_images(vec![image]);
    }

    match form.submit(gateway, notifier).await {
        EditOutcome::Updated => Ok(json!({ "status": "updated", "id": args.id })),
        EditOutcome::Invalid => Err(CliError::invalid(form.errors().clone())),
        EditOutcome::Failed => Err(CliError::rejected(messages::EDIT_FAILURE)),
    }
}
