use crate::{Cli, Commands, ProjectCommands};

use folio_core::ProjectField;

use std::path::PathBuf;

use clap::Parser;
use googletest::prelude::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn project_action(cli: Cli) -> ProjectCommands {
    match cli.command {
        Commands::Project { action } => action,
    }
}

#[test]
fn given_get_command_when_parsed_then_id_and_flags_are_captured() {
    // Given / When
    let cli = parse(&[
        "folio",
        "--server",
        "http://localhost:4000",
        "project",
        "get",
        "abc123",
        "--pretty",
    ]);

    // Then
    assert_that!(cli.server.as_deref(), some(eq("http://localhost:4000")));
    assert_that!(cli.pretty, eq(true));
    match project_action(cli) {
        ProjectCommands::Get { id } => assert_that!(id.as_str(), eq("abc123")),
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn given_create_command_when_parsed_then_all_fields_are_entered() {
    // Given
    let cli = parse(&[
        "folio",
        "project",
        "create",
        "--title",
        "Weather Station",
        "--subtitle",
        "Sensors",
        "--description",
        "Charts readings.",
        "--github-url",
        "https://github.com/example/weather",
        "--live-url",
        "https://weather.example.com",
        "--image",
        "cover.png",
    ]);

    // When
    let ProjectCommands::Create(args) = project_action(cli) else {
        panic!("expected create");
    };
    let values = args.field_values();

    // Then
    assert_eq!(args.image, Some(PathBuf::from("cover.png")));
    assert_that!(values.len(), eq(5));
    assert_eq!(values[0], (ProjectField::Title, "Weather Station".to_string()));
    assert!(values.iter().all(|(field, _)| *field != ProjectField::Date));
}

#[test]
fn given_create_with_date_when_parsed_then_date_is_entered() {
    // Given
    let cli = parse(&[
        "folio",
        "project",
        "create",
        "--title",
        "t",
        "--subtitle",
        "s",
        "--description",
        "d",
        "--github-url",
        "https://g.example",
        "--live-url",
        "https://l.example",
        "--date",
        "2024-03-01T12:30:00.000Z",
    ]);

    // When
    let ProjectCommands::Create(args) = project_action(cli) else {
        panic!("expected create");
    };

    // Then
    assert!(args.image.is_none());
    assert!(
        args.field_values()
            .contains(&(ProjectField::Date, "2024-03-01T12:30:00.000Z".to_string()))
    );
}

#[test]
fn given_create_without_title_when_parsed_then_parse_fails() {
    // When
    let result = Cli::try_parse_from(["folio", "project", "create", "--subtitle", "s"]);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_edit_with_some_flags_when_parsed_then_only_those_are_overrides() {
    // Given
    let cli = parse(&[
        "folio",
        "project",
        "edit",
        "abc123",
        "--title",
        "New title",
        "--live-url",
        "https://new.example.com",
    ]);

    // When
    let ProjectCommands::Edit(args) = project_action(cli) else {
        panic!("expected edit");
    };
    let overrides = args.field_overrides();

    // Then
    assert_that!(args.id.as_str(), eq("abc123"));
    assert!(args.image.is_none());
    assert_eq!(
        overrides,
        vec![
            (ProjectField::Title, "New title".to_string()),
            (ProjectField::LiveUrl, "https://new.example.com".to_string()),
        ]
    );
}

#[test]
fn given_edit_without_flags_when_parsed_then_no_overrides() {
    // Given
    let cli = parse(&["folio", "project", "edit", "abc123"]);

    // When
    let ProjectCommands::Edit(args) = project_action(cli) else {
        panic!("expected edit");
    };

    // Then
    assert!(args.field_overrides().is_empty());
}
