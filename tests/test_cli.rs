use clap::Parser;
use granolaview::cli::args::{Args, Command};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["granolaview", "doc-123"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_uses_config_default_limit() {
    // Arrange
    let args = vec!["granolaview", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { limit, json } => {
            assert_eq!(limit, None);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.credentials, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_list_with_limit_and_json_when_parsing_then_succeeds() {
    let args = vec!["granolaview", "list", "--limit", "5", "--json"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::List { limit, json } => {
            assert_eq!(limit, Some(5));
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_show_command_when_parsing_then_transcript_defaults_to_false() {
    // Arrange
    let args = vec!["granolaview", "show", "doc-123"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Show {
            document_id,
            transcript,
        } => {
            assert_eq!(document_id, "doc-123");
            assert!(!transcript);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn given_show_with_transcript_flag_when_parsing_then_transcript_is_true() {
    let args = vec!["granolaview", "show", "-t", "doc-123"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Show { transcript, .. } => assert!(transcript),
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn given_search_command_when_parsing_then_captures_query() {
    let args = vec!["granolaview", "search", "roadmap review", "-l", "100"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Search { query, limit, json } => {
            assert_eq!(query, "roadmap review");
            assert_eq!(limit, Some(100));
            assert!(!json);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn given_latest_command_when_parsing_then_captures_person() {
    let args = vec!["granolaview", "latest", "Sam", "--transcript"];

    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Latest { person, transcript } => {
            assert_eq!(person, "Sam");
            assert!(transcript);
        }
        _ => panic!("Expected Latest command"),
    }
}

#[test]
fn given_global_credentials_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["granolaview", "-c", "/tmp/supabase.json", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.credentials, Some(PathBuf::from("/tmp/supabase.json")));
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "granolaview",
        "show",
        "--config",
        "/tmp/granolaview.toml",
        "-vv",
        "doc-123",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.config, Some(PathBuf::from("/tmp/granolaview.toml")));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_non_numeric_limit_when_parsing_then_fails() {
    let args = vec!["granolaview", "list", "--limit", "many"];

    assert!(Args::try_parse_from(args).is_err());
}
