use super::*;
use clap::Parser;
use payvault_core::models::{Level, MatchMode, SortCriterion};

#[test]
fn search_parses_filters_sort_and_limit() {
    let cli = Cli::try_parse_from([
        "payvault",
        "search",
        "alert",
        "--category",
        "XSS",
        "--subcategory",
        "DOM",
        "--sort",
        "favorites",
        "--limit",
        "5",
    ])
    .expect("parse");
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "alert");
            assert_eq!(args.category.as_deref(), Some("XSS"));
            assert_eq!(args.subcategory.as_deref(), Some("DOM"));
            assert_eq!(args.sort, Some(SortCriterion::FavoriteFirst));
            assert_eq!(args.limit, Some(5));
            assert!(!args.regex);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_accepts_hyphen_leading_query() {
    let cli = Cli::try_parse_from(["payvault", "search", "--regex", "-1 OR"]).expect("parse");
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "-1 OR");
            assert!(args.regex);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_rejects_zero_limit_and_unknown_sort() {
    assert!(Cli::try_parse_from(["payvault", "search", "x", "--limit", "0"]).is_err());
    assert!(Cli::try_parse_from(["payvault", "search", "x", "--sort", "score"]).is_err());
    assert!(Cli::try_parse_from(["payvault", "search", "x", "--regex", "--literal"]).is_err());
}

#[test]
fn global_flags_apply_after_subcommand() {
    let cli = Cli::try_parse_from(["payvault", "status", "--root", "/tmp/vault", "-v"])
        .expect("parse");
    assert_eq!(cli.root, std::path::PathBuf::from("/tmp/vault"));
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Status));
}

#[test]
fn add_collects_repeated_tags_and_level() {
    let cli = Cli::try_parse_from([
        "payvault",
        "add",
        "--title",
        "Probe",
        "--payload",
        "-- comment",
        "--category",
        "SQLi",
        "--tag",
        "a",
        "--tag",
        "b",
        "--level",
        "High",
    ])
    .expect("parse");
    match cli.command {
        Commands::Add(args) => {
            assert_eq!(args.payload, "-- comment");
            assert_eq!(args.tags, vec!["a", "b"]);
            assert_eq!(args.level, Some(Level::High));
            assert_eq!(args.subcategory, None);
        }
        _ => panic!("expected add command"),
    }
}

#[test]
fn edit_rejects_tags_with_clear_tags() {
    assert!(
        Cli::try_parse_from(["payvault", "edit", "user-1", "--tag", "a", "--clear-tags"]).is_err()
    );
}

#[test]
fn sync_force_flag_parses() {
    let cli = Cli::try_parse_from(["payvault", "sync", "--force"]).expect("parse");
    match cli.command {
        Commands::Sync(args) => assert!(args.force),
        _ => panic!("expected sync command"),
    }
}

#[test]
fn note_and_prefs_subcommands_parse() {
    let cli = Cli::try_parse_from([
        "payvault", "note", "add", "--title", "idea", "--entry", "xss-001",
    ])
    .expect("parse");
    match cli.command {
        Commands::Note(NoteArgs {
            command: NoteCommand::Add { title, body, entry },
        }) => {
            assert_eq!(title, "idea");
            assert_eq!(body, "");
            assert_eq!(entry.as_deref(), Some("xss-001"));
        }
        _ => panic!("expected note add command"),
    }

    let cli = Cli::try_parse_from([
        "payvault",
        "prefs",
        "set",
        "--match-mode",
        "regex",
        "--font-size",
        "14",
    ])
    .expect("parse");
    match cli.command {
        Commands::Prefs(PrefsArgs {
            command:
                PrefsCommand::Set {
                    match_mode,
                    font_size,
                    ..
                },
        }) => {
            assert_eq!(match_mode, Some(MatchMode::Regex));
            assert_eq!(font_size, Some(14));
        }
        _ => panic!("expected prefs set command"),
    }
    assert!(Cli::try_parse_from(["payvault", "prefs", "set", "--font-size", "40"]).is_err());
}

#[test]
fn font_size_bounds_follow_core_preferences() {
    use payvault_core::models::{MAX_FONT_SIZE, MIN_FONT_SIZE};

    use super::parsers::parse_font_size;

    assert_eq!(parse_font_size(&MIN_FONT_SIZE.to_string()), Ok(MIN_FONT_SIZE));
    assert_eq!(parse_font_size(&MAX_FONT_SIZE.to_string()), Ok(MAX_FONT_SIZE));
    assert!(parse_font_size(&(MIN_FONT_SIZE - 1).to_string()).is_err());
    assert!(parse_font_size(&(MAX_FONT_SIZE + 1).to_string()).is_err());
}
