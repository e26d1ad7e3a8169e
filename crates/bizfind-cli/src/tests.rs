use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["bizfind", "search"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search {
            location: None,
            industry: IndustrySelection::All,
            sample_count: None,
            format: OutputFormat::Table,
            sample_only: false,
        }
    ));
}

#[test]
fn parses_search_location_and_industry() {
    let cli = Cli::try_parse_from([
        "bizfind",
        "search",
        "Austin, TX",
        "--industry",
        "Food & Beverage",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search {
            location: Some(ref loc),
            industry: IndustrySelection::Category(ref label),
            ..
        } if loc == "Austin, TX" && label == "Food & Beverage"
    ));
}

#[test]
fn industry_all_is_case_insensitive() {
    let cli = Cli::try_parse_from(["bizfind", "search", "--industry", "all"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Search {
            industry: IndustrySelection::All,
            ..
        }
    ));
}

#[test]
fn parses_json_format_and_sample_flags() {
    let cli = Cli::try_parse_from([
        "bizfind",
        "search",
        "--format",
        "json",
        "--sample-only",
        "--sample-count",
        "10",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Search {
            format: OutputFormat::Json,
            sample_only: true,
            sample_count: Some(10),
            ..
        }
    ));
}

#[test]
fn rejects_unknown_format() {
    let result = Cli::try_parse_from(["bizfind", "search", "--format", "csv"]);
    assert!(result.is_err(), "csv is not a supported output format");
}

#[test]
fn rejects_non_numeric_sample_count() {
    let result = Cli::try_parse_from(["bizfind", "search", "--sample-count", "many"]);
    assert!(result.is_err());
}

#[test]
fn parses_industries_command() {
    let cli = Cli::try_parse_from(["bizfind", "industries"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Industries));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["bizfind"]).is_err());
}
