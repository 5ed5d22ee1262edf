use anyhow::Result;
use plex_tools::errors::{PlexError, ProbeError};
use plex_tools::probe::{probe, walk};
use std::time::Duration;

use crate::common::fixtures::{episode, movie, part, season, show, unsupported, variant};
use crate::common::MockCatalog;

/// Tests for the catalog walker
///
/// These run against an in-memory catalog and check traversal order, record
/// normalisation and the failure policy.

#[test]
fn test_single_movie_single_part() -> Result<()> {
    let catalog = MockCatalog::with_library(
        "1",
        "Movies",
        vec![movie(
            "100",
            "Heat",
            2020,
            7.5,
            vec![variant("1080", 5000, vec![part(6_000_000, 1_000_000_000)])],
        )],
    );

    let result = probe(&catalog, "1")?;
    assert_eq!(result.library, "Movies");
    assert_eq!(result.server, None);
    assert_eq!(result.len(), 1);

    let record = &result.records[0];
    assert_eq!(record.title, "Heat");
    assert_eq!(record.year, 2020);
    assert_eq!(record.rating, 7.5);
    assert_eq!(record.bitrate, 5_000_000);
    assert_eq!(record.size, 1_000_000_000);
    assert_eq!(record.duration, Duration::from_secs(6000));
    assert_eq!(record.quality, "1080p");

    Ok(())
}

#[test]
fn test_show_seasons_episodes_in_encounter_order() -> Result<()> {
    let mut catalog = MockCatalog::with_library("2", "TV", vec![show("10", "Show")]);
    catalog
        .add_children("10", vec![season("11", "Season 1"), season("12", "Season 2")])
        .add_children(
            "11",
            vec![
                episode("111", "Show", 1, 1, "Pilot"),
                episode("112", "Show", 1, 2, "Second"),
            ],
        )
        .add_children(
            "12",
            vec![
                episode("121", "Show", 2, 1, "Return"),
                episode("122", "Show", 2, 2, "Finale"),
            ],
        );

    let result = probe(&catalog, "2")?;
    let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Show (S01E01): Pilot",
            "Show (S01E02): Second",
            "Show (S02E01): Return",
            "Show (S02E02): Finale",
        ]
    );

    // fetches are strictly sequential and depth-first
    assert_eq!(
        *catalog.calls.borrow(),
        vec!["library:2", "children:10", "children:11", "children:12"]
    );

    Ok(())
}

#[test]
fn test_mixed_library_keeps_order() -> Result<()> {
    let mut catalog = MockCatalog::with_library(
        "3",
        "Mixed",
        vec![
            movie("1", "Alpha", 2001, 6.0, vec![variant("720", 2000, vec![part(1000, 10)])]),
            season("20", "Season 1"),
            movie("2", "Omega", 2002, 7.0, vec![variant("sd", 1000, vec![part(1000, 20)])]),
        ],
    );
    catalog.add_children("20", vec![episode("21", "Show", 1, 1, "Pilot")]);

    let result = probe(&catalog, "3")?;
    let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Show (S01E01): Pilot", "Omega"]);
    assert_eq!(result.records[2].quality, "SD");

    Ok(())
}

#[test]
fn test_multi_part_and_multi_variant_items() -> Result<()> {
    let catalog = MockCatalog::with_library(
        "1",
        "Movies",
        vec![movie(
            "100",
            "Long Film",
            1999,
            8.0,
            vec![
                variant("1080", 8000, vec![part(1000, 100), part(2000, 200)]),
                variant("4k", 20000, vec![part(3000, 300)]),
            ],
        )],
    );

    let result = probe(&catalog, "1")?;
    assert_eq!(result.len(), 3);
    assert!(result.records.iter().all(|r| r.title == "Long Film"));
    assert_eq!(result.records[2].quality, "4K");
    assert_eq!(result.records[2].bitrate, 20_000_000);

    Ok(())
}

#[test]
fn test_empty_library_and_empty_containers() -> Result<()> {
    let mut catalog = MockCatalog::with_library("1", "Empty", vec![show("10", "Nothing Yet")]);
    catalog.add_children("10", vec![]);

    let result = probe(&catalog, "1")?;
    assert!(result.is_empty());
    assert_eq!(result.library, "Empty");

    Ok(())
}

#[test]
fn test_unsupported_kind_aborts() {
    let catalog = MockCatalog::with_library(
        "1",
        "Movies",
        vec![
            movie("1", "Before", 2000, 5.0, vec![variant("720", 1000, vec![part(1, 1)])]),
            unsupported("trailer", "99"),
            movie("2", "After", 2000, 5.0, vec![variant("720", 1000, vec![part(1, 1)])]),
        ],
    );

    match probe(&catalog, "1") {
        Err(ProbeError::UnsupportedKind { kind, key }) => {
            assert_eq!(kind, "trailer");
            assert_eq!(key, "99");
        }
        other => panic!("expected UnsupportedKind, got {:?}", other),
    }
}

#[test]
fn test_unsupported_kind_inside_season_aborts() {
    let mut catalog = MockCatalog::with_library("2", "TV", vec![show("10", "Show")]);
    catalog
        .add_children("10", vec![season("11", "Season 1"), season("12", "Season 2")])
        .add_children(
            "11",
            vec![
                episode("111", "Show", 1, 1, "Pilot"),
                unsupported("trailer", "99"),
                episode("113", "Show", 1, 3, "Never Reached"),
            ],
        );

    match probe(&catalog, "2") {
        Err(ProbeError::UnsupportedKind { kind, key }) => {
            assert_eq!(kind, "trailer");
            assert_eq!(key, "99");
        }
        other => panic!("expected UnsupportedKind, got {:?}", other),
    }

    let partial = walk(&catalog, &[show("10", "Show")]).unwrap_err();
    let titles: Vec<&str> = partial.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Show (S01E01): Pilot"]);
    assert!(matches!(
        partial.error,
        ProbeError::UnsupportedKind { ref kind, .. } if kind == "trailer"
    ));

    // the second season is never listed
    assert!(!catalog.calls.borrow().iter().any(|c| c == "children:12"));
}

#[test]
fn test_fetch_error_propagates_unchanged() {
    let mut catalog = MockCatalog::with_library("1", "TV", vec![show("10", "Show")]);
    catalog.add_children("10", vec![season("11", "Season 1")]).fail_on("11");

    match probe(&catalog, "1") {
        Err(ProbeError::Fetch(PlexError::Status { endpoint, status })) => {
            assert_eq!(endpoint, "mock://11");
            assert_eq!(status, 500);
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
}

#[test]
fn test_library_listing_failure() {
    let catalog = MockCatalog::default();
    assert!(matches!(
        probe(&catalog, "404"),
        Err(ProbeError::Fetch(PlexError::Status { status: 404, .. }))
    ));
}

#[test]
fn test_walk_returns_partial_records_on_failure() {
    let mut catalog = MockCatalog::default();
    catalog
        .add_children("10", vec![season("11", "Season 1"), season("12", "Season 2")])
        .add_children("11", vec![episode("111", "Show", 1, 1, "Pilot")])
        .fail_on("12");

    let nodes = vec![
        movie("1", "First", 2000, 5.0, vec![variant("720", 1000, vec![part(1, 1)])]),
        show("10", "Show"),
        movie("2", "Never Reached", 2000, 5.0, vec![variant("720", 1000, vec![part(1, 1)])]),
    ];

    let partial = walk(&catalog, &nodes).unwrap_err();
    let titles: Vec<&str> = partial.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Show (S01E01): Pilot"]);
    assert!(matches!(
        partial.error,
        ProbeError::Fetch(PlexError::Status { status: 500, .. })
    ));

    // traversal stopped at the failing season
    assert_eq!(
        *catalog.calls.borrow(),
        vec!["children:10", "children:11", "children:12"]
    );
}
