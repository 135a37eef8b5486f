//! Integration tests for the ticket purchase flow
//!
//! These tests run the scripted scenario end to end, plus the binary itself.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use cinema_core::describable::Describable;
use cinema_testing::helpers::init_test_tracing;
use cinema_testing::{RecordingListener, test_clock};
use std::process::Command;
use std::sync::Arc;
use ticket_purchase::config::HallConfig;
use ticket_purchase::types::{CatalogAction, Movie, SeatAssignment};
use ticket_purchase::{CinemaError, Config, MovieCatalog, scenario};

#[test]
fn test_default_scenario_summary() {
    init_test_tracing();
    let catalog = MovieCatalog::new();

    let purchase = scenario::run(&Config::default(), &catalog, &test_clock()).unwrap();
    let summary = purchase.render_summary();

    assert_eq!(purchase.seat(), &SeatAssignment::Assigned("C2".into()));
    assert_eq!(purchase.movie().title(), "John Wick");
    assert!(summary.contains("Cliente: Juan"));
    assert!(summary.contains("Asiento: C2"));
    assert!(summary.contains("Canguil, Hot-dog, Bebidas"));
    assert!(summary.contains("Canguil con: Bebida con: Postre"));
    assert_eq!(summary.lines().count(), 6);
}

#[test]
fn test_scenario_broadcasts_each_movie_in_order() {
    let catalog = MovieCatalog::new();
    let recorder = RecordingListener::<CatalogAction, Movie>::new();
    catalog.subscribe(Arc::new(recorder.clone()));

    scenario::run(&Config::default(), &catalog, &test_clock()).unwrap();

    let titles: Vec<String> = recorder
        .events()
        .into_iter()
        .map(|(action, movie)| {
            assert_eq!(action, CatalogAction::Added);
            movie.title().to_string()
        })
        .collect();
    assert_eq!(titles, ["John Wick", "Aladdin", "Avengers"]);
    assert_eq!(catalog.listener_count(), 2);
}

#[test]
fn test_catalog_handle_sees_scenario_mutations() {
    let catalog = MovieCatalog::new();
    let observer = catalog.clone();

    scenario::run(&Config::default(), &catalog, &test_clock()).unwrap();

    assert!(observer.same_catalog(&catalog));
    assert_eq!(observer.len(), 3);
    assert_eq!(observer.find_by_title("Avengers"), Some(Movie::new("Avengers")));
}

#[test]
fn test_invalid_hall_aborts_scenario() {
    let config = Config {
        hall: HallConfig {
            number: 0,
            snacks: vec!["Canguil".into()],
        },
        ..Config::default()
    };
    let catalog = MovieCatalog::new();

    let error = scenario::run(&config, &catalog, &test_clock()).unwrap_err();

    assert_eq!(error, CinemaError::InvalidHallNumber(0));
    // Movies were added before the hall was built.
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_custom_customer_and_snacks() {
    let config = Config {
        customer: "Ana".into(),
        hall: HallConfig {
            number: 4,
            snacks: vec!["Nachos".into()],
        },
    };

    let purchase = scenario::run(&config, &MovieCatalog::new(), &test_clock()).unwrap();
    let summary = purchase.render_summary();

    assert!(summary.contains("Cliente: Ana"));
    assert!(summary.contains("Sala de Cine: 4"));
    assert!(summary.contains("Aperitivos Gratis: Nachos"));
    assert_eq!(purchase.items().len(), 1);
    assert_eq!(
        purchase.items()[0].description(),
        "Canguil con: Bebida con: Postre"
    );
}

#[test]
fn test_binary_prints_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_ticket-purchase"))
        .env_remove("CINEMA_CUSTOMER")
        .env_remove("CINEMA_HALL_NUMBER")
        .env_remove("CINEMA_HALL_SNACKS")
        .output()
        .expect("binary should start");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Película John Wick ha sido agregar"));
    assert!(stdout.contains("Listado de Películas:"));
    assert!(stdout.contains("Asiento: C2"));
    assert!(stdout.contains("Productos Comestibles: Canguil con: Bebida con: Postre"));
}

#[test]
fn test_binary_fails_on_invalid_hall() {
    let output = Command::new(env!("CARGO_BIN_EXE_ticket-purchase"))
        .env("CINEMA_HALL_NUMBER", "0")
        .output()
        .expect("binary should start");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mayor que cero"));
}
