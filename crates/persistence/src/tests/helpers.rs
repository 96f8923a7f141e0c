// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kino_domain::{Cinema, CustomerAccount, Movie, MovieHandle, StaffHandle, StaffMember};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use crate::{JsonStore, JsonStoreConfig};

/// Installs a test-writer subscriber once per test binary.
///
/// Set `RUST_LOG=debug` to see store events in test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn create_test_store() -> (JsonStore, TempDir) {
    init_tracing();
    let dir: TempDir = tempfile::tempdir().expect("Failed to create temp dir");
    (JsonStore::new(JsonStoreConfig::default()), dir)
}

pub fn create_test_movie() -> Movie {
    Movie::new(
        "Inception",
        "Sci-Fi",
        148,
        13,
        "Christopher Nolan",
        "English",
        2010,
        8.8,
        "Dreams within dreams",
    )
    .unwrap()
}

pub fn create_movie(title: &str, genre: &str) -> MovieHandle {
    MovieHandle::new(
        Movie::new(title, genre, 100, 0, "Director", "EN", 2021, 7.0, "Desc").unwrap(),
    )
}

pub fn create_manager() -> StaffMember {
    StaffMember::new("Anna", "Nowak", "manager").unwrap()
}

/// A cinema with two scheduled movies and one assigned staff member.
pub fn create_test_cinema() -> Cinema {
    let mut cinema: Cinema = Cinema::new("KinoTest", "Testowa 123").unwrap();
    let manager: StaffMember = create_manager();
    cinema
        .add_movie(&manager, MovieHandle::new(create_test_movie()))
        .unwrap();
    cinema
        .add_movie(&manager, create_movie("Airplane!", "Comedy"))
        .unwrap();
    cinema.assign_staff(StaffHandle::new(manager));
    cinema
}

pub fn create_test_customer() -> CustomerAccount {
    CustomerAccount::new("John", "Doe", 25, "john.doe@example.com", "password123").unwrap()
}
