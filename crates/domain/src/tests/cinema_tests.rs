// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use super::helpers::{
    create_manager, create_movie, create_staff_handle, create_test_cinema, create_test_movie,
    create_worker,
};
use crate::{Cinema, DomainError, MovieHandle, StaffHandle, StaffMember};

fn assert_permission_denied(result: Result<(), DomainError>) {
    assert!(
        matches!(result, Err(DomainError::PermissionDenied { .. })),
        "expected PermissionDenied, got {result:?}"
    );
}

#[test]
fn test_new_cinema_is_empty() {
    let cinema: Cinema = Cinema::new("Cinema X", "Street 1").unwrap();
    assert!(cinema.schedule().is_empty());
    assert!(cinema.staff().is_empty());
}

#[test]
fn test_constructor_rejects_empty_name_or_address() {
    assert!(matches!(
        Cinema::new("", "Street 1"),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        Cinema::new("Cinema X", ""),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn test_end_to_end_add_and_lookup() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let movie: MovieHandle = MovieHandle::new(create_test_movie());

    cinema.add_movie(&manager, movie.clone()).unwrap();

    let found: MovieHandle = cinema.get_movie_by_title("inception").unwrap();
    assert!(found.ptr_eq(&movie));
    assert!(matches!(
        cinema.get_movies_by_genre(""),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn test_add_then_has_then_remove() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let movie: MovieHandle = MovieHandle::new(create_test_movie());

    cinema.add_movie(&manager, movie.clone()).unwrap();
    assert!(cinema.has_movie("Inception"));

    cinema.remove_movie(&manager, &movie).unwrap();
    assert!(!cinema.has_movie("Inception"));
}

#[test]
fn test_has_movie_is_case_sensitive() {
    let mut cinema: Cinema = create_test_cinema();
    cinema
        .add_movie(&create_manager(), MovieHandle::new(create_test_movie()))
        .unwrap();
    assert!(cinema.has_movie("Inception"));
    assert!(!cinema.has_movie("inception"));
}

#[test]
fn test_add_same_movie_twice_fails() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let movie: MovieHandle = MovieHandle::new(create_test_movie());

    cinema.add_movie(&manager, movie.clone()).unwrap();
    let result = cinema.add_movie(&manager, movie);
    assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    assert_eq!(cinema.schedule().len(), 1);
}

#[test]
fn test_equal_but_distinct_movies_are_not_duplicates() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let first: MovieHandle = MovieHandle::new(create_test_movie());
    let second: MovieHandle = MovieHandle::new(create_test_movie());
    assert_eq!(*first.borrow(), *second.borrow());

    cinema.add_movie(&manager, first).unwrap();
    cinema.add_movie(&manager, second).unwrap();
    assert_eq!(cinema.list_movies(), vec!["Inception", "Inception"]);
}

#[test]
fn test_remove_never_added_movie_fails() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let scheduled: MovieHandle = MovieHandle::new(create_test_movie());
    let lookalike: MovieHandle = MovieHandle::new(create_test_movie());
    cinema.add_movie(&manager, scheduled).unwrap();

    let result = cinema.remove_movie(&manager, &lookalike);
    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(cinema.schedule().len(), 1);
}

#[test]
fn test_non_manager_is_denied_everywhere() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let worker: StaffMember = create_worker();
    let movie: MovieHandle = MovieHandle::new(create_test_movie());
    cinema.add_movie(&manager, movie.clone()).unwrap();

    assert_permission_denied(cinema.add_movie(&worker, create_movie("Matrix", "Sci-Fi", 14)));
    assert_permission_denied(cinema.remove_movie(&worker, &movie));
    assert_permission_denied(cinema.remove_movie(&worker, &create_movie("Ghost", "Drama", 0)));
    assert_permission_denied(cinema.remove_all_movies(&worker));
    let empty: Vec<Option<MovieHandle>> = Vec::new();
    assert_permission_denied(cinema.choose_movies_to_play(&worker, Some(empty.as_slice())));
    assert_permission_denied(
        cinema.add_staff_member(&worker, create_staff_handle("Ewa", "Lis", "cashier")),
    );

    assert_eq!(cinema.schedule().len(), 1);
    assert!(cinema.staff().is_empty());
}

#[test]
fn test_technician_cannot_add_movie() {
    let mut cinema: Cinema = create_test_cinema();
    let technician: StaffMember = StaffMember::new("Ola", "Tester", "technician").unwrap();
    let result = cinema.add_movie(&technician, MovieHandle::new(create_test_movie()));
    assert_eq!(
        result,
        Err(DomainError::PermissionDenied {
            action: String::from("add_movie"),
            required_role: String::from("Manager"),
        })
    );
}

#[test]
fn test_manager_title_is_case_insensitive() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = StaffMember::new("Anna", "Nowak", "MANAGER").unwrap();
    cinema
        .add_movie(&manager, MovieHandle::new(create_test_movie()))
        .unwrap();
    assert_eq!(cinema.schedule().len(), 1);
}

#[test]
fn test_remove_all_movies() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    cinema.add_movie(&manager, create_movie("A", "Drama", 0)).unwrap();
    cinema.add_movie(&manager, create_movie("B", "Drama", 0)).unwrap();

    cinema.remove_all_movies(&manager).unwrap();
    assert!(cinema.schedule().is_empty());
}

#[test]
fn test_clear_schedule_needs_no_role() {
    let mut cinema: Cinema = create_test_cinema();
    cinema
        .add_movie(&create_manager(), MovieHandle::new(create_test_movie()))
        .unwrap();
    cinema.clear_schedule();
    assert!(cinema.schedule().is_empty());
}

#[test]
fn test_choose_movies_to_play_adds_selection() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let inception: MovieHandle = MovieHandle::new(create_test_movie());
    let matrix: MovieHandle = create_movie("Matrix", "Sci-Fi", 14);
    cinema.add_movie(&manager, inception.clone()).unwrap();

    let selection: Vec<Option<MovieHandle>> = vec![Some(inception), Some(matrix)];
    cinema
        .choose_movies_to_play(&manager, Some(selection.as_slice()))
        .unwrap();

    assert_eq!(cinema.list_movies(), vec!["Inception", "Matrix"]);
}

#[test]
fn test_choose_movies_to_play_is_idempotent_on_identity() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let movie: MovieHandle = create_movie("Matrix", "Sci-Fi", 14);
    let selection: Vec<Option<MovieHandle>> = vec![Some(movie.clone()), Some(movie)];

    cinema
        .choose_movies_to_play(&manager, Some(selection.as_slice()))
        .unwrap();
    cinema
        .choose_movies_to_play(&manager, Some(selection.as_slice()))
        .unwrap();

    assert_eq!(cinema.schedule().len(), 1);
}

#[test]
fn test_choose_movies_to_play_empty_selection() {
    let mut cinema: Cinema = create_test_cinema();
    let empty: Vec<Option<MovieHandle>> = Vec::new();
    cinema
        .choose_movies_to_play(&create_manager(), Some(empty.as_slice()))
        .unwrap();
    assert!(cinema.schedule().is_empty());
}

#[test]
fn test_choose_movies_to_play_without_list_fails() {
    let mut cinema: Cinema = create_test_cinema();
    let result = cinema.choose_movies_to_play(&create_manager(), None);
    assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
}

#[test]
fn test_choose_movies_to_play_with_missing_entry_changes_nothing() {
    let mut cinema: Cinema = create_test_cinema();
    let selection: Vec<Option<MovieHandle>> =
        vec![Some(create_movie("Matrix", "Sci-Fi", 14)), None];

    let result = cinema.choose_movies_to_play(&create_manager(), Some(selection.as_slice()));
    assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    assert!(cinema.schedule().is_empty());
}

#[test]
fn test_get_movie_by_title_failures() {
    let cinema: Cinema = create_test_cinema();
    assert!(matches!(
        cinema.get_movie_by_title(""),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        cinema.get_movie_by_title("Nope"),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_get_movies_by_genre() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    assert!(cinema.get_movies_by_genre("Drama").unwrap().is_empty());

    cinema.add_movie(&manager, create_movie("A", "Sci-Fi", 0)).unwrap();
    cinema.add_movie(&manager, create_movie("B", "Drama", 0)).unwrap();
    cinema.add_movie(&manager, create_movie("C", "sci-fi", 0)).unwrap();

    let titles: Vec<String> = cinema
        .get_movies_by_genre("SCI-FI")
        .unwrap()
        .iter()
        .map(|m| m.borrow().title().to_string())
        .collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn test_list_current_movies_and_details() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    assert!(cinema.list_current_movies().is_empty());
    assert_eq!(cinema.get_movie_details(), "");

    let inception: MovieHandle = MovieHandle::new(create_test_movie());
    let other: MovieHandle = create_movie("Matrix", "Sci-Fi", 14);
    cinema.add_movie(&manager, inception.clone()).unwrap();
    cinema.add_movie(&manager, other.clone()).unwrap();

    assert_eq!(
        cinema.list_current_movies(),
        vec!["Inception (Sci-Fi, 2010)", "Matrix (Sci-Fi, 2021)"]
    );
    assert_eq!(
        cinema.get_movie_details(),
        format!("{}\n\n{}", inception.borrow(), other.borrow())
    );
}

#[test]
fn test_count_movies_by_genre() {
    let mut cinema: Cinema = Cinema::new("C", "A").unwrap();
    let manager: StaffMember = create_manager();
    for title in ["T0", "T1"] {
        cinema.add_movie(&manager, create_movie(title, "Sci-Fi", 13)).unwrap();
    }
    cinema.add_movie(&manager, create_movie("T0", "Romance", 13)).unwrap();

    let counts: BTreeMap<String, usize> = cinema.count_movies_by_genre();
    assert_eq!(counts.get("Sci-Fi"), Some(&2));
    assert_eq!(counts.get("Romance"), Some(&1));
    assert_eq!(counts.len(), 2);
}

#[test]
fn test_assign_staff_allows_duplicates() {
    let mut cinema: Cinema = create_test_cinema();
    let worker: StaffHandle = StaffHandle::new(create_worker());
    cinema.assign_staff(worker.clone());
    cinema.assign_staff(worker);
    assert_eq!(cinema.staff().len(), 2);
}

#[test]
fn test_add_staff_member() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffMember = create_manager();
    let worker: StaffHandle = StaffHandle::new(create_worker());

    cinema.add_staff_member(&manager, worker.clone()).unwrap();
    assert!(cinema.staff()[0].ptr_eq(&worker));

    let result = cinema.add_staff_member(&manager, worker);
    assert!(matches!(result, Err(DomainError::AlreadyExists(_))));

    cinema
        .add_staff_member(&manager, StaffHandle::new(create_worker()))
        .unwrap();
    assert_eq!(cinema.staff().len(), 2);
}

#[test]
fn test_add_staff_member_rejects_handle_already_on_roster() {
    let mut cinema: Cinema = create_test_cinema();
    let manager: StaffHandle = StaffHandle::new(create_manager());
    cinema.assign_staff(manager.clone());

    let result = cinema.add_staff_member(&manager.borrow(), manager.clone());
    assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
}

#[test]
fn test_get_staff_by_role() {
    let mut cinema: Cinema = create_test_cinema();
    cinema.assign_staff(create_staff_handle("Anna", "Nowak", "Manager"));
    cinema.assign_staff(create_staff_handle("Jan", "Kowalski", "worker"));
    cinema.assign_staff(create_staff_handle("Ewa", "Lis", "WORKER"));

    assert_eq!(cinema.get_staff_by_role("worker").unwrap().len(), 2);
    assert_eq!(cinema.get_staff_by_role("MANAGER").unwrap().len(), 1);
    assert!(cinema.get_staff_by_role("cleaner").unwrap().is_empty());
    assert!(matches!(
        cinema.get_staff_by_role(""),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn test_remove_staff_member_by_name() {
    let mut cinema: Cinema = create_test_cinema();
    cinema.assign_staff(create_staff_handle("Anna", "Nowak", "manager"));
    cinema.assign_staff(create_staff_handle("Jan", "Kowalski", "worker"));

    cinema.remove_staff_member_by_name("Ghost", "Person");
    assert_eq!(cinema.staff().len(), 2);

    cinema.remove_staff_member_by_name("Anna", "Nowak");
    assert_eq!(cinema.staff().len(), 1);
    assert_eq!(cinema.staff()[0].borrow().first_name(), "Jan");
}

#[test]
fn test_shared_movie_mutation_is_visible_in_schedule() {
    let mut cinema: Cinema = create_test_cinema();
    let movie: MovieHandle = MovieHandle::new(create_test_movie());
    cinema.add_movie(&create_manager(), movie.clone()).unwrap();

    movie.borrow_mut().watch();
    assert_eq!(cinema.schedule()[0].borrow().views(), 1);
}

#[test]
fn test_display() {
    let cinema: Cinema = create_test_cinema();
    assert_eq!(cinema.to_string(), "Cinema: KinoTest, Testowa 123");
}
