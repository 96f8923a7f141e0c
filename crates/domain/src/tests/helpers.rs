// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Cinema, CustomerAccount, Movie, MovieHandle, StaffHandle, StaffMember};

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

pub fn create_movie(title: &str, genre: &str, age_restriction: u32) -> MovieHandle {
    MovieHandle::new(
        Movie::new(title, genre, 100, age_restriction, "Director", "EN", 2021, 7.0, "Desc")
            .unwrap(),
    )
}

pub fn create_test_cinema() -> Cinema {
    Cinema::new("KinoTest", "Testowa 123").unwrap()
}

pub fn create_manager() -> StaffMember {
    StaffMember::new("Anna", "Nowak", "manager").unwrap()
}

pub fn create_worker() -> StaffMember {
    StaffMember::new("Jan", "Kowalski", "worker").unwrap()
}

pub fn create_staff_handle(first_name: &str, last_name: &str, position: &str) -> StaffHandle {
    StaffHandle::new(StaffMember::new(first_name, last_name, position).unwrap())
}

pub fn create_test_customer() -> CustomerAccount {
    CustomerAccount::new("John", "Doe", 25, "john.doe@example.com", "password123").unwrap()
}
