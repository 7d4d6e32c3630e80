//! Tests for the `fd!` and `fds!` macros

use fd_cover::{fd, fds, DependencySet, FunctionalDependency};

#[test]
fn test_fd_identifiers() {
    assert_eq!(fd!(A, B -> C), FunctionalDependency::new(["A", "B"], ["C"]));
    assert_eq!(fd!(A B -> C D), FunctionalDependency::new(["A", "B"], ["C", "D"]));
}

#[test]
fn test_fd_string_literals() {
    let dep = fd!("first name", last_name -> "id");
    assert_eq!(
        dep,
        FunctionalDependency::new(["first name", "last_name"], ["id"])
    );
    assert_eq!(dep.to_string(), "\"first name\",last_name->id");
}

#[test]
fn test_fd_raw_identifier() {
    assert_eq!(fd!(r#type -> name), FunctionalDependency::new(["type"], ["name"]));
}

#[test]
fn test_fd_empty_side() {
    let dep = fd!(-> A);
    assert!(dep.lhs().is_empty());
    assert!(dep.is_vacuous());
}

#[test]
fn test_fds_matches_parser() {
    let deps = fds![A, B -> C; C -> D, E; E -> A];
    assert_eq!(deps, DependencySet::parse("A,B->C; C->D,E; E->A").unwrap());
}

#[test]
fn test_fds_trailing_semicolon_and_empty() {
    let deps = fds![A -> B;];
    assert_eq!(deps.len(), 1);
    assert!(fds![].is_empty());
}
