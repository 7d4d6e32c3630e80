//! Tests for the dependency data model

use super::*;

fn set(attrs: &[&str]) -> AttributeSet {
    attrs.iter().collect()
}

#[test]
fn test_attribute_set_is_canonical() {
    let a = set(&["C", "A", "B", "A"]);
    let b = set(&["B", "C", "A"]);
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
    let order: Vec<&str> = a.iter().map(|s| s.as_ref()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn test_attribute_set_operations() {
    let ab = set(&["A", "B"]);
    let bc = set(&["B", "C"]);
    assert!(set(&["A"]).is_subset(&ab));
    assert!(!ab.is_subset(&bc));
    assert!(AttributeSet::new().is_subset(&ab));
    assert_eq!(ab.union(&bc), set(&["A", "B", "C"]));
    let diff: Vec<&str> = ab.difference(&bc).map(|s| s.as_ref()).collect();
    assert_eq!(diff, vec!["A"]);
    assert!(ab.contains("B"));
    assert!(!ab.contains("C"));
}

#[test]
fn test_attribute_set_insert() {
    let mut attrs = AttributeSet::new();
    assert!(attrs.is_empty());
    assert!(attrs.insert(Arc::from("A")));
    assert!(!attrs.insert(Arc::from("A")));
    assert_eq!(attrs, AttributeSet::singleton(Arc::from("A")));
}

#[test]
fn test_dependency_predicates() {
    let fd = FunctionalDependency::new(["A", "B"], ["C"]);
    assert!(fd.is_singleton());
    assert!(!fd.is_trivial());
    assert!(!fd.is_vacuous());
    assert_eq!(fd.rhs_attribute().map(|a| a.as_ref()), Some("C"));

    let trivial = FunctionalDependency::new(["A", "B"], ["A"]);
    assert!(trivial.is_trivial());

    let wide = FunctionalDependency::new(["A"], ["B", "C"]);
    assert!(!wide.is_singleton());
    assert_eq!(wide.rhs_attribute(), None);

    let no_lhs = FunctionalDependency::new(Vec::<&str>::new(), ["A"]);
    let no_rhs = FunctionalDependency::new(["A"], Vec::<&str>::new());
    assert!(no_lhs.is_vacuous());
    assert!(no_rhs.is_vacuous());
}

#[test]
fn test_split_in_canonical_order() {
    let fd = FunctionalDependency::new(["A"], ["D", "B", "C"]);
    let parts: Vec<String> = fd.split().map(|d| d.to_string()).collect();
    assert_eq!(parts, vec!["A->B", "A->C", "A->D"]);
}

#[test]
fn test_dependency_ordering() {
    let mut deps = vec![
        FunctionalDependency::new(["B"], ["A"]),
        FunctionalDependency::new(["A", "B"], ["C"]),
        FunctionalDependency::new(["A"], ["C"]),
        FunctionalDependency::new(["A"], ["B"]),
    ];
    deps.sort();
    let rendered: Vec<String> = deps.iter().map(|d| d.to_string()).collect();
    assert_eq!(rendered, vec!["A->B", "A->C", "A,B->C", "B->A"]);
}

#[test]
fn test_canonical_and_deduplicated() {
    let deps = DependencySet::parse("B->C; A->B; B->C; A->B").unwrap();
    assert_eq!(deps.canonical().to_string(), "A->B; B->C");
    assert_eq!(deps.deduplicated().to_string(), "B->C; A->B");
}

#[test]
fn test_implies_and_equivalence() {
    let deps = DependencySet::parse("A->B; B->C").unwrap();
    assert!(deps.implies(&FunctionalDependency::new(["A"], ["C"])));
    assert!(deps.implies(&FunctionalDependency::new(["A", "D"], ["D"])));
    assert!(!deps.implies(&FunctionalDependency::new(["C"], ["A"])));

    let other = DependencySet::parse("A->B,C; B->C").unwrap();
    assert!(deps.is_equivalent(&other));
    let weaker = DependencySet::parse("A->B").unwrap();
    assert!(!deps.is_equivalent(&weaker));
}

#[test]
fn test_stats() {
    let deps = DependencySet::parse("A->B,C; A,B->A; ->D; E->F").unwrap();
    let stats = deps.stats();
    assert_eq!(
        stats,
        DependencyStats {
            dependencies: 4,
            attributes: 6,
            singleton: 3,
            trivial: 1,
            vacuous: 1,
        }
    );
}

#[test]
fn test_attributes_universe() {
    let deps = DependencySet::parse("A->B; C,D->E").unwrap();
    assert_eq!(deps.attributes(), set(&["A", "B", "C", "D", "E"]));
}

#[test]
fn test_collect_and_iterate() {
    let deps: DependencySet = vec![
        FunctionalDependency::new(["A"], ["B"]),
        FunctionalDependency::new(["B"], ["C"]),
    ]
    .into_iter()
    .collect();
    assert_eq!(deps.len(), 2);
    let lhs: Vec<String> = (&deps).into_iter().map(|d| d.lhs().to_string()).collect();
    assert_eq!(lhs, vec!["A", "B"]);
    assert_eq!(deps.clone().into_vec().len(), 2);
}
