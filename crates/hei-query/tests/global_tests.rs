use std::thread;

use hei_query::{find_all, find_by_acronym, find_by_category, find_by_name_substring, find_by_state, store};
use hei_query::{Category, Error, InstitutionStore, State};

#[test]
fn shipped_dataset_loads_once() {
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(|| store().map(|s| s as *const InstitutionStore as usize))).collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap().expect("dataset loads")).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]), "every caller sees the same store");
    assert!(!store().unwrap().is_empty());
}

#[test]
fn shipped_dataset_lookups() {
    let unilag = find_by_acronym("UNILAG", true).unwrap().expect("UNILAG present");
    assert_eq!(unilag.name, "University of Lagos");
    assert_eq!(unilag.category, Category::University);
    assert!(find_by_acronym("NOPE", true).unwrap().is_none());

    let lagos = find_by_name_substring("lagos", false).unwrap();
    assert!(lagos.iter().any(|r| r.acronym == "UNILAG"));
    assert_eq!(lagos, find_by_state(State::Lagos, false).unwrap());

    let all = find_all(false).unwrap();
    let polys = find_by_category("Polytechnic", false).unwrap();
    assert!(!polys.is_empty());
    assert!(polys.iter().all(|r| r.category == Category::Polytechnic));
    let expected: Vec<_> = all.iter().filter(|r| r.category == Category::Polytechnic).cloned().collect();
    assert_eq!(polys, expected);
}

#[test]
fn invalid_category_fails_before_scan() {
    assert!(matches!(find_by_category("Seminary", true), Err(Error::InvalidArgument(_))));
}
