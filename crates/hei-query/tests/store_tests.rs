use std::fs;
use tempfile::TempDir;

use hei_query::{Category, Error, Institution, InstitutionStore, State};

fn inst(name: &str, category: Category, acronym: &str, image: Option<&str>) -> Institution {
    Institution {
        name: name.to_string(),
        category,
        acronym: acronym.to_string(),
        ownership: "Federal".to_string(),
        url: format!("https://{}.edu.ng", acronym.to_lowercase()),
        year: "1960".to_string(),
        image: image.map(str::to_string),
    }
}

fn sample_store() -> InstitutionStore {
    InstitutionStore::from_records(vec![
        inst("University of Lagos", Category::University, "UNILAG", Some("aW1n")),
        inst("Kaduna Polytechnic", Category::Polytechnic, "KADPOLY", None),
        inst("Lagos State Polytechnic", Category::Polytechnic, "LASPOTECH", Some("bGFz")),
        inst("Yaba College of Technology", Category::College, "YABATECH", None),
    ])
}

#[test]
fn acronym_lookup_is_exact_and_case_sensitive() {
    let store = sample_store();
    assert_eq!(store.find_by_acronym("UNILAG", true).unwrap().name, "University of Lagos");
    assert!(store.find_by_acronym("unilag", true).is_none());
    assert!(store.find_by_acronym("NOPE", true).is_none());
}

#[test]
fn acronym_lookup_returns_first_duplicate() {
    let mut records = sample_store().records().to_vec();
    records.push(inst("Another UNILAG", Category::College, "UNILAG", None));
    let store = InstitutionStore::from_records(records);
    assert_eq!(store.find_by_acronym("UNILAG", false).unwrap().name, "University of Lagos");
}

#[test]
fn name_search_ignores_case() {
    let store = sample_store();
    for q in ["lagos", "LAGOS", "LaGoS"] {
        let names: Vec<String> = store.find_by_name_substring(q, true).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["University of Lagos", "Lagos State Polytechnic"], "query {q}");
    }
    assert!(store.find_by_name_substring("zzz", true).is_empty());
}

#[test]
fn filters_preserve_load_order() {
    let store = sample_store();
    let acronyms: Vec<String> = store
        .filter_by_category(Category::Polytechnic, true)
        .into_iter()
        .map(|r| r.acronym)
        .collect();
    assert_eq!(acronyms, vec!["KADPOLY", "LASPOTECH"]);

    let all: Vec<String> = store.find_all(true).into_iter().map(|r| r.acronym).collect();
    assert_eq!(all, vec!["UNILAG", "KADPOLY", "LASPOTECH", "YABATECH"]);
}

#[test]
fn state_search_matches_on_name() {
    let store = sample_store();
    let hits = store.find_by_state(State::Lagos, true);
    assert_eq!(hits.len(), 2);
    // Yaba is in Lagos State, but its name does not say so.
    assert!(hits.iter().all(|r| r.acronym != "YABATECH"));
    assert!(store.find_by_state(State::Kaduna, false).iter().any(|r| r.acronym == "KADPOLY"));
}

#[test]
fn category_filter_validates_input() {
    let store = sample_store();
    assert_eq!(store.find_by_category("College", true).unwrap().len(), 1);
    assert!(matches!(store.find_by_category("Seminary", true), Err(Error::InvalidArgument(_))));
    assert!(matches!(store.find_by_category("college", true), Err(Error::InvalidArgument(_))));
}

#[test]
fn excluding_images_does_not_touch_the_store() {
    let store = sample_store();

    let stripped = store.find_by_acronym("UNILAG", false).unwrap();
    assert!(stripped.image.is_none());
    assert!(store.find_all(false).iter().all(|r| r.image.is_none()));
    assert!(store.find_by_name_substring("lagos", false).iter().all(|r| r.image.is_none()));
    assert!(store.find_by_category("Polytechnic", false).unwrap().iter().all(|r| r.image.is_none()));
    assert!(store.find_by_state(State::Lagos, false).iter().all(|r| r.image.is_none()));

    assert_eq!(store.find_by_acronym("UNILAG", true).unwrap().image.as_deref(), Some("aW1n"));
    assert_eq!(store.records()[2].image.as_deref(), Some("bGFz"));
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(InstitutionStore::load(&tmp.path().join("absent.json")), Err(Error::DataUnavailable(_))));

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(InstitutionStore::load(&bad), Err(Error::DataUnavailable(_))));

    let bad_type = tmp.path().join("bad_type.json");
    fs::write(
        &bad_type,
        r#"[{"nameOfInstitution":"X","type":"Seminary","acronym":"X","ownership":"Private","url":"","year":""}]"#,
    )
    .unwrap();
    assert!(matches!(InstitutionStore::load(&bad_type), Err(Error::DataUnavailable(_))));
}

#[test]
fn empty_dataset_yields_empty_results() {
    let store = InstitutionStore::from_json_str("[]").unwrap();
    assert!(store.is_empty());
    assert!(store.find_all(true).is_empty());
    assert!(store.find_by_acronym("UNILAG", true).is_none());
}
