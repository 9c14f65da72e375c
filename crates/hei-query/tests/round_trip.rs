use std::fs;
use tempfile::TempDir;

use hei_builder::{read_rows, DatasetBuilder};
use hei_query::InstitutionStore;

const SOURCE: &str = "\
Name of Institution,Type,Acronym,Ownership,Url,Year,City,State
University of Lagos,University,UNILAG,Federal,https://unilag.edu.ng,1962,Akoka,Lagos
\"Federal Polytechnic, Nekede\",Polytechnic,FPNO,Federal,https://fpno.edu.ng,1978,Owerri,Imo
Adeniran Ogunsanya College of Education,College,AOCOED,State,https://aocoed.edu.ng,1958,Otto/Ijanikin,Lagos
";

#[test]
fn built_records_round_trip_through_the_store() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("source.csv");
    fs::write(&src, SOURCE).unwrap();
    let out = tmp.path().join("dataset.json");

    let written = DatasetBuilder::new().build_and_write(&src, &[out.clone()]).expect("build");
    let store = InstitutionStore::load(&out).expect("load");
    assert_eq!(store.len(), written);

    for row in read_rows(&src).unwrap() {
        let acronym = row.get("Acronym").unwrap();
        let rec = store.find_by_acronym(acronym, true).expect("record by acronym");
        assert_eq!(Some(rec.name.as_str()), row.get("Name of Institution"));
        assert_eq!(Some(rec.category.as_str()), row.get("Type"));
        assert_eq!(Some(rec.ownership.as_str()), row.get("Ownership"));
        assert_eq!(Some(rec.url.as_str()), row.get("Url"));
        assert_eq!(Some(rec.year.as_str()), row.get("Year"));
        assert!(rec.image.is_none());
    }
}

#[test]
fn embedded_images_survive_and_can_be_stripped() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("source.csv");
    fs::write(&src, SOURCE).unwrap();
    let asset = tmp.path().join("NARR/Polytechnics/Federal_Polytechnics/FPNO.jpg");
    fs::create_dir_all(asset.parent().unwrap()).unwrap();
    fs::write(&asset, b"jpg").unwrap();

    let out = tmp.path().join("dataset.json");
    DatasetBuilder::new()
        .with_images(&tmp.path().join("NARR"))
        .build_and_write(&src, &[out.clone()])
        .expect("build");
    let store = InstitutionStore::load(&out).expect("load");

    assert!(store.find_by_acronym("FPNO", false).unwrap().image.is_none());
    assert_eq!(store.find_by_acronym("FPNO", true).unwrap().image.as_deref(), Some("anBn"));
    assert!(store.find_by_acronym("UNILAG", true).unwrap().image.is_none());
}

#[test]
fn bundled_dataset_matches_the_bundled_source() {
    // crates/hei-query -> crates -> repo root
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    let source = root.join("resources/NARR/NARR institution.csv");
    let rebuilt = DatasetBuilder::new().build(&source).expect("build bundled source");
    let bundled = InstitutionStore::from_embedded(hei_query::BUNDLED_DATASET).expect("bundled dataset");
    assert_eq!(bundled.records(), rebuilt.as_slice());
}
