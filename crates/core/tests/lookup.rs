use roster_core::{write_records, SearchField, StudentIndex, StudentRecord};
use tempfile::tempdir;

#[test]
fn test_lookup_over_written_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.json");
    write_records(
        &path,
        &[
            StudentRecord::new("007", "Jane", "Doe", "5", "B"),
            StudentRecord::new("008", "Sipho", "Khumalo", "5", "B"),
            StudentRecord::new("120", "Zoë", "Müller", "10", "A"),
        ],
    )
    .unwrap();

    let index = StudentIndex::load(&path).unwrap();
    assert_eq!(index.len(), 3);

    let hits = index.search("007", SearchField::Auto);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].photo, "007.jpg");

    let class: Vec<&str> = index
        .search("GRADE 5 B", SearchField::Auto)
        .iter()
        .map(|r| r.first_name.as_str())
        .collect();
    assert_eq!(class, ["Jane", "Sipho"]);

    let names: Vec<&str> = index
        .search("zoë", SearchField::Name)
        .iter()
        .map(|r| r.admin_no.as_str())
        .collect();
    assert_eq!(names, ["120"]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    assert!(StudentIndex::load(dir.path().join("students.json")).is_err());
}
