use roster_core::{
    error_report, extract_file, read_records, write_records, CollisionPolicy, ExtractOptions,
    RosterError,
};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const HEADERS: [&str; 5] = ["Admin No", "Names", "Surname", "Grade", "Class"];

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string(0, u16::try_from(col).unwrap(), *header)
            .unwrap();
    }
}

/// Cover sheet with a single column, then the learner list.
fn write_school(path: &Path, headers: &[&str], rows: &[[&str; 5]]) {
    let mut workbook = Workbook::new();

    let cover = workbook.add_worksheet();
    cover.set_name("Sheet1").unwrap();
    cover.write_string(0, 0, "Learner export").unwrap();
    cover.write_string(1, 0, "Term 1").unwrap();

    let learners = workbook.add_worksheet();
    learners.set_name("Sheet2").unwrap();
    write_headers(learners, headers);
    for (idx, row) in rows.iter().enumerate() {
        let r = u32::try_from(idx + 1).unwrap();
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                learners
                    .write_string(r, u16::try_from(col).unwrap(), *value)
                    .unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

#[test]
fn test_jane_doe_record() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("school.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_headers(sheet, &HEADERS);
    sheet.write_string(1, 0, "007").unwrap();
    sheet.write_string(1, 1, " Jane ").unwrap();
    sheet.write_string(1, 2, "Doe").unwrap();
    sheet.write_number(1, 3, 5).unwrap();
    sheet.write_string(1, 4, "B").unwrap();
    workbook.save(&input).unwrap();

    let extraction = extract_file(&input, &ExtractOptions::default()).unwrap();
    let output = dir.path().join("students.json");
    write_records(&output, &extraction.records).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "adminNo": "007",
            "firstName": "Jane",
            "lastName": "Doe",
            "registrationClass": "GRADE 5 B",
            "photo": "007.jpg"
        }])
    );
}

#[test]
fn test_twelve_rows_with_two_blank_admin_numbers() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("school.xlsx");

    let admins = [
        "1001", "1002", "1003", "", "1005", "1006", "1007", "", "1009", "1010", "1011", "1012",
    ];
    let rows: Vec<[&str; 5]> = admins
        .iter()
        .map(|admin| [*admin, "First", "Last", "7", "A"])
        .collect();
    write_school(&input, &HEADERS, &rows);

    let extraction = extract_file(&input, &ExtractOptions::default()).unwrap();

    assert_eq!(extraction.sheet_name, "Sheet2");
    assert_eq!(extraction.sheets_inspected, 2);
    assert_eq!(extraction.written(), 10);
    assert_eq!(extraction.skipped(), 2);
    assert_eq!(
        error_report(&extraction.errors, 10),
        vec!["Row 5: Empty admin number", "Row 9: Empty admin number"]
    );

    let output = dir.path().join("students.json");
    write_records(&output, &extraction.records).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.len(), 10);

    // Key order survives in the file text
    let first = text.find("\"adminNo\"").unwrap();
    let second = text.find("\"firstName\"").unwrap();
    let third = text.find("\"lastName\"").unwrap();
    let fourth = text.find("\"registrationClass\"").unwrap();
    let fifth = text.find("\"photo\"").unwrap();
    assert!(first < second && second < third && third < fourth && fourth < fifth);

    assert_eq!(read_records(&output).unwrap(), extraction.records);
}

#[test]
fn test_missing_class_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("school.xlsx");
    let output = dir.path().join("students.json");

    let headers = ["Admin No", "Names", "Surname", "Grade", "Teacher"];
    write_school(&input, &headers, &[["1", "Ann", "Botha", "8", "Ms Nel"]]);

    let result = extract_file(&input, &ExtractOptions::default())
        .and_then(|extraction| write_records(&output, &extraction.records));

    match result {
        Err(RosterError::MissingColumns { missing, sheet, .. }) => {
            assert_eq!(missing, vec!["class"]);
            assert_eq!(sheet, "Sheet2");
        }
        other => panic!("expected missing columns, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_admin_header_variants() {
    for admin_header in ["Admin No", "ADMINNO", "admin_no"] {
        let dir = tempdir().unwrap();
        let input = dir.path().join("school.xlsx");
        let headers = [admin_header, "First Name", "Last Name", "Grade", "Class"];
        write_school(&input, &headers, &[["42", "Lindiwe", "Zulu", "9", "C"]]);

        let extraction = extract_file(&input, &ExtractOptions::default()).unwrap();
        assert_eq!(extraction.records[0].admin_no, "42", "{admin_header}");
    }
}

#[test]
fn test_no_usable_sheet() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("school.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Admin No").unwrap();
    sheet.write_string(1, 0, "1").unwrap();
    workbook.save(&input).unwrap();

    let err = extract_file(&input, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, RosterError::NoUsableSheet { ref sheets } if sheets == &["Sheet1"]));
}

#[test]
fn test_rejected_collision_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("school.xlsx");
    let headers = ["Admin No", "Names", "Surname", "Grade", "Reg Class"];
    write_school(&input, &headers, &[["1", "Ann", "Botha", "8", "C"]]);

    // No collision, so even Reject succeeds
    let options = ExtractOptions::default().with_collision_policy(CollisionPolicy::Reject);
    assert_eq!(extract_file(&input, &options).unwrap().written(), 1);
}

#[test]
fn test_csv_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("school.csv");
    fs::write(
        &input,
        "Admin No,Names,Surname,Grade,Class\n007,Zoë,Müller,10,A\n,Sam,Lee,10,A\n",
    )
    .unwrap();

    let extraction = extract_file(&input, &ExtractOptions::default()).unwrap();

    assert_eq!(extraction.sheet_name, "school");
    assert_eq!(extraction.written(), 1);
    assert_eq!(extraction.records[0].admin_no, "007");
    assert_eq!(extraction.records[0].first_name, "Zoë");
    assert_eq!(extraction.errors[0].row, 3);
}

#[test]
fn test_unreadable_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.xlsx");
    let err = extract_file(&path, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, RosterError::Sheet(_)));
}
