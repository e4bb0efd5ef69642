use avlindex::{DirectoryConfig, IndexError, PersonDirectory};
use chrono::NaiveDate;
use std::io::Write;

const RECORDS: &str = "\
529.982.247-25;12.345.678-9;MARIA SILVA;12/03/1985;RECIFE
111.444.777-35;98.765.432-1;MARCOS LIMA;01/01/2000;NATAL
390.533.447-05;11.222.333-4;JOANA SOUZA;15/06/2005;SALVADOR
123.456.789-09;55.666.777-8;MARIANA COSTA; 31 / 12 / 2010 ;FORTALEZA
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_load_from_path_builds_all_three_indexes() {
    let path = std::env::temp_dir().join(format!("avlindex_people_{}.csv", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(RECORDS.as_bytes()).unwrap();
    }

    let directory = PersonDirectory::load_from_path(&path, DirectoryConfig::default()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(directory.len(), 4);
    assert_eq!(directory.cpf_index().len(), 4);
    assert_eq!(directory.name_index().len(), 4);
    assert_eq!(directory.birth_date_index().len(), 4);
    assert!(directory.cpf_index().check_invariants());
    assert!(directory.name_index().check_invariants());
    assert!(directory.birth_date_index().check_invariants());

    let maria = directory.find_by_cpf("529.982.247-25").unwrap();
    assert_eq!(maria.city, "RECIFE");
    assert_eq!(maria.birth_date, date(1985, 3, 12));
}

#[test]
fn test_queries_over_loaded_records() {
    let directory =
        PersonDirectory::load_from_reader(RECORDS.as_bytes(), DirectoryConfig::default()).unwrap();

    let mut mar: Vec<&str> = directory
        .find_by_name_prefix("mar")
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    mar.sort();
    assert_eq!(mar, vec!["MARCOS LIMA", "MARIA SILVA", "MARIANA COSTA"]);

    let born: Vec<&str> = directory
        .find_by_birth_range(date(2000, 1, 1), date(2005, 6, 15))
        .into_iter()
        .map(|p| p.cpf.as_str())
        .collect();
    assert_eq!(born.len(), 2);
    assert!(born.contains(&"111.444.777-35"));
    assert!(born.contains(&"390.533.447-05"));

    assert!(directory.find_by_cpf("000.000.000-00").is_none());
}

#[test]
fn test_strict_mode_reports_line_number() {
    let data = format!("{}bad;line\n", RECORDS);
    let err = PersonDirectory::load_from_reader(
        data.as_bytes(),
        DirectoryConfig::default().with_strict(true),
    )
    .unwrap_err();
    match err {
        IndexError::InvalidRecord { line, .. } => assert_eq!(line, 5),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_quoted_names_are_searchable() {
    let data = "1;2;\"ANA\";01/01/2000;NATAL\n3;4;\"SILVA; BRUNO\";02/02/2002;RECIFE\n";
    let directory = PersonDirectory::load_from_reader(
        data.as_bytes(),
        DirectoryConfig::default().with_strict(true),
    )
    .unwrap();

    assert_eq!(directory.len(), 2);
    let ana: Vec<&str> = directory
        .find_by_name_prefix("ANA")
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(ana, vec!["ANA"]);
    assert_eq!(
        directory.find_by_cpf("3").map(|p| p.name.as_str()),
        Some("SILVA; BRUNO")
    );
    assert_eq!(directory.find_by_name_prefix("SILVA;").len(), 1);
}
