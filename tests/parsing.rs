mod common;

use sitegraph::{
    parse_line, parse_lines, parse_lines_par, parse_reader, NeighborKind, ParseError, RecordError, Site,
};
use std::io::{BufReader, Cursor, Read};

#[test]
fn test_example_record() {
    let site = parse_line("1 0.0 0.0 0.0 2 2 3 1 4").unwrap();
    assert_eq!(
        site,
        Site::new("1", [0.0, 0.0, 0.0]).with_neighbors(["2", "3"], ["4"])
    );
}

#[test]
fn test_lattice_records_parse_back() {
    let lattice = common::cubic_lattice(4);
    let records = common::cubic_lattice_records(4);
    let sites = parse_lines(&records).unwrap();

    assert_eq!(sites.len(), 64);
    for expected in &lattice {
        let site = sites.get(&expected.id).expect("Should have every lattice site");
        assert_eq!(site, expected);
    }

    // Corner, edge and bulk sites have different neighbor counts
    let corner = sites.get("0_0_0").unwrap();
    assert_eq!(corner.first_neighbors.len(), 3);
    assert_eq!(corner.second_neighbors.len(), 3);
    let bulk = sites.get("1_1_1").unwrap();
    assert_eq!(bulk.first_neighbors.len(), 6);
    assert_eq!(bulk.second_neighbors.len(), 12);
}

#[test]
fn test_declared_counts_match_lists() {
    for record in common::cubic_lattice_records(3) {
        let tokens: Vec<&str> = record.split_whitespace().collect();
        let fn_count: usize = tokens[4].parse().unwrap();
        let sn_count: usize = tokens[5 + fn_count].parse().unwrap();

        let site = parse_line(&record).unwrap();
        assert_eq!(site.first_neighbors.len(), fn_count, "record {:?}", record);
        assert_eq!(site.second_neighbors.len(), sn_count, "record {:?}", record);
    }
}

#[test]
fn test_short_first_list_never_truncates() {
    // Declares two first neighbors, supplies one before the second count
    let err = parse_line("1 0.0 0.0 0.0 2 2 1 4").unwrap_err();
    assert!(matches!(err, RecordError::NeighborCountMismatch { .. }), "got {:?}", err);

    // The line ends inside the first list
    let err = parse_line("1 0.0 0.0 0.0 2 2").unwrap_err();
    assert_eq!(
        err,
        RecordError::NeighborCountMismatch {
            kind: NeighborKind::First,
            expected: 2,
            actual: 1,
        }
    );

    // The line ends right after the first list
    let err = parse_line("1 0.0 0.0 0.0 2 2 3").unwrap_err();
    assert!(matches!(err, RecordError::InsufficientTokens { .. }), "got {:?}", err);
}

#[test]
fn test_duplicate_id_keeps_later_record() {
    let sites = parse_lines([
        "1 0.0 0.0 0.0 1 2 0",
        "2 1.0 0.0 0.0 0 0",
        "1 9.0 8.0 7.0 0 1 2",
    ])
    .unwrap();

    assert_eq!(sites.len(), 2);
    let site = sites.get("1").unwrap();
    assert_eq!(site.position, [9.0, 8.0, 7.0]);
    assert!(site.first_neighbors.is_empty());
    assert_eq!(site.second_neighbors, vec!["2"]);
}

#[test]
fn test_neighbors_may_precede_their_sites() {
    let sites = parse_lines(["1 0 0 0 1 2 0", "2 1 0 0 1 1 0"]).unwrap();
    assert!(sites.contains("1"));
    assert!(sites.contains("2"));

    // Unknown neighbor ids are accepted at parse time
    let sites = parse_lines(["1 0 0 0 1 99 0"]).unwrap();
    assert!(!sites.contains("99"));
}

#[test]
fn test_reader_input() {
    let input = "1 0.0 0.0 0.0 1 2 0\n2 1.0 0.0 0.0 1 1 0\n";
    let sites = parse_reader(Cursor::new(input)).unwrap();
    assert_eq!(sites.len(), 2);

    let sites = parse_reader(Cursor::new("")).unwrap();
    assert!(sites.is_empty());
}

#[test]
fn test_reader_rejects_blank_line() {
    let input = "1 0.0 0.0 0.0 0 0\n\n2 1.0 0.0 0.0 0 0\n";
    match parse_reader(Cursor::new(input)).unwrap_err() {
        ParseError::Record { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source, RecordError::InsufficientTokens { required: 5, found: 0 });
        }
        other => panic!("unexpected error {:?}", other),
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_reader_io_error() {
    let err = parse_reader(BufReader::new(FailingReader)).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
    assert!(err.record().is_none());
}

#[test]
fn test_parallel_parse_of_lattice() {
    let records = common::cubic_lattice_records(5);
    let seq = parse_lines(&records).unwrap();
    let par = parse_lines_par(&records).unwrap();

    assert_eq!(par.len(), 125);
    for id in seq.sorted_ids() {
        assert_eq!(seq.get(id), par.get(id));
    }
}

#[test]
fn test_error_message() {
    let err = parse_lines(["1 0 0 0 0 0", "2 0 0 0 3 1 2"]).unwrap_err();
    assert_eq!(err.to_string(), "line 2: expected 3 first neighbors, found 2");
}

#[test]
fn test_non_finite_coordinates_stop_the_stream() {
    for (line, token) in [("1 nan 0 0 0 0", "nan"), ("1 inf 0 0 1 2 0", "inf"), ("1 1e999 0 0 0 0", "1e999")] {
        match parse_lines(["2 0 0 0 0 0", line]).unwrap_err() {
            ParseError::Record { line: 2, source: RecordError::MalformedNumber { token: t, .. } } => {
                assert_eq!(t, token);
            }
            other => panic!("unexpected error for {:?}: {:?}", line, other),
        }
    }
}
