use quotes_scraper::writer::{read_records, write_records};
use quotes_scraper::{Field, Record, ScrapError};
use tempfile::TempDir;

fn record(text: &str, author: &str, tags: &[&str], page: u32) -> Record {
    Record::new(text, author, tags, page).unwrap()
}

fn records() -> Vec<Record> {
    vec![
        record(
            "“There are only two ways to live your life.”",
            "Albert Einstein",
            &["inspirational", "life", "live", "miracle", "miracles"],
            1,
        ),
        record(
            "“Comma, \"quote\" and\nnewline”",
            "André Gide",
            &[],
            1,
        ),
        record("“…”", "Marilyn Monroe", &["be-yourself"], 10),
    ]
}

#[test]
fn round_trip_keeps_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.csv");

    write_records(&records(), &path).unwrap();
    let read = read_records(&path).unwrap();

    assert_eq!(read, records());
}

#[test]
fn tag_containing_separator_is_split() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.csv");
    let original = vec![record("t", "a", &["love, life", "truth"], 2)];

    write_records(&original, &path).unwrap();
    let read = read_records(&path).unwrap();

    assert_eq!(read[0].author(), "a");
    assert_eq!(read[0].page(), 2);
    assert_eq!(read[0].tags(), vec!["love", "life", "truth"]);
}

#[test]
fn rewriting_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.csv");

    write_records(&records(), &path).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_records(&records(), &path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn overwrites_longer_previous_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.csv");

    write_records(&records(), &path).unwrap();
    write_records(&records()[..1], &path).unwrap();

    assert_eq!(read_records(&path).unwrap(), records()[..1].to_vec());
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("quotes.csv");

    assert!(write_records(&records(), &path).is_err());
    assert!(!path.exists());
}

#[test]
fn blank_author_row_is_rejected_on_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.csv");
    std::fs::write(
        &path,
        "text,author,tags,page\r\n“Kept.”,Someone,,1\r\n“Orphan.”,  ,life,3\r\n",
    )
    .unwrap();

    assert!(matches!(
        read_records(&path),
        Err(ScrapError::MissingField {
            page: 3,
            index: 1,
            field: Field::Author
        })
    ));
}

#[test]
fn rows_end_with_crlf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quotes.csv");

    write_records(&records()[2..], &path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "text,author,tags,page\r\n“…”,Marilyn Monroe,be-yourself,10\r\n"
    );
}
