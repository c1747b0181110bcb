use carddex_engine::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn ensure_output_dir_creates_missing_directories() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("output").join("cards");
    ensure_output_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn ensure_output_dir_rejects_a_file_path() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("occupied");
    std::fs::write(&file, b"x").unwrap();
    assert!(ensure_output_dir(&file).is_err());
}

#[test]
fn writes_land_under_the_requested_name() {
    let tmp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(tmp.path().to_path_buf());
    let written = writer.write("card.ts", "export default {};\n").unwrap();
    assert_eq!(written, tmp.path().join("card.ts"));
    assert_eq!(
        std::fs::read_to_string(written).unwrap(),
        "export default {};\n"
    );
}

#[test]
fn rewriting_replaces_instead_of_duplicating() {
    let tmp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(tmp.path().to_path_buf());
    writer.write("card.ts", "first\n").unwrap();
    writer.write("card.ts", "second\n").unwrap();

    assert_eq!(
        std::fs::read_to_string(tmp.path().join("card.ts")).unwrap(),
        "second\n"
    );
    // No temp files or duplicates left behind.
    let entries: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn binary_content_round_trips() {
    let tmp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(tmp.path().to_path_buf());
    let payload = [0u8, 159, 146, 150, 255];
    writer.write_bytes("card.jpg", &payload).unwrap();
    assert_eq!(
        std::fs::read(tmp.path().join("card.jpg")).unwrap(),
        payload
    );
}
