use csv::QuoteStyle;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

pub fn is_gzip(filepath: &Path) -> bool {
    filepath
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or_default()
}

/// opens a CSV file with headers, decompressing it if it ends with ".gz".
pub fn create_reader(filepath: &Path) -> Result<csv::Reader<Box<dyn Read>>, std::io::Error> {
    let f = File::open(filepath)?;
    let r: Box<dyn Read> = if is_gzip(filepath) {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(csv::ReaderBuilder::new().has_headers(true).from_reader(r))
}

/// creates a CSV writer with headers, compressing the output if the file ends with ".gz".
/// fails if the file exists and overwrite is false.
pub fn create_writer(
    filepath: &Path,
    overwrite: bool,
) -> Result<csv::Writer<Box<dyn Write>>, std::io::Error> {
    if filepath.exists() && !overwrite {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", filepath.to_string_lossy()),
        ));
    }
    let file = File::create(filepath)?;
    let buffer: Box<dyn Write> = if is_gzip(filepath) {
        Box::new(GzEncoder::new(file, Compression::default()))
    } else {
        Box::new(BufWriter::new(file))
    };
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(writer)
}

/// serializes rows into a new CSV file.
///
/// # Returns
///
/// the number of rows written
pub fn write_csv<T, I>(filepath: &Path, overwrite: bool, rows: I) -> Result<usize, csv::Error>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = create_writer(filepath, overwrite)?;
    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        value: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: String::from("a"),
                value: 1.5,
            },
            Row {
                id: String::from("b"),
                value: 2.0,
            },
        ]
    }

    fn read_rows(filepath: &Path) -> Vec<Row> {
        create_reader(filepath)
            .expect("test invariant failed: cannot open file")
            .into_deserialize::<Row>()
            .collect::<Result<Vec<_>, _>>()
            .expect("test invariant failed: cannot read rows")
    }

    #[test]
    fn test_gzip_detection() {
        assert!(is_gzip(Path::new("vehicles.csv.gz")));
        assert!(is_gzip(Path::new("vehicles.csv.GZ")));
        assert!(!is_gzip(Path::new("vehicles.csv")));
        assert!(!is_gzip(Path::new("gz")));
    }

    #[test]
    fn test_write_then_read_plain_and_gzip() {
        let dir = tempfile::tempdir().expect("test invariant failed: cannot create directory");
        for name in ["rows.csv", "rows.csv.gz"] {
            let filepath = dir.path().join(name);
            let n = write_csv(&filepath, true, rows()).expect("write failed");
            assert_eq!(n, 2);
            assert_eq!(read_rows(&filepath), rows());
            let again = write_csv(&filepath, false, rows());
            assert!(again.is_err(), "existing file should not be overwritten");
        }
    }
}
