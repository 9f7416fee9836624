use crate::core::error::Error;
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Plain,
    Gzip,
}

#[derive(Debug)]
pub enum TableBytes {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl TableBytes {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            TableBytes::Mmap(mmap) => mmap,
            TableBytes::Owned(buf) => buf,
        }
    }
}

pub fn read(path: &Path) -> Result<TableBytes, Error> {
    let kind = detect_input_kind(path)?;
    let file = File::open(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    match kind {
        InputKind::Plain => {
            let len = file
                .metadata()
                .map_err(|e| Error::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?
                .len();
            // mmap rejects zero-length files.
            if len == 0 {
                return Ok(TableBytes::Owned(Vec::new()));
            }
            // SAFETY: read-only file mapping.
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(TableBytes::Mmap(mmap))
        }
        InputKind::Gzip => {
            let mut buf = Vec::new();
            MultiGzDecoder::new(file)
                .read_to_end(&mut buf)
                .map_err(|e| Error::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            Ok(TableBytes::Owned(buf))
        }
    }
}

pub fn detect_input_kind(path: &Path) -> Result<InputKind, Error> {
    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        if ext.eq_ignore_ascii_case("gz") {
            return Ok(InputKind::Gzip);
        }
    }
    let mut file = File::open(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut magic = [0u8; 2];
    let n = file.read(&mut magic).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if n == 2 && magic == [0x1f, 0x8b] {
        Ok(InputKind::Gzip)
    } else {
        Ok(InputKind::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn plain_file_is_mapped_as_is() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"1 2\n3 4\n").unwrap();
        let bytes = read(f.path()).unwrap();
        assert_eq!(bytes.as_bytes(), b"1 2\n3 4\n");
    }

    #[test]
    fn gzip_file_is_decompressed() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"1 2\n3 4\n").unwrap();
        f.write_all(&enc.finish().unwrap()).unwrap();
        assert_eq!(detect_input_kind(f.path()).unwrap(), InputKind::Gzip);
        let bytes = read(f.path()).unwrap();
        assert_eq!(bytes.as_bytes(), b"1 2\n3 4\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read(Path::new("/nonexistent/timings.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
