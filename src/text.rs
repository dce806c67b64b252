use crate::errors::{PathError, PathResult};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Opens `path` read-only. Other handles may keep reading and writing the
/// file meanwhile (std opens with full sharing on Windows).
pub fn open_read(path: &Path) -> PathResult<File> {
    File::open(path).map_err(|e| PathError::from_io(path, e))
}

/// Guesses the character encoding of a byte buffer.
///
/// `Ok(None)` means the bytes carry no usable signal and the caller's default
/// applies.
pub trait CharsetDetector {
    fn detect(&self, bytes: &[u8]) -> PathResult<Option<&'static Encoding>>;
}

/// Byte-order mark first, then `chardetng` for content with non-ASCII bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChardetDetector;

impl CharsetDetector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> PathResult<Option<&'static Encoding>> {
        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            return Ok(Some(encoding));
        }
        let mut detector = chardetng::EncodingDetector::new();
        if !detector.feed(bytes, true) {
            return Ok(None);
        }
        Ok(Some(detector.guess(None, true)))
    }
}

pub fn read_file_text(path: impl AsRef<Path>, default_encoding: Option<&'static Encoding>) -> PathResult<String> {
    read_file_text_with(path, default_encoding, &ChardetDetector)
}

/// Reads the whole file and decodes it with the detected encoding, falling
/// back to `default_encoding` (UTF-8 when `None`). Detector errors never fail
/// the read. A leading BOM is stripped; malformed sequences become U+FFFD.
pub fn read_file_text_with<D>(
    path: impl AsRef<Path>,
    default_encoding: Option<&'static Encoding>,
    detector: &D,
) -> PathResult<String>
where
    D: CharsetDetector + ?Sized,
{
    let path = path.as_ref();
    let mut file = open_read(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    // the detector only borrows the buffer; decoding starts again at byte 0
    let encoding = resolve_encoding(&bytes, default_encoding, detector);
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        debug!(path = %path.display(), encoding = encoding.name(), "replaced malformed sequences");
    }
    Ok(text.into_owned())
}

fn resolve_encoding<D>(bytes: &[u8], default_encoding: Option<&'static Encoding>, detector: &D) -> &'static Encoding
where
    D: CharsetDetector + ?Sized,
{
    let fallback = default_encoding.unwrap_or(encoding_rs::UTF_8);
    match detector.detect(bytes) {
        Ok(Some(encoding)) => {
            debug!(encoding = encoding.name(), "detected charset");
            encoding
        }
        Ok(None) => {
            debug!(encoding = fallback.name(), "no charset signal, using default");
            fallback
        }
        Err(e) => {
            warn!(code = e.code(), error = %e, encoding = fallback.name(), "charset detection failed, using default");
            fallback
        }
    }
}
