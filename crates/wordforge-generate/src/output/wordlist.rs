use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one candidate per line, returning the number of bytes written.
pub fn write_wordlist(path: &Path, candidates: &[String]) -> std::io::Result<u64> {
    let writer = BufWriter::new(File::create(path)?);
    let mut writer = CountingWriter::new(writer);

    for candidate in candidates {
        writer.write_all(candidate.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(writer.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
