use crate::error::FakeGtError;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

pub const STANDARD_STREAM: &str = "-";

/// Where rows are read from or written to.
///
/// Resolved once from a command line argument: `-` selects the process's
/// standard stream and a `.gz` suffix selects gzip. Content is never sniffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Standard,
    Plain(PathBuf),
    Gzip(PathBuf),
}

impl Endpoint {
    pub fn from_arg(arg: &str) -> Self {
        if arg == STANDARD_STREAM {
            Endpoint::Standard
        } else if arg.ends_with(".gz") {
            Endpoint::Gzip(PathBuf::from(arg))
        } else {
            Endpoint::Plain(PathBuf::from(arg))
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Endpoint::Standard => None,
            Endpoint::Plain(path) | Endpoint::Gzip(path) => Some(path),
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Endpoint::Standard)
    }
}

pub fn open_input(endpoint: &Endpoint) -> Result<Box<dyn BufRead>, FakeGtError> {
    Ok(match endpoint {
        Endpoint::Standard => Box::new(io::stdin().lock()),
        Endpoint::Plain(path) => Box::new(BufReader::new(open_existing(path)?)),
        Endpoint::Gzip(path) => Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(
            open_existing(path)?,
        )))),
    })
}

fn open_existing(path: &Path) -> Result<File, FakeGtError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FakeGtError::InputNotFound(path.to_path_buf()),
        _ => e.into(),
    })
}

/// Output stream owned by a single invocation.
///
/// Files are created with `create_new`, so an existing path is never
/// truncated. Standard output is flushed but left open.
pub enum OutputWriter {
    Standard(BufWriter<Stdout>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputWriter {
    /// Flush buffered rows and write the gzip trailer if any.
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputWriter::Standard(mut w) => w.flush(),
            OutputWriter::Plain(mut w) => w.flush(),
            OutputWriter::Gzip(w) => w.finish()?.flush(),
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Standard(w) => w.write(buf),
            OutputWriter::Plain(w) => w.write(buf),
            OutputWriter::Gzip(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            OutputWriter::Standard(w) => w.write_all(buf),
            OutputWriter::Plain(w) => w.write_all(buf),
            OutputWriter::Gzip(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Standard(w) => w.flush(),
            OutputWriter::Plain(w) => w.flush(),
            OutputWriter::Gzip(w) => w.flush(),
        }
    }
}

pub fn create_output(endpoint: &Endpoint) -> Result<OutputWriter, FakeGtError> {
    Ok(match endpoint {
        Endpoint::Standard => OutputWriter::Standard(BufWriter::new(io::stdout())),
        Endpoint::Plain(path) => OutputWriter::Plain(BufWriter::new(create_new(path)?)),
        Endpoint::Gzip(path) => OutputWriter::Gzip(GzEncoder::new(
            BufWriter::new(create_new(path)?),
            flate2::Compression::default(),
        )),
    })
}

fn create_new(path: &Path) -> Result<File, FakeGtError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => FakeGtError::OutputExists(path.to_path_buf()),
            _ => e.into(),
        })
}
