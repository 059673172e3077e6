use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{LmError, Result};

/// Reads a whole UTF-8 corpus file into memory.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	fs::read_to_string(path).map_err(|e| LmError::corpus(path, e))
}

/// Streaming character source over any buffered reader.
///
/// `next()` returning `None` is the end of the stream; it never errors at
/// end of input. Bytes that are not valid UTF-8 yield an
/// `io::ErrorKind::InvalidData` error.
pub struct CorpusChars<R> {
	reader: R,
	line: String,
	position: usize,
}

impl CorpusChars<BufReader<File>> {
	/// Opens a corpus file for streaming.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|e| LmError::corpus(path, e))?;
		Ok(Self::new(BufReader::new(file)))
	}
}

impl<R: BufRead> CorpusChars<R> {
	pub fn new(reader: R) -> Self {
		Self { reader, line: String::new(), position: 0 }
	}
}

impl<R: BufRead> Iterator for CorpusChars<R> {
	type Item = io::Result<char>;

	fn next(&mut self) -> Option<Self::Item> {
		// Line endings stay in `line`, so newlines are corpus characters too
		while self.position >= self.line.len() {
			self.line.clear();
			self.position = 0;
			match self.reader.read_line(&mut self.line) {
				Ok(0) => return None,
				Ok(_) => (),
				Err(e) => return Some(Err(e)),
			}
		}

		let c = self.line[self.position..].chars().next()?;
		self.position += c.len_utf8();
		Some(Ok(c))
	}
}
