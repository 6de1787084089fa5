use std::io::{self, Write};

/// Anything that can receive whole lines of text.
pub trait LineWriter {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory.
impl LineWriter for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// Adapts a byte sink such as stdout, terminating every line with `\n`.
#[derive(Debug)]
pub struct IoLineWriter<W> {
    inner: W,
}

impl<W> IoLineWriter<W>
where
    W: Write,
{
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> LineWriter for IoLineWriter<W>
where
    W: Write,
{
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }
}
