// Terminal consumers for pipeline output
// Author: Gabriel Demetrios Lafis

use std::io::{self, Stdout, Write};

use super::ProcessingError;

/// Receives each fully transformed value, in delivery order
pub trait Consumer {
    /// Consume one value
    fn consume(&mut self, value: String) -> Result<(), ProcessingError>;
}

impl<C: Consumer + ?Sized> Consumer for &mut C {
    fn consume(&mut self, value: String) -> Result<(), ProcessingError> {
        (**self).consume(value)
    }
}

/// Write a value as one line of output
pub fn write_output<W: Write + ?Sized>(out: &mut W, user: &str) -> io::Result<()> {
    writeln!(out, "{}", user)
}

/// Writes one line per value to the wrapped writer
pub struct WriterConsumer<W: Write> {
    writer: W,
}

impl<W: Write> WriterConsumer<W> {
    /// Create a new writer consumer
    pub fn new(writer: W) -> Self {
        WriterConsumer { writer }
    }

    /// Get the wrapped writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterConsumer<Stdout> {
    /// Create a consumer printing to standard output
    pub fn stdout() -> Self {
        WriterConsumer::new(io::stdout())
    }
}

impl<W: Write> Consumer for WriterConsumer<W> {
    fn consume(&mut self, value: String) -> Result<(), ProcessingError> {
        write_output(&mut self.writer, &value)?;
        Ok(())
    }
}

/// Collects values in memory
#[derive(Debug, Default)]
pub struct CollectConsumer {
    values: Vec<String>,
}

impl CollectConsumer {
    /// Create a new empty collector
    pub fn new() -> Self {
        CollectConsumer { values: Vec::new() }
    }

    /// Values received so far
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Take the collected values
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

impl Consumer for CollectConsumer {
    fn consume(&mut self, value: String) -> Result<(), ProcessingError> {
        self.values.push(value);
        Ok(())
    }
}

/// Adapts a closure returning `io::Result` into a consumer
pub struct FnConsumer<F> {
    func: F,
}

impl<F> Consumer for FnConsumer<F>
where
    F: FnMut(String) -> io::Result<()>,
{
    fn consume(&mut self, value: String) -> Result<(), ProcessingError> {
        (self.func)(value)?;
        Ok(())
    }
}

/// Wrap a closure as a consumer
pub fn consumer_fn<F>(func: F) -> FnConsumer<F>
where
    F: FnMut(String) -> io::Result<()>,
{
    FnConsumer { func }
}
