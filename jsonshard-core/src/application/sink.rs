// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Splitting JSONL Sink
//!
//! Wraps a [`WriterFactory`] and writes one root-level array's elements as
//! `\n`-separated JSONL, rotating to a fresh file whenever the current
//! file's byte count reaches the configured [`SplitSize`]. Split boundaries
//! are always item boundaries; a single oversized item is written whole and
//! triggers rotation immediately after.

use jsonshard_domain::{JsonShardError, SplitSize, WriteCloser, WriterFactory};

pub struct SplittingJsonlSink {
    factory: Box<dyn WriterFactory>,
    split_size: u64,
    current: Option<Box<dyn WriteCloser>>,
    written_bytes: u64,
    written_items: u64,
}

impl SplittingJsonlSink {
    pub fn new(factory: Box<dyn WriterFactory>, split_size: SplitSize) -> Self {
        Self {
            factory,
            split_size: split_size.bytes(),
            current: None,
            written_bytes: 0,
            written_items: 0,
        }
    }

    /// Appends one JSONL item, opening the first file lazily and rotating
    /// once the threshold is crossed.
    pub fn add(&mut self, item: &[u8]) -> Result<(), JsonShardError> {
        if self.current.is_none() {
            self.current = Some(self.factory.create()?);
            self.written_bytes = 0;
            self.written_items = 0;
        }

        let sink = self.current.as_mut().expect("just opened above");
        if self.written_items > 0 {
            sink.write_all(b"\n")?;
        }
        sink.write_all(item)?;

        self.written_items += 1;
        self.written_bytes += item.len() as u64;

        if self.written_bytes >= self.split_size {
            self.rotate()?;
        }
        Ok(())
    }

    fn rotate(&mut self) -> Result<(), JsonShardError> {
        if let Some(mut sink) = self.current.take() {
            sink.close()?;
        }
        self.written_bytes = 0;
        self.written_items = 0;
        Ok(())
    }

    /// Opens the first file if one doesn't exist yet, without writing
    /// anything to it. Used for a root-level array with zero elements,
    /// which must still produce an (empty) `<key>_00.jsonl` file.
    pub fn touch(&mut self) -> Result<(), JsonShardError> {
        if self.current.is_none() {
            self.current = Some(self.factory.create()?);
            self.written_bytes = 0;
            self.written_items = 0;
        }
        Ok(())
    }

    /// Closes the current file, if any. Idempotent: closing a sink that
    /// never received an item is a no-op.
    pub fn close(&mut self) -> Result<(), JsonShardError> {
        if let Some(mut sink) = self.current.take() {
            sink.close()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingWriter {
        buf: Vec<u8>,
        closed: bool,
    }

    impl WriteCloser for RecordingWriter {
        fn write_all(&mut self, buf: &[u8]) -> Result<(), JsonShardError> {
            self.buf.extend_from_slice(buf);
            Ok(())
        }
        fn close(&mut self) -> Result<(), JsonShardError> {
            self.closed = true;
            Ok(())
        }
    }

    struct RecordingFactory {
        files: Rc<RefCell<Vec<Rc<RefCell<RecordingWriter>>>>>,
    }

    struct HandleWriter(Rc<RefCell<RecordingWriter>>);
    impl WriteCloser for HandleWriter {
        fn write_all(&mut self, buf: &[u8]) -> Result<(), JsonShardError> {
            self.0.borrow_mut().write_all(buf)
        }
        fn close(&mut self) -> Result<(), JsonShardError> {
            self.0.borrow_mut().close()
        }
    }

    impl WriterFactory for RecordingFactory {
        fn create(&mut self) -> Result<Box<dyn WriteCloser>, JsonShardError> {
            let writer = Rc::new(RefCell::new(RecordingWriter::default()));
            self.files.borrow_mut().push(Rc::clone(&writer));
            Ok(Box::new(HandleWriter(writer)))
        }
    }

    #[test]
    fn single_file_joins_items_with_newline_and_no_trailing_newline() {
        let files = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory { files: Rc::clone(&files) };
        let mut sink = SplittingJsonlSink::new(Box::new(factory), SplitSize::default());

        sink.add(b"1").unwrap();
        sink.add(b"2").unwrap();
        sink.add(b"3").unwrap();
        sink.close().unwrap();

        assert_eq!(files.borrow().len(), 1);
        assert_eq!(files.borrow()[0].borrow().buf, b"1\n2\n3");
        assert!(files.borrow()[0].borrow().closed);
    }

    #[test]
    fn rotates_on_split_size_and_never_splits_an_item() {
        let files = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory { files: Rc::clone(&files) };
        let mut sink = SplittingJsonlSink::new(Box::new(factory), SplitSize::new(3).unwrap());

        for i in 0..1024u32 {
            sink.add(format!("{:046}", i).as_bytes()).unwrap();
        }
        sink.close().unwrap();

        let files = files.borrow();
        assert!(files.len() > 1);
        let total_items: usize = files
            .iter()
            .map(|f| f.borrow().buf.iter().filter(|&&b| b == b'\n').count() + 1)
            .sum();
        assert_eq!(total_items, 1024);
    }

    #[test]
    fn touch_creates_an_empty_file_even_without_items() {
        let files = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory { files: Rc::clone(&files) };
        let mut sink = SplittingJsonlSink::new(Box::new(factory), SplitSize::default());

        sink.touch().unwrap();
        sink.close().unwrap();

        assert_eq!(files.borrow().len(), 1);
        assert_eq!(files.borrow()[0].borrow().buf, Vec::<u8>::new());
        assert!(files.borrow()[0].borrow().closed);
    }

    #[test]
    fn touch_after_an_item_does_not_open_a_second_file() {
        let files = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory { files: Rc::clone(&files) };
        let mut sink = SplittingJsonlSink::new(Box::new(factory), SplitSize::default());

        sink.add(b"1").unwrap();
        sink.touch().unwrap();
        sink.close().unwrap();

        assert_eq!(files.borrow().len(), 1);
        assert_eq!(files.borrow()[0].borrow().buf, b"1");
    }

    #[test]
    fn close_is_idempotent() {
        let files = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory { files: Rc::clone(&files) };
        let mut sink = SplittingJsonlSink::new(Box::new(factory), SplitSize::default());
        sink.close().unwrap();
        sink.close().unwrap();
        assert!(files.borrow().is_empty());
    }
}
