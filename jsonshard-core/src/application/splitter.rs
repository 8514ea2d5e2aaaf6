// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # JSON Splitter
//!
//! The recognizer. Makes a single forward pass over a [`BufferedByteIterator`],
//! identifies every root-level key, and for each one either streams the
//! associated array straight into a [`SplittingJsonlSink`] or captures the
//! associated non-array value for the `root.json` summary.
//!
//! `read_balanced_object` tracks nesting with an explicit [`ByteStack`]
//! rather than recursion, so documents nest arbitrarily deep without
//! growing the call stack. Its scratch buffer has instance scope: a given
//! `JsonSplitter` is not reentrant, but independent splitters (one per
//! concurrently-processed source) never interfere with each other.

use jsonshard_domain::{ByteStack, JsonShardError, SinkFactoryProvider, SplitSize};

use super::iterator::BufferedByteIterator;
use super::sink::SplittingJsonlSink;

/// Whether the value currently being read sits directly under the root
/// object, or inside an array (root-level arrays stream to a sink; arrays
/// nested inside anything else are captured opaquely).
#[derive(Clone, Copy, PartialEq, Eq)]
enum Parent {
    Root,
    List,
}

/// What [`JsonSplitter::read_value`] found.
enum ValueOutcome {
    /// A non-array value (or a nested array), captured as a
    /// whitespace-normalized, compact byte string.
    Captured(Vec<u8>),
    /// A root-level array: its elements have already been written to the
    /// sink passed to `read_value`.
    Streamed,
    /// Parent was [`Parent::List`] and the next token is the list's closing
    /// `]`; it has been rewound, not consumed.
    EndOfList,
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_opener(b: u8) -> bool {
    matches!(b, b'{' | b'[' | b'"')
}

fn describe(b: u8) -> String {
    if b == 0 {
        "<eof>".to_string()
    } else {
        (b as char).to_string()
    }
}

pub struct JsonSplitter {
    iter: BufferedByteIterator,
    split_size: SplitSize,
    scratch: Vec<u8>,
}

impl JsonSplitter {
    pub fn new(iter: BufferedByteIterator, split_size: SplitSize) -> Self {
        Self { iter, split_size, scratch: Vec::new() }
    }

    /// Drives the whole document: requires the root value to be an object,
    /// rejects anything else with a [`JsonShardError::Parse`] (unlike the
    /// implementation this was adapted from, which built that error and
    /// then discarded it). Returns the fully-assembled `root.json` bytes;
    /// writing them to disk is the caller's responsibility.
    pub async fn split_stream(
        &mut self,
        sinks: &mut dyn SinkFactoryProvider,
    ) -> Result<Vec<u8>, JsonShardError> {
        self.skip_whitespace().await?;
        let first = self.iter.next().await?;
        if first != b'{' {
            return Err(JsonShardError::parse(format!(
                "only json objects are supported at the root, found '{}'",
                describe(first)
            )));
        }
        self.iter.skip();

        let mut root_summary = Vec::new();
        root_summary.extend_from_slice(b"{\n");
        let mut first_key = true;

        loop {
            let key = self.read_key().await?;
            let key_str = String::from_utf8_lossy(&key[1..key.len() - 1]).into_owned();
            let mut sink = SplittingJsonlSink::new(sinks.factory_for(&key_str)?, self.split_size);

            match self.read_value(Parent::Root, Some(&mut sink)).await? {
                ValueOutcome::Streamed => {
                    sink.close()?;
                }
                ValueOutcome::Captured(value) => {
                    if !first_key {
                        root_summary.extend_from_slice(b",\n");
                    }
                    root_summary.push(b'\t');
                    root_summary.extend_from_slice(&key);
                    root_summary.push(b':');
                    root_summary.extend_from_slice(&value);
                    first_key = false;
                    sink.close()?;
                }
                ValueOutcome::EndOfList => {
                    unreachable!("root-level values are never parsed with parent=List")
                }
            }

            self.skip_whitespace().await?;
            let b = self.iter.next().await?;
            if b == b'}' {
                self.iter.skip();
                break;
            } else if b == b',' {
                self.iter.skip();
                continue;
            } else {
                return Err(JsonShardError::parse(format!(
                    "unexpected token after key/value pair, expecting ',' or '}}', found '{}'",
                    describe(b)
                )));
            }
        }

        root_summary.extend_from_slice(b"\n}");
        Ok(root_summary)
    }

    async fn skip_whitespace(&mut self) -> Result<(), JsonShardError> {
        loop {
            let b = self.iter.next().await?;
            if !is_whitespace(b) {
                self.iter.advance(-1);
                self.iter.skip();
                return Ok(());
            }
        }
    }

    /// Skips whitespace, matches and discards a single expected byte.
    async fn expect(&mut self, ch: u8) -> Result<(), JsonShardError> {
        self.skip_whitespace().await?;
        let b = self.iter.next().await?;
        if b != ch {
            return Err(JsonShardError::parse(format!(
                "expected '{}' found '{}'",
                ch as char,
                describe(b)
            )));
        }
        self.iter.skip();
        Ok(())
    }

    /// Reads the remainder of a string (the opening quote must already be
    /// the last byte consumed, and still part of the iterator's currently
    /// captured range) up to and including the next unescaped `"`.
    async fn read_string_tail(&mut self) -> Result<Vec<u8>, JsonShardError> {
        let mut prev = b'"';
        loop {
            let b = self.iter.next().await?;
            if b == 0 {
                return Err(JsonShardError::parse("unexpected eof while parsing string"));
            }
            if b == b'"' && prev != b'\\' {
                return Ok(self.iter.take_value());
            }
            prev = b;
        }
    }

    /// `"key":` — returns the key including its surrounding quotes, having
    /// consumed the trailing colon.
    async fn read_key(&mut self) -> Result<Vec<u8>, JsonShardError> {
        self.skip_whitespace().await?;
        let open = self.iter.next().await?;
        if open != b'"' {
            return Err(JsonShardError::parse(format!(
                "expected '\"' found '{}'",
                describe(open)
            )));
        }
        let key = self.read_string_tail().await?;
        self.expect(b':').await?;
        Ok(key)
    }

    async fn read_value(
        &mut self,
        parent: Parent,
        sink: Option<&mut SplittingJsonlSink>,
    ) -> Result<ValueOutcome, JsonShardError> {
        self.skip_whitespace().await?;
        let b = self.iter.next().await?;
        match b {
            0 => Err(JsonShardError::parse("unexpected eof while parsing value")),
            b'"' => Ok(ValueOutcome::Captured(self.read_string_tail().await?)),
            b'[' if parent == Parent::Root => {
                self.iter.advance(-1);
                self.iter.skip();
                let sink = sink.expect("a root-level array requires a sink");
                self.read_list_into_sink(sink).await?;
                Ok(ValueOutcome::Streamed)
            }
            b'[' => {
                self.iter.advance(-1);
                self.iter.skip();
                Ok(ValueOutcome::Captured(self.read_balanced_object().await?))
            }
            b'{' => {
                self.iter.advance(-1);
                self.iter.skip();
                Ok(ValueOutcome::Captured(self.read_balanced_object().await?))
            }
            b']' if parent == Parent::List => {
                self.iter.advance(-1);
                Ok(ValueOutcome::EndOfList)
            }
            _ => loop {
                let c = self.iter.next().await?;
                if c == 0 {
                    return Err(JsonShardError::parse("unexpected eof while parsing scalar"));
                }
                if c == b',' || c == b']' || c == b'}' {
                    self.iter.advance(-1);
                    return Ok(ValueOutcome::Captured(self.iter.take_value()));
                }
            },
        }
    }

    /// A root-level array: its elements are appended to `sink` one at a
    /// time as they're recognized, never buffered whole in memory. `touch`
    /// forces the first file into existence immediately, so an array with
    /// zero elements still yields an empty `<key>_00.jsonl` rather than no
    /// file at all.
    async fn read_list_into_sink(&mut self, sink: &mut SplittingJsonlSink) -> Result<(), JsonShardError> {
        self.expect(b'[').await?;
        sink.touch()?;
        loop {
            match self.read_value(Parent::List, None).await? {
                ValueOutcome::Captured(item) => sink.add(&item)?,
                ValueOutcome::EndOfList => {}
                ValueOutcome::Streamed => unreachable!("nested root arrays do not occur"),
            }

            self.skip_whitespace().await?;
            let b = self.iter.next().await?;
            if b == b']' {
                self.iter.skip();
                return Ok(());
            } else if b == b',' {
                self.iter.skip();
                continue;
            } else {
                return Err(JsonShardError::parse(format!(
                    "unexpected token '{}' expecting ',' or ']'",
                    describe(b)
                )));
            }
        }
    }

    /// Parses a `{...}` or `[...]` span and returns a whitespace-normalized,
    /// compact serialization of it, using the instance's scratch buffer.
    /// Not reentrant: do not call this recursively on the same splitter.
    async fn read_balanced_object(&mut self) -> Result<Vec<u8>, JsonShardError> {
        self.skip_whitespace().await?;
        let opener = self.iter.next().await?;
        let closer = match opener {
            b'{' => b'}',
            b'[' => b']',
            _ => {
                return Err(JsonShardError::parse(format!(
                    "expected object or array opener, found '{}'",
                    describe(opener)
                )))
            }
        };
        self.iter.skip();

        self.scratch.clear();
        self.scratch.push(opener);

        let mut stack = ByteStack::new();
        let mut last_open: u8 = 0;
        let mut prev: u8 = 0;

        loop {
            let ch = self.iter.next().await?;
            if ch == 0 {
                return Err(JsonShardError::parse("unexpected eof while parsing object"));
            }
            self.iter.skip();

            if is_whitespace(ch) {
                if last_open == b'"' {
                    match ch {
                        b'\r' => self.scratch.extend_from_slice(b"\\r"),
                        b'\n' => self.scratch.extend_from_slice(b"\\n"),
                        other => self.scratch.push(other),
                    }
                }
                continue;
            }

            self.scratch.push(ch);

            match last_open {
                0 => {
                    if ch == closer {
                        return Ok(std::mem::take(&mut self.scratch));
                    }
                    if is_opener(ch) {
                        stack.push(ch);
                        last_open = ch;
                    }
                }
                b'"' => {
                    if ch == b'"' && prev != b'\\' {
                        stack.pop();
                        last_open = stack.peek();
                    }
                }
                b'{' => {
                    if ch == b'}' {
                        stack.pop();
                        last_open = stack.peek();
                    } else if is_opener(ch) {
                        stack.push(ch);
                        last_open = ch;
                    }
                }
                b'[' => {
                    if ch == b']' {
                        stack.pop();
                        last_open = stack.peek();
                    } else if is_opener(ch) {
                        stack.push(ch);
                        last_open = ch;
                    }
                }
                _ => unreachable!("last_open is always 0, '\"', '{{', or '['"),
            }

            prev = ch;
        }
    }
}
