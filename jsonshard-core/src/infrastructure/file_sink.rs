// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Local File Output Sinks
//!
//! Implements the [`WriterFactory`]/[`SinkFactoryProvider`] ports with real
//! files under the output directory, plus the directory-preparation and
//! `root.json` write helpers the bootstrap binary calls directly.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use jsonshard_domain::{JsonShardError, SinkFactoryProvider, WriteCloser, WriterFactory};

/// A single `<key>_NN.jsonl` file, buffered before the raw handle the same
/// way the teacher's chunk writer buffers before its file handle.
struct LocalFileSink {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
    opened_at: Instant,
}

impl WriteCloser for LocalFileSink {
    fn write_all(&mut self, buf: &[u8]) -> Result<(), JsonShardError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| JsonShardError::sink_io(format!("write after close on '{}'", self.path.display())))?;
        writer
            .write_all(buf)
            .map_err(|e| JsonShardError::sink_io(format!("writing '{}': {e}", self.path.display())))
    }

    fn close(&mut self) -> Result<(), JsonShardError> {
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|e| JsonShardError::sink_io(format!("closing '{}': {e}", self.path.display())))?;
            tracing::debug!(
                target: "jsonshard::sink",
                file = %self.path.display(),
                elapsed_ms = self.opened_at.elapsed().as_millis(),
                "closed shard file"
            );
        }
        Ok(())
    }
}

/// Mints `<output_dir>/<key>_NN.jsonl` files, `NN` zero-padded to width two
/// and monotonically increasing for the lifetime of the factory.
pub struct LocalWriterFactory {
    output_dir: PathBuf,
    key: String,
    next_index: u32,
}

impl LocalWriterFactory {
    pub fn new(output_dir: PathBuf, key: impl Into<String>) -> Self {
        Self { output_dir, key: key.into(), next_index: 0 }
    }
}

impl WriterFactory for LocalWriterFactory {
    fn create(&mut self) -> Result<Box<dyn WriteCloser>, JsonShardError> {
        let path = self.output_dir.join(format!("{}_{:02}.jsonl", self.key, self.next_index));
        self.next_index += 1;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| JsonShardError::sink_io(format!("creating '{}': {e}", path.display())))?;
        Ok(Box::new(LocalFileSink { writer: Some(BufWriter::new(file)), path, opened_at: Instant::now() }))
    }
}

/// Roots every root-level key's [`WriterFactory`] at the same output
/// directory. The directory itself is prepared once, up front, by
/// [`prepare_output_dir`] — individual factories never create it.
pub struct LocalSinkFactoryProvider {
    output_dir: PathBuf,
}

impl LocalSinkFactoryProvider {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl SinkFactoryProvider for LocalSinkFactoryProvider {
    fn factory_for(&mut self, key: &str) -> Result<Box<dyn WriterFactory>, JsonShardError> {
        Ok(Box::new(LocalWriterFactory::new(self.output_dir.clone(), key)))
    }
}

/// Creates `output_dir`, replacing it first when `overwrite` is set.
/// Returns a [`JsonShardError::Config`] if the directory exists and
/// `overwrite` is false.
pub fn prepare_output_dir(output_dir: &Path, overwrite: bool) -> Result<(), JsonShardError> {
    if output_dir.exists() {
        if !overwrite {
            return Err(JsonShardError::config(format!(
                "output directory '{}' already exists (pass --overwrite to replace it)",
                output_dir.display()
            )));
        }
        fs::remove_dir_all(output_dir)
            .map_err(|e| JsonShardError::sink_io(format!("removing '{}': {e}", output_dir.display())))?;
    }
    fs::create_dir_all(output_dir)
        .map_err(|e| JsonShardError::sink_io(format!("creating '{}': {e}", output_dir.display())))
}

/// Writes `root.json` via write-to-temp-then-rename so a crash mid-write
/// never leaves a partially-written summary behind.
pub fn write_root_json(output_dir: &Path, bytes: &[u8]) -> Result<(), JsonShardError> {
    let final_path = output_dir.join("root.json");
    let tmp_path = output_dir.join(".root.json.tmp");
    fs::write(&tmp_path, bytes)
        .map_err(|e| JsonShardError::sink_io(format!("writing '{}': {e}", tmp_path.display())))?;
    fs::rename(&tmp_path, &final_path)
        .map_err(|e| JsonShardError::sink_io(format!("finalizing '{}': {e}", final_path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn prepare_output_dir_rejects_existing_dir_without_overwrite() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();
        let err = prepare_output_dir(&out, false).unwrap_err();
        assert!(matches!(err, JsonShardError::Config(_)));
    }

    #[test]
    fn prepare_output_dir_replaces_with_overwrite() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("stale.txt"), b"old").unwrap();
        prepare_output_dir(&out, true).unwrap();
        assert!(!out.join("stale.txt").exists());
    }

    #[test]
    fn write_root_json_leaves_no_temp_file_on_success() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();
        write_root_json(&out, b"{\n\n}").unwrap();
        assert_eq!(fs::read(out.join("root.json")).unwrap(), b"{\n\n}");
        assert!(!out.join(".root.json.tmp").exists());
    }

    #[test]
    fn local_writer_factory_names_files_zero_padded_and_incrementing() {
        let tmp = tempdir().unwrap();
        let mut factory = LocalWriterFactory::new(tmp.path().to_path_buf(), "nums");
        let mut first = factory.create().unwrap();
        first.write_all(b"1").unwrap();
        first.close().unwrap();
        let mut second = factory.create().unwrap();
        second.write_all(b"2").unwrap();
        second.close().unwrap();
        assert!(tmp.path().join("nums_00.jsonl").exists());
        assert!(tmp.path().join("nums_01.jsonl").exists());
    }
}
