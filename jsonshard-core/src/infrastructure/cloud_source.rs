// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! A [`ByteSource`] backed by a cloud object store (`gs://` or `s3://`).
//!
//! [`ByteSource`] is a blocking trait — it is called from inside the
//! producer's `spawn_blocking` task — but `object_store` is an async
//! client. This adapter bridges the two with a captured [`Handle`], calling
//! `block_on` from the blocking thread rather than running its own runtime.

use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use jsonshard_domain::{ByteSource, JsonShardError, ReadOutcome};
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use tokio::runtime::Handle;
use url::Url;

pub struct CloudObjectSource {
    runtime: Handle,
    stream: BoxStream<'static, object_store::Result<Bytes>>,
    pending: Bytes,
}

impl CloudObjectSource {
    /// Opens `url` (scheme `gs` or `s3`) for reading. `runtime` must be a
    /// handle to the same runtime the caller's blocking task runs under.
    pub fn open(runtime: Handle, url: &Url) -> Result<Self, JsonShardError> {
        let (store, path) = build_store(url)?;
        let get = runtime
            .block_on(store.get(&path))
            .map_err(|e| JsonShardError::source_io(format!("opening '{url}': {e}")))?;
        let stream = get.into_stream();
        Ok(Self { runtime, stream, pending: Bytes::new() })
    }
}

impl ByteSource for CloudObjectSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, JsonShardError> {
        if self.pending.is_empty() {
            match self.runtime.block_on(self.stream.next()) {
                Some(Ok(bytes)) => self.pending = bytes,
                Some(Err(e)) => return Err(JsonShardError::source_io(format!("cloud read: {e}"))),
                None => return Ok(ReadOutcome::Eof),
            }
        }

        let n = std::cmp::min(buf.len(), self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending = self.pending.slice(n..);
        Ok(ReadOutcome::Read(n))
    }
}

fn build_store(url: &Url) -> Result<(Arc<dyn ObjectStore>, ObjectPath), JsonShardError> {
    let bucket = url
        .host_str()
        .ok_or_else(|| JsonShardError::config(format!("missing bucket in '{url}'")))?;
    let key = url.path().trim_start_matches('/');
    let path = ObjectPath::from(key);

    let store: Arc<dyn ObjectStore> = match url.scheme() {
        "gs" => Arc::new(
            object_store::gcp::GoogleCloudStorageBuilder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| JsonShardError::config(format!("building gcs client: {e}")))?,
        ),
        "s3" => Arc::new(
            object_store::aws::AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| JsonShardError::config(format!("building s3 client: {e}")))?,
        ),
        other => return Err(JsonShardError::config(format!("unsupported source scheme '{other}'"))),
    };

    Ok((store, path))
}
