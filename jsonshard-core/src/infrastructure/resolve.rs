// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Source Resolution
//!
//! Turns the CLI's `--file` argument into a [`ByteSource`]: a local path, a
//! `gs://`/`s3://` object URI, or either of those with a `.gz` suffix
//! (checked on the path component, independent of scheme) transparently
//! unwrapped.

use std::path::Path;

use jsonshard_domain::{ByteSource, JsonShardError};
use tokio::runtime::Handle;
use url::Url;

use super::cloud_source::CloudObjectSource;
use super::gzip_source::GzipSource;
use super::local_source::LocalFileSource;

pub fn resolve_source(location: &str, runtime: Handle) -> Result<Box<dyn ByteSource>, JsonShardError> {
    let gzip = location.ends_with(".gz");

    let inner: Box<dyn ByteSource> = match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "gs" | "s3") => Box::new(CloudObjectSource::open(runtime, &url)?),
        Ok(url) if url.host().is_some() => {
            return Err(JsonShardError::config(format!(
                "unsupported source scheme '{}', expected 'gs' or 's3'",
                url.scheme()
            )))
        }
        _ => Box::new(LocalFileSource::open(Path::new(location))?),
    };

    Ok(if gzip { Box::new(GzipSource::wrap(inner)) } else { inner })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_unsupported_cloud_scheme() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let err = resolve_source("https://example.com/data.json", rt.handle().clone()).unwrap_err();
        assert!(matches!(err, JsonShardError::Config(_)));
    }

    #[test]
    fn plain_relative_path_is_treated_as_local() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let err = resolve_source("definitely-missing.json", rt.handle().clone()).unwrap_err();
        assert!(matches!(err, JsonShardError::SourceIo(_)));
    }
}
