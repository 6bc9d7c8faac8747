// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Opens the appender behind [`crate::WriterConfig::File`]. The file never rotates, and
/// it (along with missing folders) is created on first use.
///
/// # Errors
///
/// Returns an error if the path has no file name, or the file can't be opened.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(|| miette::miette!("Log file path {path_str:?} has no file name"))?;
    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(folder)
        .map_err(|err| miette::miette!("Can't open log file {path_str:?}: {err}"))
}
