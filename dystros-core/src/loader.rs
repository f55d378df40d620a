//! Scanning collection directories for .ics files.

use std::fs::ReadDir;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::CalendarDocument;
use crate::error::{DystrosError, DystrosResult};

pub const ICS_EXTENSION: &str = ".ics";

/// Lazily load every .ics file found directly inside each of `dirs`.
///
/// Directories are visited in the given order; files within a directory in
/// whatever order the filesystem lists them. Nothing is read until the
/// iterator is advanced.
pub fn gather_calendars<I, P>(dirs: I) -> CalendarFiles
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    CalendarFiles {
        dirs: dirs.into_iter().map(Into::into).collect::<Vec<_>>().into_iter(),
        current: None,
        failed: false,
    }
}

/// Iterator returned by [`gather_calendars`].
///
/// The first error ends the sequence.
pub struct CalendarFiles {
    dirs: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, ReadDir)>,
    failed: bool,
}

impl CalendarFiles {
    fn fail(&mut self, err: DystrosError) -> Option<DystrosResult<CalendarDocument>> {
        self.failed = true;
        self.current = None;
        Some(Err(err))
    }
}

impl Iterator for CalendarFiles {
    type Item = DystrosResult<CalendarDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if self.current.is_none() {
                let dir = self.dirs.next()?;
                debug!("Scanning {}", dir.display());
                match std::fs::read_dir(&dir) {
                    Ok(entries) => self.current = Some((dir, entries)),
                    Err(e) => return self.fail(DystrosError::io(dir, e)),
                }
            }

            let (dir, entries) = self.current.as_mut()?;

            let entry = match entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    let err = DystrosError::io(dir.clone(), e);
                    return self.fail(err);
                }
                None => {
                    self.current = None;
                    continue;
                }
            };

            if !is_calendar_file(&entry.path()) {
                continue;
            }

            match load_calendar(&entry.path()) {
                Ok(doc) => return Some(Ok(doc)),
                Err(e) => return self.fail(e),
            }
        }
    }
}

fn is_calendar_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(ICS_EXTENSION))
}

/// Read and parse a single .ics file.
pub fn load_calendar(path: &Path) -> DystrosResult<CalendarDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| DystrosError::io(path, e))?;
    debug!("Loaded {} ({} bytes)", path.display(), content.len());

    CalendarDocument::parse(&content).map_err(|e| e.in_file(path))
}
