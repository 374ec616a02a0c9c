use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

/// Find files in `root` and its immediate subdirectories whose file name
/// matches `predicate`.
///
/// Returned paths are relative to `root` and use `/` as separator. Entries
/// whose name starts with `.` are ignored. Unreadable directories are skipped;
/// only a failure to read `root` itself is reported.
pub fn find_files_shallow<P, F>(root: P, predicate: &F) -> io::Result<Vec<String>>
where
    P: AsRef<Path>,
    F: Fn(&str) -> bool + ?Sized,
{
    let root = root.as_ref();
    let mut result = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let entry_path = entry.path();

        if entry_path.is_dir() {
            let sub_entries = match fs::read_dir(&entry_path) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("Skipping unreadable directory {}: {}", entry_path.display(), e);
                    continue;
                }
            };
            for sub_entry in sub_entries.flatten() {
                let sub_name = sub_entry.file_name().to_string_lossy().into_owned();
                if sub_name.starts_with('.') || !sub_entry.path().is_file() {
                    continue;
                }
                if predicate(sub_name.as_str()) {
                    result.push(format!("{}/{}", name, sub_name));
                }
            }
        } else if entry_path.is_file() && predicate(name.as_str()) {
            result.push(name);
        }
    }

    Ok(result)
}

/// Read at most `limit` bytes from the start of a file, lossily decoded
pub fn read_head<P: AsRef<Path>>(path: P, limit: usize) -> io::Result<String> {
    let file = fs::File::open(path)?;
    let mut buf = Vec::with_capacity(limit.min(8 * 1024));
    file.take(limit as u64).read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
