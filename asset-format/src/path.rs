//! Mapping logical asset names onto the filesystem.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use relative_path::{Component, RelativePath};

use crate::error::DecodeError;

/// Extension appended to a source path for its precompressed sidecar.
pub const SIDECAR_EXTENSION: &str = ".zst";

/// Resolve a logical name such as `Data/Textures/items.png` below `root`.
///
/// Names are raw bytes; only UTF-8 names without `..` chunks can be placed on
/// disk.
pub fn name_to_path(name: &[u8], root: &Path) -> Result<PathBuf, DecodeError> {
    let name = std::str::from_utf8(name).map_err(|_| DecodeError::UnrepresentableName)?;
    let relative = RelativePath::new(name);

    let mut normal = 0;
    for component in relative.components() {
        match component {
            Component::ParentDir => return Err(DecodeError::UnrepresentableName),
            Component::CurDir => {}
            Component::Normal(_) => normal += 1,
        }
    }

    if normal == 0 {
        return Err(DecodeError::UnrepresentableName);
    }

    Ok(relative.to_path(root))
}

/// `path` with [`SIDECAR_EXTENSION`] appended to its full file name.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(SIDECAR_EXTENSION);
    PathBuf::from(os)
}
