//! Producing a patched copy of a host executable.

use std::fs::{File, OpenOptions};
use std::io::{prelude::*, BufWriter, SeekFrom};
use std::path::Path;

use crate::cipher::Cipher;
use crate::compression::Codec;
use crate::error::{Error, Result};
use crate::file::writer::{RepackOptions, RepackStats};
use crate::file::AssetStore;

pub type PatchResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Applies host-specific fixups to a rewritten executable.
pub trait Patcher {
    fn patch(&mut self, exe: &mut File) -> PatchResult;
}

/// Leaves the executable as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPatch;

impl Patcher for NoPatch {
    fn patch(&mut self, _exe: &mut File) -> PatchResult {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    pub repack: RepackOptions,

    /// Replace an existing destination file.
    pub overwrite: bool,
}

/// Copy `source_exe` to `dest_exe` and rebuild its container from `roots`.
///
/// The pristine source is only ever read. On failure `dest_exe` is left as
/// far as it was written and should be discarded.
#[allow(clippy::too_many_arguments)]
pub fn pack<C, K, T, P, N>(
    source_exe: impl AsRef<Path>,
    dest_exe: impl AsRef<Path>,
    roots: &[P],
    known_names: &[N],
    options: &PackOptions,
    cipher: C,
    codec: &K,
    patcher: &mut T,
) -> Result<RepackStats>
where
    C: Cipher,
    K: Codec + ?Sized,
    T: Patcher + ?Sized,
    P: AsRef<Path>,
    N: AsRef<[u8]>,
{
    let source_exe = source_exe.as_ref();
    let dest_exe = dest_exe.as_ref();

    if dest_exe.exists() {
        let same_file = match (source_exe.canonicalize(), dest_exe.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };
        if same_file || !options.overwrite {
            return Err(Error::DestinationExists {
                path: dest_exe.to_path_buf(),
            });
        }
    }

    std::fs::copy(source_exe, dest_exe)?;
    tracing::info!(
        from = %source_exe.display(),
        to = %dest_exe.display(),
        "copied host executable"
    );

    let mut file = OpenOptions::new().read(true).write(true).open(dest_exe)?;
    let mut store = AssetStore::load(&mut std::io::BufReader::new(&mut file), cipher)?;

    let report = store.resolve_names(known_names);
    tracing::info!(
        resolved = report.resolved,
        unresolved = report.unresolved.len(),
        "resolved entry names"
    );

    let stats = {
        let mut writer = BufWriter::new(&mut file);
        let stats = store.repackage(&mut writer, roots, codec, &options.repack)?;
        writer.into_inner().map_err(|e| e.into_error())?;
        stats
    };

    file.seek(SeekFrom::Start(0))?;
    patcher
        .patch(&mut file)
        .map_err(|source| Error::Patch { source })?;
    file.flush()?;

    Ok(stats)
}
