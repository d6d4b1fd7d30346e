//! Uniquely-named temporary files and directories under a caller-controlled
//! base directory, with optional prefix/suffix/extension naming and a bounded
//! retry on name collisions. Created entries are never tracked or removed by
//! this crate; cleanup belongs to the caller.

mod error;
mod fs;
mod name;
mod rand;

pub use crate::error::Error;
pub use crate::fs::Filesystem;
pub use crate::fs::OsFilesystem;
pub use crate::rand::FastRandom;
pub use crate::rand::Random;

use crate::name::TOKEN_MAX;
use crate::name::TOKEN_MIN;
use std::env;
use std::io;
use std::path::Path;
use std::path::PathBuf;

pub const DEFAULT_MAX_TRY: u32 = 65536;

/// Naming parameters for a single creation call.
///
/// Requesting a suffix or an extension (even an empty one) switches name
/// generation from the OS unique-name primitive to the randomized candidate
/// loop.
#[derive(Debug, Clone)]
pub struct Naming {
    pub prefix: String,
    pub suffix: Option<String>,
    /// Appended after a dot when non-empty.
    pub extension: Option<String>,
    /// Collision retries before the call gives up.
    pub max_try: u32,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: None,
            extension: None,
            max_try: DEFAULT_MAX_TRY,
        }
    }
}

impl Naming {
    fn wants_custom_name(&self) -> bool {
        self.suffix.is_some() || self.extension.is_some()
    }
}

/// Factory for temporary files and directories.
///
/// Holds no state between calls beyond its collaborators; every operation is
/// independent and reentrant.
pub struct Scratch<F = OsFilesystem, R = FastRandom> {
    fs: F,
    rng: R,
    base: Option<PathBuf>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::with(OsFilesystem, FastRandom::new())
    }

    /// A factory bound to `base`, which serves [`Scratch::create_temporary_file`]
    /// and [`Scratch::create_temporary_directory`].
    pub fn in_dir(base: impl Into<PathBuf>) -> Self {
        Self::new().bound_to(base)
    }
}

impl<F: Filesystem, R: Random> Scratch<F, R> {
    pub fn with(fs: F, rng: R) -> Self {
        Self {
            fs,
            rng,
            base: None,
        }
    }

    pub fn bound_to(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Creates `quantity` empty files in the platform's temporary directory
    /// and returns their paths in creation order.
    ///
    /// `max_try` bounds collision retries per file, not across the batch.
    /// There is no rollback: when the call fails partway through, files
    /// created before the failure stay on disk.
    pub fn create_temporary_files(
        &mut self,
        quantity: u32,
        naming: &Naming,
    ) -> Result<Vec<PathBuf>, Error> {
        if quantity < 1 {
            return Err(Error::InvalidArgument(
                "invalid temporary files quantity".to_string(),
            ));
        }

        let mut files = Vec::with_capacity(quantity as usize);
        for _ in 0..quantity {
            files.push(self.create_empty_file(env::temp_dir(), naming)?);
        }

        Ok(files)
    }

    /// Creates one empty file in `base_path`, named per `naming`.
    ///
    /// Without a suffix or extension the file comes from the OS unique
    /// temp-file primitive, which creates atomically. With either of them the
    /// factory probes random candidate names instead; there the existence
    /// check and the creation are separate filesystem calls, so two processes
    /// racing on the same base directory can land on the same name in that
    /// window.
    pub fn create_empty_file(
        &mut self,
        base_path: impl AsRef<Path>,
        naming: &Naming,
    ) -> Result<PathBuf, Error> {
        let base = base_path.as_ref();

        if !self.fs.is_directory(base) || !self.fs.is_writable(base) {
            return Err(Error::UnwritableBase(base.to_path_buf()));
        }

        if !naming.wants_custom_name() {
            return os_temp_file(base, &naming.prefix);
        }

        self.create_unique(base, naming, |fs, path| fs.touch(path))
    }

    /// Creates one empty file in the bound base directory.
    pub fn create_temporary_file(&mut self) -> Result<PathBuf, Error> {
        let base = self.bound_base()?;
        self.create_empty_file(base, &Naming::default())
    }

    /// Creates a uniquely-named subdirectory of the bound base directory,
    /// using the same candidate-and-retry discipline as file creation.
    pub fn create_temporary_directory(&mut self) -> Result<PathBuf, Error> {
        let base = self.bound_base()?;

        if !self.fs.is_directory(&base) || !self.fs.is_writable(&base) {
            return Err(Error::UnwritableBase(base));
        }

        self.create_unique(&base, &Naming::default(), |fs, path| {
            fs.create_dir(path, 0o777)
        })
    }

    fn bound_base(&self) -> Result<PathBuf, Error> {
        self.base.clone().ok_or_else(|| {
            Error::InvalidArgument("factory is not bound to a base directory".to_string())
        })
    }

    /// Probes random candidate names under `base` until one is free, then
    /// materializes it with `create`. The retry budget is an explicit counter
    /// decremented once per collision.
    fn create_unique<C>(&mut self, base: &Path, naming: &Naming, create: C) -> Result<PathBuf, Error>
    where
        C: Fn(&F, &Path) -> io::Result<()>,
    {
        let mut remaining = naming.max_try;

        while remaining > 0 {
            let token = name::base36(self.rng.pick(TOKEN_MIN, TOKEN_MAX));
            let candidate = base.join(name::candidate(
                &naming.prefix,
                &token,
                naming.suffix.as_deref().unwrap_or(""),
                naming.extension.as_deref(),
            ));

            if !self.fs.exists(&candidate) {
                create(&self.fs, &candidate)?;
                return Ok(candidate);
            }

            remaining -= 1;
        }

        Err(Error::NameGeneration)
    }
}

fn os_temp_file(base: &Path, prefix: &str) -> Result<PathBuf, Error> {
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(base)
        .map_err(|_| Error::NameGeneration)?;
    let (_, path) = file.keep().map_err(|_| Error::NameGeneration)?;

    Ok(path)
}
