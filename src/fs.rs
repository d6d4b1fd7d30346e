use std::fs;
use std::io;
use std::path::Path;

/// The filesystem operations the factory needs. Kept behind a trait so tests
/// can substitute an in-memory implementation and never touch real disk.
pub trait Filesystem {
    fn is_directory(&self, path: &Path) -> bool;

    fn is_writable(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    /// Creates an empty file at `path`, leaving an existing file in place.
    fn touch(&self, path: &Path) -> io::Result<()>;

    /// Creates a directory at `path`. `mode` is applied on Unix and ignored
    /// elsewhere.
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()>;
}

impl<T: Filesystem> Filesystem for &T {
    fn is_directory(&self, path: &Path) -> bool {
        (**self).is_directory(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        (**self).is_writable(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn touch(&self, path: &Path) -> io::Result<()> {
        (**self).touch(path)
    }

    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        (**self).create_dir(path, mode)
    }
}

pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_writable(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn touch(&self, path: &Path) -> io::Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .open(path)
            .map(|_| ())
    }

    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        builder.create(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn touch_creates_an_empty_file() -> Result<()> {
        let workspace = tempfile::tempdir()?;
        let path = workspace.path().join("touched");

        OsFilesystem.touch(&path)?;

        assert!(OsFilesystem.exists(&path));
        assert_eq!(fs::metadata(&path)?.len(), 0);
        Ok(())
    }

    #[test]
    fn touch_leaves_existing_contents_alone() -> Result<()> {
        let workspace = tempfile::tempdir()?;
        let path = workspace.path().join("existing");
        fs::write(&path, b"contents")?;

        OsFilesystem.touch(&path)?;

        assert_eq!(fs::read(&path)?, b"contents");
        Ok(())
    }

    #[test]
    fn create_dir_makes_a_directory() -> Result<()> {
        let workspace = tempfile::tempdir()?;
        let path = workspace.path().join("sub");

        OsFilesystem.create_dir(&path, 0o777)?;

        assert!(OsFilesystem.is_directory(&path));
        Ok(())
    }

    #[test]
    fn missing_paths_are_not_directories() {
        let fs = OsFilesystem;

        assert!(!fs.is_directory(Path::new("/no/such/path")));
        assert!(!fs.is_writable(Path::new("/no/such/path")));
        assert!(!fs.exists(Path::new("/no/such/path")));
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directories_are_not_writable() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let workspace = tempfile::tempdir()?;
        let path = workspace.path().join("sealed");
        fs::create_dir(&path)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o555))?;

        assert!(!OsFilesystem.is_writable(&path));

        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }
}
