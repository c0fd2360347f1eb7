use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual contents of a working directory. The config is
/// deserialized and unset when there is no config file. Every other regular
/// file is kept verbatim under its name, so commands that only read
/// transaction files can be checked to leave them alone.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    files: std::collections::BTreeMap<String, Vec<u8>>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Adds a file named `name` holding `contents`.
    pub fn with_file(mut self, name: &str, contents: &[u8]) -> Self {
        self.files.insert(name.to_string(), contents.to_vec());
        self
    }

    /// Reads the config and all other regular files from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config_name = fs.path::<base::Config>();
        let mut files = std::collections::BTreeMap::new();
        for entry in std::fs::read_dir(fs.dir()).unwrap() {
            let path = entry.unwrap().path();
            if path == config_name || !path.is_file() {
                continue;
            }
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            files.insert(name, std::fs::read(&path).unwrap());
        }
        Self {
            config: fs
                .has_config()
                .then(|| fs.read::<base::Config>().unwrap()),
            files,
        }
    }
}

/// Representation of a working directory's file contents, written verbatim.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    files: Vec<(&'a str, &'a [u8])>,
    dirs: Vec<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Adds a file named `name` holding `contents`.
    pub fn with_file<C>(mut self, name: &'a str, contents: &'a C) -> Self
    where
        C: AsRef<[u8]> + ?Sized,
    {
        self.files.push((name, contents.as_ref()));
        self
    }

    /// Adds an empty subdirectory. Opening it succeeds but reading it fails,
    /// which makes it stand in for an unreadable transaction file.
    pub fn with_dir(mut self, name: &'a str) -> Self {
        self.dirs.push(name);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not
    /// a valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        for (name, contents) in &self.files {
            std::fs::write(fs.resolve(name), contents).unwrap()
        }
        for name in &self.dirs {
            std::fs::create_dir(fs.resolve(name)).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        for (name, contents) in &self.files {
            os = os.with_file(name, contents);
        }
        os
    }
}
