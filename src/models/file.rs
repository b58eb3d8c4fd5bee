use std::path::PathBuf;

#[derive(Clone)]
pub struct FileCollectInput {
    pub input_path: PathBuf,
    pub allow_unlisted_extension: bool,
}

#[derive(Debug)]
pub struct FileCollectOutput {
    pub files: Vec<PathBuf>,
    pub skipped: usize,
}
