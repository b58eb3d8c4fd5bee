use std::path::{Path, PathBuf};
use log::{info, warn};
use walkdir::WalkDir;
use crate::error::{ConvertError, Result};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::file::{is_supported_extension, lowercase_extension};

/// File 服務，負責收集待轉換的檔案並實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    /// 輸入為檔案時原樣回傳，由轉換請求負責驗證；
    /// 輸入為目錄時遞迴收集副檔名受支援的檔案
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput> {
        let input_path = input.input_path.as_path();
        if !input_path.exists() {
            log::error!("輸入路徑不存在：{}", input_path.display());
            return Err(ConvertError::FileNotFound(input_path.to_path_buf()));
        }

        if !input_path.is_dir() {
            return Ok(FileCollectOutput {
                files: vec![input_path.to_path_buf()],
                skipped: 0,
            });
        }

        let (files, skipped) = collect_dir(input_path, input.allow_unlisted_extension)?;
        if files.is_empty() {
            return Err(ConvertError::NoInputFiles(input_path.to_path_buf()));
        }
        info!("收集到 {} 個檔案，跳過 {} 個", files.len(), skipped);
        Ok(FileCollectOutput { files, skipped })
    }
}

fn collect_dir(dir: &Path, allow_unlisted_extension: bool) -> Result<(Vec<PathBuf>, usize)> {
    let mut files = Vec::new();
    let mut skipped = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ConvertError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if allow_unlisted_extension || is_supported_extension(&lowercase_extension(path)) {
            files.push(path.to_path_buf());
        } else {
            warn!("副檔名不受支援，跳過：{}", path.display());
            skipped += 1;
        }
    }
    Ok((files, skipped))
}
