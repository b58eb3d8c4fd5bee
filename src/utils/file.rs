use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::error::{ConvertError, Result};

/// soffice 可轉換的副檔名（小寫）
pub const SUPPORTED_EXTENSIONS: [&str; 28] = [
    "doc", "dot", "docx", "docm", "dotm", "xls", "xlsx", "wpd", "wps", "rtf",
    "txt", "csv", "sdw", "sgl", "vor", "xml", "uot", "uof", "jtd", "jtt",
    "hwp", "602", "pdb", "psw", "odt", "ott", "oth", "odm",
];

/// 取得路徑的小寫副檔名，無副檔名時回傳空字串
pub fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

pub fn is_supported_extension(extension: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension)
}

/// 來源必須是已存在的一般檔案，目錄不算
pub fn validate_source_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        log::error!("來源檔案不存在：{}", path.display());
        return Err(ConvertError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

pub fn validate_extension(path: &Path) -> Result<()> {
    let extension = lowercase_extension(path);
    if !is_supported_extension(&extension) {
        return Err(ConvertError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension,
        });
    }
    Ok(())
}

/// 確保輸出目錄存在且可寫入；不存在時建立單層目錄
pub fn prepare_target_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir(path).map_err(|source| ConvertError::DirectoryCreateFailed {
            path: path.to_path_buf(),
            source,
        })?;
        info!("已建立輸出目錄：{}", path.display());
    }

    if !is_writable_dir(path) {
        return Err(ConvertError::NotWritable(path.to_path_buf()));
    }
    Ok(())
}

/// 以實際建立暫存檔的方式檢查目錄是否可寫入
pub fn is_writable_dir(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    match tempfile::tempfile_in(path) {
        Ok(_) => true,
        Err(e) => {
            debug!("目錄 {} 寫入測試失敗：{}", path.display(), e);
            false
        }
    }
}

/// 在 PATH 中尋找可執行檔；名稱含路徑分隔符時直接檢查該路徑
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let search_path = env::var_os("PATH")?;
    env::split_paths(&search_path)
        .map(|dir| dir.join(name))
        .find(|path| is_executable(path))
        .or_else(|| find_with_windows_suffix(&search_path, name))
}

#[cfg(windows)]
fn find_with_windows_suffix(search_path: &OsStr, name: &str) -> Option<PathBuf> {
    env::split_paths(search_path)
        .map(|dir| dir.join(format!("{}.exe", name)))
        .find(|path| is_executable(path))
}

#[cfg(not(windows))]
fn find_with_windows_suffix(_search_path: &OsStr, _name: &str) -> Option<PathBuf> {
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(lowercase_extension(Path::new("REPORT.DOCX")), "docx");
        assert_eq!(lowercase_extension(Path::new("notes")), "");
        assert_eq!(lowercase_extension(Path::new("archive.tar.602")), "602");
    }

    #[test]
    fn allow_list_is_case_sensitive() {
        assert!(is_supported_extension("docx"));
        assert!(is_supported_extension("602"));
        assert!(!is_supported_extension("DOCX"));
        assert!(!is_supported_extension("pdf"));
        assert!(!is_supported_extension(""));
    }

    #[test]
    fn missing_source_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_source_file(&dir.path().join("missing.docx")).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound(_)));

        let err = validate_source_file(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound(_)));
    }

    #[test]
    fn prepare_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");
        prepare_target_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn prepare_does_not_create_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        let err = prepare_target_dir(&target).unwrap_err();
        assert!(matches!(err, ConvertError::DirectoryCreateFailed { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn regular_file_is_not_a_writable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();
        let err = prepare_target_dir(&file).unwrap_err();
        assert!(matches!(err, ConvertError::NotWritable(_)));
    }

    #[test]
    fn unknown_executable_is_not_found() {
        assert!(find_executable("doc-to-pdf-no-such-converter").is_none());
        assert!(find_executable("").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn explicit_path_to_executable_is_found() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-office");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(find_executable(script.to_str().unwrap()), Some(script.clone()));

        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(find_executable(script.to_str().unwrap()).is_none());
    }
}
