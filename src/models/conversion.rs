use std::path::{Path, PathBuf};
use log::info;
use crate::error::{ConvertError, Result};
use crate::utils::file::{find_executable, prepare_target_dir, validate_extension, validate_source_file};

/// 預設轉換程式
pub const DEFAULT_CONVERTER: &str = "soffice";

/// 轉換程式的不可變設定
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// 明確指定的轉換程式；None 時使用預設的 soffice 且不預先檢查
    pub converter: Option<String>,
    pub allow_unlisted_extension: bool,
    /// 作為轉換程式 HOME 的目錄；None 時每次轉換使用新的暫存目錄
    pub scratch_dir: Option<PathBuf>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            converter: None,
            allow_unlisted_extension: false,
            scratch_dir: None,
        }
    }
}

/// 已驗證的轉換請求，只能由 [`ConversionRequestBuilder::build`] 產生
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    source: PathBuf,
    target_dir: PathBuf,
    converter: String,
}

impl ConversionRequest {
    pub fn builder(source: impl AsRef<Path>, allow_unlisted_extension: bool) -> Result<ConversionRequestBuilder> {
        ConversionRequestBuilder::new(source, allow_unlisted_extension)
    }

    /// 依設定一次完成所有驗證
    pub fn from_config(source: impl AsRef<Path>, target_dir: impl AsRef<Path>, config: &ConverterConfig) -> Result<Self> {
        let mut builder = ConversionRequestBuilder::new(source, config.allow_unlisted_extension)?
            .target_dir(target_dir)?;
        if let Some(name) = &config.converter {
            builder = builder.converter(name)?;
        }
        builder.build()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn converter(&self) -> &str {
        &self.converter
    }

    /// 轉換程式預期產生的 PDF 路徑
    pub fn expected_pdf(&self) -> PathBuf {
        let mut file_name = self.source.file_stem().unwrap_or(self.source.as_os_str()).to_os_string();
        file_name.push(".pdf");
        self.target_dir.join(file_name)
    }
}

/// 逐步驗證並組出 [`ConversionRequest`]
#[derive(Debug, Clone)]
pub struct ConversionRequestBuilder {
    source: PathBuf,
    target_dir: Option<PathBuf>,
    converter: String,
}

impl ConversionRequestBuilder {
    pub fn new(source: impl AsRef<Path>, allow_unlisted_extension: bool) -> Result<Self> {
        let source = source.as_ref();
        validate_source_file(source)?;
        if !allow_unlisted_extension {
            validate_extension(source)?;
        }

        Ok(ConversionRequestBuilder {
            source: source.to_path_buf(),
            target_dir: None,
            converter: DEFAULT_CONVERTER.to_string(),
        })
    }

    pub fn target_dir(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        prepare_target_dir(path)?;
        self.target_dir = Some(path.to_path_buf());
        Ok(self)
    }

    pub fn converter(mut self, name: &str) -> Result<Self> {
        let resolved = find_executable(name).ok_or_else(|| ConvertError::ConverterNotFound(name.to_string()))?;
        info!("使用轉換程式：{}（{}）", name, resolved.display());
        self.converter = name.to_string();
        Ok(self)
    }

    pub fn build(self) -> Result<ConversionRequest> {
        let target_dir = self.target_dir.ok_or(ConvertError::MissingTargetDirectory)?;
        Ok(ConversionRequest {
            source: self.source,
            target_dir,
            converter: self.converter,
        })
    }
}

/// 轉換程式成功結束時的輸出
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub lines: Vec<String>,
    pub pdf_path: PathBuf,
}

/// Facade 的輸入
#[derive(Debug, Clone)]
pub struct ConversionInput {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub config: ConverterConfig,
    pub no_progress: bool,
}

/// Facade 的輸出
#[derive(Debug)]
pub struct ConversionOutput {
    pub output_dir: PathBuf,
    pub converted: usize,
    pub failed: usize,
    pub pdf_paths: Vec<PathBuf>,
}
