use std::path::Path;
use log::{error, info};
use crate::error::Result;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput, ConversionRequest, ConversionResult, ConverterConfig};
use crate::models::file::FileCollectInput;
use crate::service::traits::i_service::{ConverterServiceTrait, FileServiceTrait};
use crate::utils::utils::create_progress_bar;

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    converter_service: Box<dyn ConverterServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        converter_service: Box<dyn ConverterServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            converter_service,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: ConversionInput) -> Result<ConversionOutput> {
        let file_output = self.file_service.collect_files(FileCollectInput {
            input_path: input.input_path.clone(),
            allow_unlisted_extension: input.config.allow_unlisted_extension,
        })?;

        if input.input_path.is_dir() {
            info!("開始批次轉換，輸入目錄：{}，輸出目錄：{}", input.input_path.display(), input.output_dir.display());
            self.process_batch(&input, &file_output.files)
        } else {
            info!("開始轉換，輸入檔案：{}，輸出目錄：{}", input.input_path.display(), input.output_dir.display());
            let result = self.convert_one(&input.input_path, &input.output_dir, &input.config)?;
            Ok(ConversionOutput {
                output_dir: input.output_dir.clone(),
                converted: 1,
                failed: 0,
                pdf_paths: vec![result.pdf_path],
            })
        }
    }
}

impl ConversionFacade {
    fn convert_one(&self, source: &Path, output_dir: &Path, config: &ConverterConfig) -> Result<ConversionResult> {
        let request = ConversionRequest::from_config(source, output_dir, config)?;
        let result = self.converter_service.execute(&request)?;
        for line in &result.lines {
            info!("{}", line);
        }
        Ok(result)
    }

    // 批次模式下單一檔案失敗不中斷整體流程
    fn process_batch(&self, input: &ConversionInput, files: &[std::path::PathBuf]) -> Result<ConversionOutput> {
        let pm = create_progress_bar(files.len() as u64, input.no_progress);
        let mut pdf_paths = Vec::new();
        let mut failed = 0;

        for (index, file_path) in files.iter().enumerate() {
            pm.update(index as u64, &file_path.to_string_lossy());
            match self.convert_one(file_path, &input.output_dir, &input.config) {
                Ok(result) => pdf_paths.push(result.pdf_path),
                Err(e) => {
                    error!("轉換 {} 失敗：{}", file_path.display(), e);
                    failed += 1;
                }
            }
        }
        pm.update(files.len() as u64, "");
        pm.finish(pdf_paths.len(), failed);

        Ok(ConversionOutput {
            output_dir: input.output_dir.clone(),
            converted: pdf_paths.len(),
            failed,
            pdf_paths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use crate::error::ConvertError;
    use crate::service::file::FileService;

    /// 依檔名決定成敗的假轉換服務
    struct FakeConverter {
        seen: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl ConverterServiceTrait for FakeConverter {
        fn execute(&self, request: &ConversionRequest) -> Result<ConversionResult> {
            self.seen.lock().unwrap().push(request.source().to_path_buf());
            if request.source().to_string_lossy().contains("broken") {
                return Err(ConvertError::ExecutionFailed("Error: source file could not be loaded".to_string()));
            }
            Ok(ConversionResult {
                lines: vec![format!("convert {}", request.source().display())],
                pdf_path: request.expected_pdf(),
            })
        }
    }

    fn facade() -> (ConversionFacade, Arc<Mutex<Vec<PathBuf>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let facade = ConversionFacade::new(
            Box::new(FileService::new()),
            Box::new(FakeConverter { seen: seen.clone() }),
        );
        (facade, seen)
    }

    fn input(input_path: PathBuf, output_dir: PathBuf) -> ConversionInput {
        ConversionInput {
            input_path,
            output_dir,
            config: ConverterConfig::default(),
            no_progress: true,
        }
    }

    #[test]
    fn single_file_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.docx");
        fs::write(&source, "").unwrap();
        let (facade, seen) = facade();

        let err = facade.execute_conversion(input(source, dir.path().join("out"))).unwrap_err();
        assert!(matches!(err, ConvertError::ExecutionFailed(_)));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn single_file_with_unlisted_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.xyz");
        fs::write(&source, "").unwrap();
        let (facade, seen) = facade();

        let err = facade.execute_conversion(input(source, dir.path().join("out"))).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedExtension { .. }));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn batch_counts_failures_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("a.docx"), "").unwrap();
        fs::write(docs.join("broken.doc"), "").unwrap();
        fs::write(docs.join("c.rtf"), "").unwrap();
        fs::write(docs.join("skip.png"), "").unwrap();
        let out = dir.path().join("out");
        let (facade, seen) = facade();

        let output = facade.execute_conversion(input(docs.clone(), out.clone())).unwrap();
        assert_eq!(output.converted, 2);
        assert_eq!(output.failed, 1);
        assert_eq!(output.pdf_paths, vec![out.join("a.pdf"), out.join("c.pdf")]);
        assert_eq!(seen.lock().unwrap().len(), 3);
        assert!(out.is_dir());
    }
}
