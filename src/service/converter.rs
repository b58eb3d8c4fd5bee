use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use log::{debug, info, warn};
use tempfile::TempDir;
use crate::error::{ConvertError, Result};
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::models::process::{Invocation, ProcessOutput};
use crate::service::traits::i_service::{ConverterServiceTrait, ProcessRunner};

/// 直接以參數陣列啟動程序，不經過 shell；stdout 與 stderr 寫入同一管道
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        let (mut reader, writer) = os_pipe::pipe()?;
        let writer_for_stderr = writer.try_clone()?;

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .env("HOME", &invocation.home)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_for_stderr);
        let mut child = command.spawn()?;
        // 必須先關閉父程序持有的寫入端，否則讀取不會結束
        drop(command);

        let mut output = Vec::new();
        let read_result = reader.read_to_end(&mut output);
        let status = child.wait()?;
        read_result?;

        Ok(ProcessOutput {
            status: status.code(),
            output,
        })
    }
}

/// 轉換服務，組出轉換程式的呼叫並回報結果
pub struct ConverterService {
    runner: Box<dyn ProcessRunner>,
    scratch_dir: Option<PathBuf>,
}

impl ConverterService {
    /// 使用系統程序與每次新建的暫存 HOME
    pub fn new() -> Self {
        Self::with_runner(Box::new(SystemRunner), None)
    }

    pub fn with_runner(runner: Box<dyn ProcessRunner>, scratch_dir: Option<PathBuf>) -> Self {
        ConverterService { runner, scratch_dir }
    }

    /// 組出 `--headless --convert-to pdf --outdir <dir> <file>` 的參數陣列
    pub fn build_args(request: &ConversionRequest) -> Vec<OsString> {
        vec![
            OsString::from("--headless"),
            OsString::from("--convert-to"),
            OsString::from("pdf"),
            OsString::from("--outdir"),
            path_arg(request.target_dir()),
            path_arg(request.source()),
        ]
    }
}

/// 以 `-` 開頭的相對路徑加上 `./`，避免被當成選項
pub fn path_arg(path: &Path) -> OsString {
    if path.is_relative() && path.as_os_str().to_string_lossy().starts_with('-') {
        Path::new(".").join(path).into_os_string()
    } else {
        path.as_os_str().to_os_string()
    }
}

impl Default for ConverterService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterServiceTrait for ConverterService {
    fn execute(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        // 暫存 HOME 在本次轉換結束時刪除
        let temp_home;
        let home = match &self.scratch_dir {
            Some(dir) => dir.clone(),
            None => {
                temp_home = TempDir::new()?;
                temp_home.path().to_path_buf()
            }
        };

        let invocation = Invocation {
            program: request.converter().to_string(),
            args: Self::build_args(request),
            home,
        };
        info!("執行轉換：{} -> {}", request.source().display(), request.target_dir().display());
        debug!("呼叫：{} {:?}，HOME={}", invocation.program, invocation.args, invocation.home.display());

        let output = self.runner.run(&invocation).map_err(|source| ConvertError::Spawn {
            converter: invocation.program.clone(),
            source,
        })?;
        let lines = output.lines();

        if !output.success() {
            warn!("轉換程式結束狀態：{:?}", output.status);
            return Err(ConvertError::ExecutionFailed(lines.join(" ")));
        }

        let pdf_path = request.expected_pdf();
        if !pdf_path.exists() {
            warn!("轉換程式回報成功，但找不到 {}", pdf_path.display());
        }
        Ok(ConversionResult { lines, pdf_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::sync::{Arc, Mutex};

    /// 記錄每次呼叫並回傳固定結果
    struct StubRunner {
        calls: Arc<Mutex<Vec<Invocation>>>,
        status: Option<i32>,
        output: &'static str,
    }

    impl ProcessRunner for StubRunner {
        fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
            self.calls.lock().unwrap().push(invocation.clone());
            Ok(ProcessOutput {
                status: self.status,
                output: self.output.as_bytes().to_vec(),
            })
        }
    }

    struct FailingRunner;

    impl ProcessRunner for FailingRunner {
        fn run(&self, _invocation: &Invocation) -> io::Result<ProcessOutput> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn request_in(dir: &Path, name: &str) -> ConversionRequest {
        let source = dir.join(name);
        File::create(&source).unwrap();
        ConversionRequest::builder(&source, false)
            .unwrap()
            .target_dir(dir.join("out"))
            .unwrap()
            .build()
            .unwrap()
    }

    fn stub(status: Option<i32>, output: &'static str) -> (StubRunner, Arc<Mutex<Vec<Invocation>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (StubRunner { calls: calls.clone(), status, output }, calls)
    }

    #[test]
    fn success_invokes_once_and_returns_lines() {
        let dir = tempfile::tempdir().unwrap();
        let request = request_in(dir.path(), "report.docx");
        let (runner, calls) = stub(Some(0), "convert report.docx -> out/report.pdf using filter : writer_pdf_Export\n");
        let service = ConverterService::with_runner(Box::new(runner), Some(dir.path().to_path_buf()));

        let result = service.execute(&request).unwrap();
        assert_eq!(result.lines, vec!["convert report.docx -> out/report.pdf using filter : writer_pdf_Export"]);
        assert_eq!(result.pdf_path, dir.path().join("out").join("report.pdf"));

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "soffice");
        assert_eq!(calls[0].home, dir.path());
        assert_eq!(calls[0].args, vec![
            OsString::from("--headless"),
            OsString::from("--convert-to"),
            OsString::from("pdf"),
            OsString::from("--outdir"),
            dir.path().join("out").into_os_string(),
            dir.path().join("report.docx").into_os_string(),
        ]);
    }

    #[test]
    fn non_zero_exit_carries_joined_output() {
        let dir = tempfile::tempdir().unwrap();
        let request = request_in(dir.path(), "broken.doc");
        let (runner, calls) = stub(Some(1), "Error: source file could not be loaded\nsecond line\n");
        let service = ConverterService::with_runner(Box::new(runner), None);

        match service.execute(&request).unwrap_err() {
            ConvertError::ExecutionFailed(message) => {
                assert_eq!(message, "Error: source file could not be loaded second line")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn killed_process_is_execution_failure() {
        let dir = tempfile::tempdir().unwrap();
        let request = request_in(dir.path(), "big.xlsx");
        let (runner, _) = stub(None, "");
        let service = ConverterService::with_runner(Box::new(runner), None);
        assert!(matches!(service.execute(&request), Err(ConvertError::ExecutionFailed(_))));
    }

    #[test]
    fn temporary_home_is_removed_afterwards() {
        let dir = tempfile::tempdir().unwrap();
        let request = request_in(dir.path(), "memo.odt");
        let (runner, calls) = stub(Some(0), "");
        let service = ConverterService::with_runner(Box::new(runner), None);
        service.execute(&request).unwrap();

        let home = calls.lock().unwrap()[0].home.clone();
        assert_ne!(home, dir.path());
        assert!(!home.exists());
    }

    #[test]
    fn dash_prefixed_relative_paths_are_not_options() {
        assert_eq!(path_arg(Path::new("--version.docx")), OsString::from("./--version.docx"));
        assert_eq!(path_arg(Path::new("-out")), OsString::from("./-out"));
        assert_eq!(path_arg(Path::new("docs/-a.doc")), OsString::from("docs/-a.doc"));
        assert_eq!(path_arg(Path::new("/tmp/-a.doc")), OsString::from("/tmp/-a.doc"));
    }

    #[test]
    fn spawn_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let request = request_in(dir.path(), "notes.txt");
        let service = ConverterService::with_runner(Box::new(FailingRunner), None);
        assert!(matches!(service.execute(&request), Err(ConvertError::Spawn { converter, .. }) if converter == "soffice"));
    }
}
