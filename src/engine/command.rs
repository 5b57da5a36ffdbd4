use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, info, warn};

use crate::error::{EngineError, Result};
use crate::options::MeshOptions;

/// Where the engine lives inside the macOS application bundle.
const MACOS_APP_EXECUTABLE: &str = "/Applications/Gmsh.app/Contents/MacOS/gmsh";

/// Returns the engine executable to run when none is configured: the macOS
/// application bundle if installed, otherwise `gmsh` from `PATH`.
#[must_use]
pub fn default_executable() -> PathBuf {
    let bundled = Path::new(MACOS_APP_EXECUTABLE);
    if bundled.is_file() {
        bundled.to_path_buf()
    } else {
        PathBuf::from("gmsh")
    }
}

/// Assembles the engine's argument list.
///
/// Order: dimension flag, script, `-format <name>`, `-bin`, `-o <output>`,
/// arguments implied by the format, then `options.extra_args` verbatim.
#[must_use]
pub fn engine_args(script: &Path, output: &Path, options: &MeshOptions) -> Vec<OsString> {
    let format = options.output_format;
    let mut args: Vec<OsString> = vec![
        options.dim.flag().into(),
        script.into(),
        "-format".into(),
        format.name().into(),
        "-bin".into(),
        "-o".into(),
        output.into(),
    ];
    args.extend(format.implied_args().iter().map(OsString::from));
    args.extend(options.extra_args.iter().map(OsString::from));
    args
}

/// Runs `program` to completion and returns its captured stdout and stderr.
///
/// stdout is read line by line on the calling thread and, with `verbose`,
/// logged as it arrives; stderr is drained on a scoped helper thread so the
/// child never blocks on a full pipe.
///
/// # Errors
///
/// Returns [`EngineError::Spawn`] if the process cannot be started,
/// [`EngineError::Failed`] if it exits unsuccessfully, or an I/O error if
/// its output cannot be read.
pub fn run_engine(program: &Path, args: &[OsString], verbose: bool) -> Result<String> {
    debug!(program = %program.display(), ?args, "starting engine");
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| EngineError::Spawn {
            program: program.display().to_string(),
            source,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let (stdout_text, stderr_text) = thread::scope(|scope| {
        let stderr_reader = scope.spawn(move || -> std::io::Result<String> {
            let mut buf = Vec::new();
            if let Some(mut pipe) = stderr {
                pipe.read_to_end(&mut buf)?;
            }
            Ok(String::from_utf8_lossy(&buf).into_owned())
        });
        let stdout_text = stdout.map_or_else(|| Ok(String::new()), |pipe| stream_lines(pipe, verbose));
        let stderr_text = stderr_reader
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (stdout_text, stderr_text)
    });

    // Reap the child before reporting read errors.
    let status = child.wait()?;
    let mut output = stdout_text?;
    output.push_str(&stderr_text?);

    if !status.success() {
        warn!(%status, "engine failed");
        return Err(EngineError::Failed { status, output }.into());
    }
    Ok(output)
}

fn stream_lines(pipe: impl Read, verbose: bool) -> std::io::Result<String> {
    let mut reader = BufReader::new(pipe);
    let mut captured = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&line);
        if verbose {
            info!(target: "geoscript::engine", "{}", text.trim_end());
        }
        captured.push_str(&text);
    }
    Ok(captured)
}

/// Queries the major version of the engine at `program`.
///
/// # Errors
///
/// Returns an error if the engine cannot be run, exits unsuccessfully, or
/// prints something that does not start with a version number.
pub fn engine_major_version(program: &Path) -> Result<u32> {
    let output = run_engine(program, &["--version".into()], false)?;
    Ok(parse_major_version(&output)?)
}

fn parse_major_version(text: &str) -> std::result::Result<u32, EngineError> {
    let trimmed = text.trim();
    trimmed
        .split('.')
        .next()
        .and_then(|major| major.parse().ok())
        .ok_or_else(|| EngineError::Version(trimmed.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::options::{MeshFormat, TargetDimension};

    #[test]
    fn args_follow_engine_order() {
        let options = MeshOptions {
            dim: TargetDimension::Two,
            extra_args: vec!["-order".into(), "2".into()],
            ..MeshOptions::default()
        };
        let args = engine_args(Path::new("in.geo"), Path::new("out.msh"), &options);
        assert_eq!(
            args,
            ["-2", "in.geo", "-format", "msh", "-bin", "-o", "out.msh", "-order", "2"]
                .map(OsString::from)
        );
    }

    #[test]
    fn medit_format_keeps_physical_tags() {
        let options = MeshOptions {
            output_format: MeshFormat::Mesh,
            extra_args: vec!["-v".into(), "0".into()],
            ..MeshOptions::default()
        };
        let args = engine_args(Path::new("a.geo"), Path::new("a.mesh"), &options);
        let tail: Vec<_> = args[7..].iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(tail, ["-string", "Mesh.SaveElementTagType=2;", "-v", "0"]);
    }

    #[test]
    fn major_version_is_leading_number() {
        assert_eq!(parse_major_version("4.11.1\n").unwrap(), 4);
        assert_eq!(parse_major_version("3.0.6").unwrap(), 3);
    }

    #[test]
    fn garbage_version_is_an_error() {
        assert!(matches!(
            parse_major_version("gmsh: command not found"),
            Err(EngineError::Version(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_output_of_successful_run() {
        let out = run_engine(Path::new("echo"), &["hello".into()], true).unwrap();
        assert_eq!(out, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_failure() {
        let err = run_engine(Path::new("false"), &[], false).unwrap_err();
        assert!(matches!(
            err,
            crate::GeoscriptError::Engine(EngineError::Failed { .. })
        ));
    }
}
