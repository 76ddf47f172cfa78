// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use log::trace;
use std::{
    ffi::OsStr,
    io::{self, Read},
    process::{Command, ExitStatus, Stdio},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a command and waits for at most `timeout`.
/// A command that runs longer is killed and reported as `io::ErrorKind::TimedOut`.
/// The same applies when the command exits but leaves its output open, e.g. through a background process.
pub fn run_with_timeout<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
    timeout: Duration,
) -> io::Result<CommandOutput> {
    let start = Instant::now();
    let mut child = Command::new(program.as_ref())
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Drain both pipes while waiting, a chatty child would otherwise block on a full pipe.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                trace!(
                    "Killed {:?} after {:?}",
                    program.as_ref(),
                    start.elapsed()
                );
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("timed out after {}ms", timeout.as_millis()),
                ));
            }
            None => thread::sleep(Duration::from_millis(10)),
        }
    };

    let deadline = start + timeout;
    let output = CommandOutput {
        status,
        stdout: collect(stdout, deadline, timeout)?,
        stderr: collect(stderr, deadline, timeout)?,
    };
    trace!(
        "Executed {:?} in {:?} with {}",
        program.as_ref(),
        start.elapsed(),
        output.status
    );
    Ok(output)
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = vec![];
        let _ = pipe.read_to_end(&mut buffer);
        let _ = sender.send(String::from_utf8_lossy(&buffer).to_string());
    });
    receiver
}

fn collect(
    receiver: Option<Receiver<String>>,
    deadline: Instant,
    timeout: Duration,
) -> io::Result<String> {
    let Some(receiver) = receiver else {
        return Ok(String::new());
    };
    match receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(output) => Ok(output),
        Err(RecvTimeoutError::Disconnected) => Ok(String::new()),
        Err(RecvTimeoutError::Timeout) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("output still open after {}ms", timeout.as_millis()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_both_streams() {
        let output = run_with_timeout(
            "sh",
            &["-c", "echo out; echo err >&2"],
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[test]
    fn slow_commands_time_out() {
        let err = run_with_timeout("sh", &["-c", "sleep 5"], Duration::from_millis(100))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn background_process_holding_output_times_out() {
        let start = Instant::now();
        let err = run_with_timeout(
            "sh",
            &["-c", "sleep 4 & echo 'Python 3.12.1'"],
            Duration::from_millis(500),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert!(start.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn missing_program_is_not_found() {
        let err = run_with_timeout(
            "/definitely/not/a/program",
            &["-V"],
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn large_output_does_not_block() {
        let output = run_with_timeout(
            "sh",
            &["-c", "i=0; while [ $i -lt 20000 ]; do echo /usr/bin/python$i; i=$((i+1)); done"],
            Duration::from_secs(20),
        )
        .unwrap();
        assert_eq!(output.stdout.lines().count(), 20000);
    }
}
