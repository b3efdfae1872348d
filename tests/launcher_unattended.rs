// tests/launcher_unattended.rs

mod common;
use crate::common::{init_tracing, is_finished_marker, is_start_marker, log_lines};

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use launchlog::config::builtin;
use launchlog::fs::FileSystem;
use launchlog::fs::mock::MockFileSystem;
use launchlog::launcher::{LaunchOutcome, Launcher};
use launchlog::types::{ChildExit, PolicyKind};
use launchlog_test_utils::builders::LaunchConfigBuilder;
use launchlog_test_utils::fake_console::RecordingConsole;
use launchlog_test_utils::fake_runner::FakeRunner;

type TestResult = Result<(), Box<dyn Error>>;

fn pepper_profile() -> launchlog::config::LaunchConfig {
    LaunchConfigBuilder::unattended("/opt/python/bin/python3")
        .name("pepper")
        .script("/srv/pepper/pepper4.py")
        .arg("--commodities")
        .arg("black-pepper,rubber,arecanut")
        .arg("--auto-variants")
        .arg("--output")
        .arg("/srv/pepper/prices.html")
        .log("/srv/pepper/pepper.log")
        .build()
}

#[tokio::test]
async fn single_run_brackets_output_with_two_markers() -> TestResult {
    init_tracing();

    let fs = Arc::new(MockFileSystem::new());
    fs.add_file("/srv/pepper/pepper.log", "earlier run\n");

    let runner = FakeRunner::exiting_with(0).with_output("Fancy HTML written to /srv/pepper/prices.html\n");
    let console = RecordingConsole::new();
    let mut launcher = Launcher::new(fs.clone(), runner.clone(), console.clone());

    let report = launcher.launch(&pepper_profile()).await?;
    assert_eq!(report.exit_code, 0);
    assert_eq!(report.policy, PolicyKind::Unattended);

    let lines = log_lines(fs.as_ref(), Path::new("/srv/pepper/pepper.log"));
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "earlier run");
    assert!(is_start_marker(&lines[1]));
    assert_eq!(lines[2], "Fancy HTML written to /srv/pepper/prices.html");
    assert!(is_finished_marker(&lines[3]));

    let invocations = runner.invocations();
    let invocations = invocations.lock().unwrap();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].program, PathBuf::from("/opt/python/bin/python3"));
    assert_eq!(
        invocations[0].to_string(),
        "/opt/python/bin/python3 /srv/pepper/pepper4.py --commodities black-pepper,rubber,arecanut --auto-variants --output /srv/pepper/prices.html"
    );
    assert!(invocations[0].env.is_empty(), "no activation for unattended runs");

    assert!(console.messages().is_empty());
    assert_eq!(console.pauses(), 0);
    Ok(())
}

#[tokio::test]
async fn finished_is_logged_even_when_child_fails() -> TestResult {
    init_tracing();

    let fs = Arc::new(MockFileSystem::new());
    let runner = FakeRunner::exiting_with(5).with_output("scrape failed");
    let console = RecordingConsole::new();
    let mut launcher = Launcher::new(fs.clone(), runner, console.clone());

    let report = launcher.launch(&pepper_profile()).await?;

    assert_eq!(report.exit_code, 0);
    assert_eq!(
        report.outcome,
        LaunchOutcome::Completed {
            exit: ChildExit::Exited(5)
        }
    );

    let lines = log_lines(fs.as_ref(), Path::new("/srv/pepper/pepper.log"));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "scrape failed");
    assert!(is_finished_marker(&lines[2]));
    assert!(!lines.iter().any(|l| l.starts_with("Application exited")));
    assert_eq!(console.pauses(), 0);
    Ok(())
}

#[tokio::test]
async fn finished_is_logged_when_interpreter_cannot_launch() -> TestResult {
    init_tracing();

    let fs = Arc::new(MockFileSystem::new());
    let runner = FakeRunner::failing_to_launch("No such file or directory");
    let mut launcher = Launcher::new(fs.clone(), runner, RecordingConsole::new());

    let report = launcher.launch(&pepper_profile()).await?;

    assert_eq!(report.exit_code, 0);
    let lines = log_lines(fs.as_ref(), Path::new("/srv/pepper/pepper.log"));
    assert!(is_start_marker(&lines[0]));
    assert!(lines[1].contains("No such file or directory"));
    assert!(is_finished_marker(lines.last().unwrap()));
    Ok(())
}

#[tokio::test]
async fn builtin_pepper_profile_passes_fixed_arguments() -> TestResult {
    init_tracing();

    let profile = builtin::pepper();
    let fs = Arc::new(MockFileSystem::new());
    let runner = FakeRunner::exiting_with(0);
    let mut launcher = Launcher::new(fs.clone(), runner.clone(), RecordingConsole::new());

    launcher.launch(&profile).await?;

    let invocations = runner.invocations();
    let invocations = invocations.lock().unwrap();
    let args: Vec<String> = invocations[0]
        .args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert!(args[0].ends_with("pepper4.py"));
    assert_eq!(
        &args[1..5],
        ["--commodities", "black-pepper,rubber,arecanut", "--auto-variants", "--output"]
    );
    assert!(args[5].ends_with("kannur_prices.html"));
    assert!(fs.is_file(&profile.resolved_log_path()));
    Ok(())
}
