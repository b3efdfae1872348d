// tests/append_only_property.rs

mod common;
use crate::common::log_lines;

use std::path::Path;
use std::sync::Arc;

use proptest::prelude::*;

use launchlog::config::LaunchConfig;
use launchlog::exec::Activation;
use launchlog::fs::mock::MockFileSystem;
use launchlog::launcher::Launcher;
use launchlog_test_utils::builders::LaunchConfigBuilder;
use launchlog_test_utils::fake_console::RecordingConsole;
use launchlog_test_utils::fake_runner::FakeRunner;

const LOG: &str = "/var/log/job.log";

fn profile(interactive: bool) -> LaunchConfig {
    let builder = if interactive {
        LaunchConfigBuilder::interactive("/opt/venv")
    } else {
        LaunchConfigBuilder::unattended("/usr/bin/python3")
    };
    builder.script("/opt/job.py").log(LOG).build()
}

fn run_once(
    fs: &Arc<MockFileSystem>,
    interactive: bool,
    exit_code: i32,
    output: &str,
) -> (i32, usize) {
    let runner = FakeRunner::exiting_with(exit_code).with_output(output);
    let mut launcher = Launcher::new(fs.clone(), runner.clone(), RecordingConsole::new());

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let report = rt
        .block_on(launcher.launch(&profile(interactive)))
        .expect("launch");
    (report.exit_code, runner.invocation_count())
}

proptest! {
    #[test]
    fn every_run_appends_and_never_rewrites(
        history in "[a-z ]{0,20}(\n[a-z ]{0,20}){0,3}\n",
        runs in proptest::collection::vec(
            (any::<bool>(), any::<bool>(), -3i32..4, "([a-z]{0,8}\n?){0,4}"),
            1..5,
        ),
    ) {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file(LOG, history.clone());

        for (interactive, venv_present, exit_code, output) in runs {
            if venv_present {
                fs.add_file(Activation::for_venv("/opt/venv").entry_point(), "");
            }
            let before = fs.contents(LOG).unwrap_or_default();
            let before_lines = log_lines(fs.as_ref(), Path::new(LOG)).len();

            let (launcher_exit, invoked) = run_once(&fs, interactive, exit_code, &output);

            let after = fs.contents(LOG).unwrap_or_default();
            let lines = log_lines(fs.as_ref(), Path::new(LOG));

            prop_assert!(after.starts_with(&before));
            prop_assert!(lines.len() > before_lines);

            let venv_ready = fs.contents(Activation::for_venv("/opt/venv").entry_point()).is_some();
            if interactive && !venv_ready {
                prop_assert_eq!(invoked, 0);
                prop_assert_eq!(launcher_exit, 1);
            } else if interactive && exit_code != 0 {
                let expected = format!("Application exited with error code {exit_code}");
                prop_assert_eq!(lines.last().map(String::as_str), Some(expected.as_str()));
                prop_assert_eq!(launcher_exit, exit_code);
            } else if !interactive {
                prop_assert!(lines.last().unwrap().starts_with("Finished. "));
                prop_assert_eq!(launcher_exit, 0);
            }
        }
    }
}
