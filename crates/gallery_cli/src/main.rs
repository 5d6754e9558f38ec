//! CLI smoke entry point.
//!
//! Drives the transfer and stroke state machines through the public API and
//! prints the resulting state, so core wiring can be checked without a host UI.
//! Diagnostics go to rolling log files under `--log-dir` (default: a temp dir).

use gallery_core::{
    sample_left, sample_right, AppContext, Column, CoreConfig, DraggableItem, StrokeCapture,
    TransferListPair,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        while let Some(flag) = args.next() {
            let slot = match flag.as_str() {
                "--config" => &mut parsed.config,
                "--log-dir" => &mut parsed.log_dir,
                other => return Err(format!("unknown argument `{other}`")),
            };
            let value = args
                .next()
                .ok_or_else(|| format!("missing value for `{flag}`"))?;
            *slot = Some(PathBuf::from(value));
        }
        Ok(parsed)
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("gallery-logs")
}

fn main() -> ExitCode {
    println!("gallery_core ping={}", gallery_core::ping());
    println!("gallery_core version={}", gallery_core::core_version());

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: gallery_cli [--config <file.json>] [--log-dir <absolute dir>]");
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config {
        Some(path) => match CoreConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load config `{}`: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => CoreConfig::default(),
    };

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    let log_dir_str = log_dir.to_string_lossy();
    if let Err(err) = gallery_core::init_logging(&config.log_level, &log_dir_str) {
        eprintln!("failed to start logging in `{log_dir_str}`: {err}");
        return ExitCode::FAILURE;
    }
    println!("logging level={} dir={log_dir_str}", config.log_level);

    let context = AppContext::from_config(&config);

    let mut pair = TransferListPair::new(context, sample_left(), sample_right());
    if let Some(bravo) = pair.left().get(1).map(|item| item.id) {
        let moved = pair.transfer(bravo, Column::Right);
        let repeated = pair.transfer(bravo, Column::Right);
        println!("transfer moved={moved} repeated={repeated}");
    }
    let alpha = pair.left().first().map(|item| item.id);
    if let Some(gesture) = alpha.and_then(|id| pair.begin_drag(id)) {
        let first = pair.drop_gesture(gesture, Column::Right);
        let second = pair.drop_gesture(gesture, Column::Left);
        println!("gesture first_drop={first} second_drop={second}");
    }
    println!("left=[{}]", joined_labels(pair.left()));
    println!("right=[{}]", joined_labels(pair.right()));

    let mut capture = StrokeCapture::with_config(&config.drawing);
    capture.append_point((0.0, 0.0));
    capture.append_point((1.0, 1.0));
    let committed = capture.commit_active_stroke();
    let empty_commit = capture.commit_active_stroke();
    println!(
        "strokes committed={committed} empty_commit={empty_commit} count={}",
        capture.committed_strokes().len()
    );

    ExitCode::SUCCESS
}

fn joined_labels(items: &[DraggableItem]) -> String {
    items
        .iter()
        .map(|item| item.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
