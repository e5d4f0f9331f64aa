//! Helpers for the accompanying binaries: argument parsing,
//! logging and batch conversion.
//!
//! APIs here shouldn't be considered stable / used as a
//! library.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
pub use clap::{App, Arg};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
pub use inflector::Inflector;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde_derive::*;
use tracing_subscriber::EnvFilter;

use crate::{convert_file, ContainerLayout, Conversion, Extrema};

#[macro_export]
macro_rules! args_parser {
    ($name:expr) => {{
        $crate::cli::App::new($name)
            .version(clap::crate_version!())
            .author(clap::crate_authors!())
    }};
}

#[macro_export]
macro_rules! arg {
    ($name:expr) => {{
        use $crate::cli::Inflector;
        $crate::cli::Arg::with_name($name).value_name(&$name.to_screaming_snake_case())
    }};
}

#[macro_export]
macro_rules! opt {
    ($name:expr) => {{
        use $crate::cli::Inflector;
        $crate::cli::Arg::with_name($name)
            .long(&$name.to_kebab_case())
            .value_name(&$name.to_screaming_snake_case())
    }};
}

/// Install a stderr subscriber. Each `-v` raises the level
/// one step from `warn`.
pub fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Output path for `input` inside `output_dir`: same stem,
/// `png` extension.
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow!("no file name in path: {}", input.display()))?;
    let mut name = stem.to_os_string();
    name.push(".png");
    Ok(output_dir.join(name))
}

/// One converted file of a batch.
#[derive(Serialize, Debug)]
pub struct ConvertedImage {
    pub path: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub extrema: Extrema,
}

impl ConvertedImage {
    fn new(path: PathBuf, output: PathBuf, conversion: Conversion) -> Self {
        ConvertedImage {
            path,
            output,
            extrema: conversion.extrema,
        }
    }
}

/// Pair each input with its output path inside
/// `output_dir`. Fails if two inputs would write the same
/// PNG; names are compared ignoring case.
pub fn plan_outputs(paths: Vec<PathBuf>, output_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut claimed: HashMap<String, PathBuf> = HashMap::with_capacity(paths.len());
    paths
        .into_iter()
        .map(|path| -> Result<(PathBuf, PathBuf)> {
            let output = output_path_for(&path, output_dir)?;
            let key = output.to_string_lossy().to_lowercase();
            if let Some(other) = claimed.get(&key) {
                bail!(
                    "{} and {} would both be written to {}",
                    other.display(),
                    path.display(),
                    output.display()
                );
            }
            claimed.insert(key, path.clone());
            Ok((path, output))
        })
        .collect()
}

/// Convert every path into `output_dir`, in parallel, with
/// a progress bar on stderr. Each file is converted on its
/// own by a single worker, and owns its output file.
pub fn convert_paths_par(
    paths: Vec<PathBuf>,
    output_dir: &Path,
    layout: ContainerLayout,
) -> Result<impl ParallelIterator<Item = Result<ConvertedImage>>> {
    let jobs = plan_outputs(paths, output_dir)?;

    let bar = ProgressBar::new(jobs.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar:cyan/blue} {pos:>7}/{len:7}"),
    );

    Ok(jobs
        .into_par_iter()
        .progress_with(bar)
        .map(move |(path, output)| -> Result<_> {
            let conversion = convert_file(&path, &output, &layout)
                .with_context(|| format!("could not convert {}", path.display()))?;
            Ok(ConvertedImage::new(path, output, conversion))
        }))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn output_path_replaces_extension() -> Result<()> {
        let out = output_path_for(Path::new("/data/FLUKE0001.IS2"), Path::new("/tmp/out"))?;
        assert_eq!(out, PathBuf::from("/tmp/out/FLUKE0001.png"));

        let out = output_path_for(Path::new("capture"), Path::new("pngs"))?;
        assert_eq!(out, PathBuf::from("pngs/capture.png"));

        let out = output_path_for(Path::new("site.a.IS2"), Path::new("pngs"))?;
        assert_eq!(out, PathBuf::from("pngs/site.a.png"));

        assert!(output_path_for(Path::new("/"), Path::new("pngs")).is_err());
        Ok(())
    }

    #[test]
    fn converted_image_json() -> Result<()> {
        let image = ConvertedImage {
            path: "a.is2".into(),
            output: "out/a.png".into(),
            extrema: Extrema { min: 3, max: 40 },
        };
        assert_eq!(
            serde_json::to_string(&image)?,
            r#"{"path":"a.is2","output":"out/a.png","min":3,"max":40}"#
        );
        Ok(())
    }

    #[test]
    fn batch_converts_and_reports_failures() -> Result<()> {
        let layout = ContainerLayout::new(2, 2, 2)?;
        let dir = tempfile::tempdir()?;
        let good = dir.path().join("good.is2");
        let bad = dir.path().join("bad.is2");
        fs::write(&good, [0u8, 0, 0, 1, 0, 2, 0, 3, 0, 4])?;
        fs::write(&bad, [0u8; 5])?;

        let out_dir = dir.path().join("out");
        fs::create_dir(&out_dir)?;

        let results: Vec<_> = convert_paths_par(vec![good.clone(), bad], &out_dir, layout)?
            .collect();
        assert_eq!(results.len(), 2);

        let (ok, failed): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.is_ok());
        assert_eq!(ok.len(), 1);
        assert_eq!(failed.len(), 1);

        let converted = ok.into_iter().next().unwrap()?;
        assert_eq!(converted.path, good);
        assert_eq!(converted.output, out_dir.join("good.png"));
        assert_eq!(converted.extrema, Extrema { min: 1, max: 4 });
        assert!(converted.output.exists());
        assert!(!out_dir.join("bad.png").exists());
        Ok(())
    }

    #[test]
    fn same_stem_in_batch_is_rejected() -> Result<()> {
        let layout = ContainerLayout::new(2, 2, 2)?;
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("a"))?;
        fs::create_dir(dir.path().join("b"))?;
        let first = dir.path().join("a").join("x.is2");
        let second = dir.path().join("b").join("x.is2");
        fs::write(&first, [0u8, 0, 0, 1, 0, 2, 0, 3, 0, 4])?;
        fs::write(&second, [0u8, 0, 0, 5, 0, 6, 0, 7, 0, 8])?;

        let out_dir = dir.path().join("out");
        fs::create_dir(&out_dir)?;

        let err = match convert_paths_par(vec![first.clone(), second.clone()], &out_dir, layout) {
            Ok(_) => panic!("colliding outputs were accepted"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains(&first.display().to_string()));
        assert!(err.contains(&second.display().to_string()));
        assert_eq!(fs::read_dir(&out_dir)?.count(), 0);
        Ok(())
    }

    #[test]
    fn plan_outputs_ignores_extension_case() -> Result<()> {
        let out_dir = Path::new("out");
        assert!(plan_outputs(vec!["x.is2".into(), "x.IS2".into()], out_dir).is_err());
        assert!(plan_outputs(vec!["x.is2".into(), "X.is2".into()], out_dir).is_err());

        let jobs = plan_outputs(vec!["x.is2".into(), "y.is2".into()], out_dir)?;
        assert_eq!(
            jobs,
            vec![
                (PathBuf::from("x.is2"), PathBuf::from("out/x.png")),
                (PathBuf::from("y.is2"), PathBuf::from("out/y.png")),
            ]
        );
        Ok(())
    }
}
