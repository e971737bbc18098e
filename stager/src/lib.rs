use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Outcome of one staging run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StageReport {
    pub copied: usize,
    pub skipped: usize,
}

/// Assemble a distributable folder: recreate `out_dir` from scratch, then copy
/// every manifest path that exists under `src_root` into it, preserving the
/// relative structure. Missing sources are skipped silently; that a file is
/// optional is the manifest's business, not an error.
pub fn stage(manifest: &[&str], src_root: &Path, out_dir: &Path) -> Result<StageReport> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir)
            .with_context(|| format!("Failed to clear '{}'", out_dir.display()))?;
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create '{}'", out_dir.display()))?;

    let mut report = StageReport::default();

    for rel_path in manifest {
        let src = src_root.join(rel_path);
        if !src.exists() {
            report.skipped += 1;
            continue;
        }

        let dest = out_dir.join(rel_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        fs::copy(&src, &dest)
            .with_context(|| format!("Failed to copy '{}'", src.display()))?;
        report.copied += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh scratch directory per test; std-only stand-in for a tempdir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "stager-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn copies_existing_and_skips_missing() {
        let root = scratch("skip-missing");
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), b"hello").unwrap();

        let out = root.join("dist");
        let report = stage(&["a.txt", "missing.txt"], &src, &out).unwrap();

        assert_eq!(report, StageReport { copied: 1, skipped: 1 });
        assert_eq!(fs::read(out.join("a.txt")).unwrap(), b"hello");
        assert!(!out.join("missing.txt").exists());

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn preserves_nested_structure() {
        let root = scratch("nested");
        let src = root.join("src");
        fs::create_dir_all(src.join("assets/fonts")).unwrap();
        fs::write(src.join("assets/fonts/hud.ttf"), b"font").unwrap();
        fs::write(src.join("config.toml"), b"cfg").unwrap();

        let out = root.join("dist");
        let report = stage(&["config.toml", "assets/fonts/hud.ttf"], &src, &out).unwrap();

        assert_eq!(report.copied, 2);
        assert!(out.join("assets/fonts/hud.ttf").exists());

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn output_dir_is_rebuilt_clean() {
        let root = scratch("clean");
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), b"new").unwrap();

        let out = root.join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.txt"), b"old").unwrap();

        stage(&["a.txt"], &src, &out).unwrap();

        assert!(out.join("a.txt").exists());
        assert!(!out.join("stale.txt").exists(), "stale file survived rebuild");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn empty_manifest_yields_an_empty_dir() {
        let root = scratch("empty");
        let src = root.join("src");
        fs::create_dir_all(&src).unwrap();

        let out = root.join("dist");
        let report = stage(&[], &src, &out).unwrap();

        assert_eq!(report, StageReport::default());
        assert!(out.exists());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);

        let _ = fs::remove_dir_all(root);
    }
}
