//! Layout checks for the mirrored unit tests
//!
//! Every module under `src/` other than `lib.rs`, `main.rs` and `mod.rs`
//! files has a file at the same relative path under `tests/unit/`, and every
//! file there mirrors a module. `main.rs` and `mod.rs` files in the test
//! trees only declare modules; every other test file holds a `#[test]`.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    fn is_module_root(relative: &str) -> bool {
        let file_name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(file_name, "lib.rs" | "main.rs" | "mod.rs")
    }

    /// Relative paths of the `.rs` files and directories below `base`
    fn layout(base: &Path) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Err(error) = walk(base, base, &mut paths) {
            assert!(!base.exists(), "Failed to read {}: {error}", base.display());
        }
        paths
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let modules = layout(Path::new(SRC_DIR));
        let unit_tests = layout(Path::new(UNIT_DIR));

        let missing: Vec<String> = modules
            .iter()
            .filter(|path| !is_module_root(path) && !unit_tests.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Modules without a mirrored unit test file:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_mirrors_a_module() {
        let modules = layout(Path::new(SRC_DIR));
        let unit_tests = layout(Path::new(UNIT_DIR));

        let orphaned: Vec<String> = unit_tests
            .iter()
            .filter(|path| !is_module_root(path) && !modules.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a matching module:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let tests_dir = Path::new("tests");
        let empty: Vec<String> = layout(tests_dir)
            .into_iter()
            .filter(|path| Path::new(path).extension().is_some_and(|ext| ext == "rs"))
            .filter(|path| !is_module_root(path))
            .filter(|path| {
                fs::read_to_string(tests_dir.join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
