#[cfg(test)]
mod unit {
    use crate::{logging, paths, PathResolver};
    use std::path::PathBuf;
    use std::thread;

    #[test]
    fn logging_init_is_repeatable() {
        logging::init();
        assert!(!logging::init_with("karma_paths=debug"));
        tracing::warn!("subscriber installed");
    }

    #[test]
    fn concurrent_resolution_with_different_bases() {
        let cwd = std::env::current_dir().unwrap();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let base = format!("/work/project{i}");
                    for _ in 0..200 {
                        let got = paths::resolve_full_path("src/../test/spec.js", &base).unwrap();
                        assert_eq!(got, paths::full_path(&format!("{base}/test/spec.js")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(std::env::current_dir().unwrap(), cwd);
    }

    #[test]
    fn resolver_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let web = tmp.path().join("Web");
        std::fs::create_dir_all(&web).unwrap();
        std::fs::write(web.join("karma.conf.js"), "module.exports = function (config) {};").unwrap();

        let r = PathResolver::default();
        let base = tmp.path().to_string_lossy().into_owned();
        let full = r.resolve_full_path("Web/./karma.conf.js", &base).unwrap();
        assert!(r.is_karma_config_file(&full.to_string_lossy()));
        assert!(r.is_in_directory(&full.to_string_lossy(), &web.to_string_lossy()));

        let canonical = r.canonical_path(&full.to_string_lossy()).unwrap();
        assert!(r.paths_equal(&canonical.to_string_lossy(), &full.to_string_lossy()));

        let rel = r.relative_path(&base, &canonical.to_string_lossy(), true);
        assert_eq!(PathBuf::from(rel), PathBuf::from("Web").join("karma.conf.js"));

        let text = r.read_file_text(&canonical, None).unwrap();
        assert!(text.starts_with("module.exports"));
    }
}

#[cfg(test)]
mod props {
    use crate::paths;
    use proptest::prelude::*;

    fn cases() -> u32 {
        if cfg!(feature = "proptests") { 512 } else { 64 }
    }

    fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            6 => "[A-Za-z0-9_]{1,8}",
            1 => Just("..".to_string()),
            1 => Just(".".to_string()),
        ]
    }

    fn relative() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 1..6).prop_map(|s| s.join("/"))
    }

    fn absolute() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Za-z0-9_]{1,8}", 1..6).prop_map(|s| format!("/{}", s.join("/")))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(cases()))]

        #[test]
        fn resolve_is_idempotent(path in relative(), base in absolute()) {
            let once = paths::resolve_full_path(&path, &base).unwrap();
            let twice = paths::resolve_full_path(&once.to_string_lossy(), &base).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn equal_to_itself_under_case_changes(path in absolute()) {
            prop_assert!(paths::paths_equal(&path, &path));
            prop_assert!(paths::paths_equal(&path, &path.to_uppercase()));
            prop_assert!(paths::paths_equal(&path.to_lowercase(), &path));
        }

        #[test]
        fn local_relative_paths_never_climb(base in absolute(), target in absolute()) {
            let rel = paths::relative_path(&format!("{base}/"), &target, true);
            prop_assert!(!rel.starts_with(".."));
        }
    }
}
