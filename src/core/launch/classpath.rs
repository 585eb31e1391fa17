// ─── Launch Assembly ───
// Composes the final JVM argument vector: tuning flags, native library
// path, classpath, main class, substituted game arguments.

use std::path::{Path, PathBuf};

use crate::core::config::path_str;

/// Fixed JVM tuning flags, always first in the argument vector.
const JVM_TUNING_FLAGS: [&str; 5] = [
    "-Xmx1G",
    "-XX:+UseConcMarkSweepGC",
    "-XX:+CMSIncrementalMode",
    "-XX:-UseAdaptiveSizePolicy",
    "-Xmn128M",
];

/// Platform-specific Java classpath separator.
///
/// Uses `;` on Windows, `:` on Linux/macOS.
pub fn get_classpath_separator() -> &'static str {
    if cfg!(target_os = "windows") {
        ";"
    } else {
        ":"
    }
}

/// Join classpath entries plus the version's primary archive.
pub fn build_classpath(entries: &[PathBuf], version_jar: &Path) -> String {
    let mut parts: Vec<String> = entries.iter().map(|p| path_str(p)).collect();
    parts.push(path_str(version_jar));
    parts.join(get_classpath_separator())
}

/// Assemble the full JVM argument vector.
///
/// Order is fixed: tuning flags, library search path, classpath, main class,
/// game arguments. The vector is opaque to the caller — nothing here
/// interprets argument semantics beyond ordering.
pub fn assemble_arguments(
    natives_dir: &Path,
    classpath: &str,
    main_class: &str,
    game_args: &[String],
) -> Vec<String> {
    let mut args: Vec<String> = JVM_TUNING_FLAGS.iter().map(|s| s.to_string()).collect();
    args.push(format!("-Djava.library.path={}", path_str(natives_dir)));
    args.push("-cp".to_string());
    args.push(classpath.to_string());
    args.push(main_class.to_string());
    args.extend(game_args.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classpath_joins_entries_and_appends_version_jar() {
        let entries = vec![
            PathBuf::from("/mc/libraries/a/a-1.0.jar"),
            PathBuf::from("/mc/libraries/b/b-2.0.jar"),
        ];
        let classpath = build_classpath(&entries, Path::new("/mc/versions/1.6.4/1.6.4.jar"));

        let sep = get_classpath_separator();
        assert_eq!(
            classpath,
            format!(
                "/mc/libraries/a/a-1.0.jar{sep}/mc/libraries/b/b-2.0.jar{sep}/mc/versions/1.6.4/1.6.4.jar"
            )
        );
    }

    #[test]
    fn classpath_with_no_libraries_still_carries_the_version_jar() {
        let classpath = build_classpath(&[], Path::new("/mc/versions/1.6.4/1.6.4.jar"));
        assert_eq!(classpath, "/mc/versions/1.6.4/1.6.4.jar");
    }

    #[test]
    fn argument_vector_has_fixed_order() {
        let game_args = vec!["--username".to_string(), "Alice".to_string()];
        let args = assemble_arguments(
            Path::new("/mc/versions/1.6.4/natives"),
            "/mc/a.jar:/mc/b.jar",
            "net.minecraft.client.main.Main",
            &game_args,
        );

        assert_eq!(&args[..5], &JVM_TUNING_FLAGS.map(String::from));
        assert_eq!(args[5], "-Djava.library.path=/mc/versions/1.6.4/natives");
        assert_eq!(args[6], "-cp");
        assert_eq!(args[7], "/mc/a.jar:/mc/b.jar");
        assert_eq!(args[8], "net.minecraft.client.main.Main");
        assert_eq!(&args[9..], &["--username", "Alice"]);
    }
}
