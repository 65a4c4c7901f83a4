use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| Regex::new(r"_v(\d+)\.md$").unwrap())
}

/// Next unused version number among `<base>_v<N>.md` files in `dir`.
///
/// The counter is shared across all document bases so one pipeline run gets
/// one suffix. Non-numeric or malformed suffixes are ignored rather than
/// erroring. Returns 1 when the directory is empty or missing.
pub fn next_version(dir: &Path) -> u32 {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 1;
    };

    let mut max = 0u32;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(caps) = version_re().captures(name) {
            if let Ok(n) = caps[1].parse::<u32>() {
                max = max.max(n);
            }
        }
    }
    max + 1
}
