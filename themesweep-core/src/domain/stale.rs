// themesweep-core/src/domain/stale.rs
//
// Content-hashed output filenames change on every rebuild (`name-<hash>.ext`),
// so after an incremental rebuild the previous hash's file is still on disk.
// This matcher identifies those leftovers from the current live-file set and
// the actual directory listing.

use regex::Regex;
use std::collections::BTreeSet;

/// Identifies on-disk files that are obsolete hashed variants of files the
/// manifest currently considers live.
///
/// Per live file, everything before the last `-`-delimited segment is taken
/// as the name stem (the hash occupies the final segment) and everything
/// after the final `.` as the extension; a directory entry is stale iff it
/// matches `<stem>-<anything>.<extension>` case-insensitively and is not
/// itself live.
///
/// Known limitation: stems of multi-hyphen filenames can cross-match a
/// different file that shares a long common prefix
/// (`my-component-abc123.js` matches against `my-component-other-def456.js`).
pub fn stale_variants(live_files: &BTreeSet<String>, assets_listing: &[String]) -> BTreeSet<String> {
    let mut stale = BTreeSet::new();

    for file in live_files {
        let Some(pattern) = variant_pattern(file) else {
            continue;
        };

        for asset_file in assets_listing {
            if pattern.is_match(asset_file) && !live_files.contains(asset_file) {
                stale.insert(asset_file.clone());
            }
        }
    }

    stale
}

/// Builds the variant pattern for one live file.
///
/// A name with no `-` yields an empty stem and an overly broad pattern; a
/// name with no `.` uses the whole name as its extension segment. Both are
/// kept as-is. The `.` before the extension matches any character, and the
/// match is unanchored.
fn variant_pattern(file: &str) -> Option<Regex> {
    let segments: Vec<&str> = file.split('-').collect();
    let stem = segments[..segments.len() - 1].join("-");
    let extension = file.rsplit('.').next().unwrap_or(file);

    Regex::new(&format!(
        "(?i){}-(.*).{}",
        regex::escape(&stem),
        regex::escape(extension)
    ))
    .ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn live(files: &[&str]) -> BTreeSet<String> {
        files.iter().map(|f| f.to_string()).collect()
    }

    fn listing(files: &[&str]) -> Vec<String> {
        files.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_old_hash_variant_is_stale() {
        let stale = stale_variants(
            &live(&["main-abc123.js"]),
            &listing(&["main-abc123.js", "main-def456.js", "other-xyz.js"]),
        );

        assert_eq!(stale, live(&["main-def456.js"]));
    }

    #[test]
    fn test_current_file_is_never_stale() {
        let stale = stale_variants(&live(&["main-abc123.js"]), &listing(&["main-abc123.js"]));

        assert!(stale.is_empty());
    }

    #[test]
    fn test_live_sibling_matching_the_stem_is_kept() {
        // main-def456.js matches main's pattern but is itself live
        let stale = stale_variants(
            &live(&["main-abc123.js", "main-def456.js"]),
            &listing(&["main-abc123.js", "main-def456.js"]),
        );

        assert!(stale.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let stale = stale_variants(
            &live(&["main-abc123.js"]),
            &listing(&["MAIN-DEF456.JS", "main-abc123.js"]),
        );

        assert_eq!(stale, live(&["MAIN-DEF456.JS"]));
    }

    #[test]
    fn test_dedup_across_live_files() {
        // Le même fichier périmé peut matcher plusieurs patterns
        let stale = stale_variants(
            &live(&["app-abc.js", "app-main-def.js"]),
            &listing(&["app-main-old.js"]),
        );

        assert_eq!(stale, live(&["app-main-old.js"]));
    }

    #[test]
    fn test_dashless_name_yields_broad_pattern() {
        // "plain.js" has no dash: empty stem, pattern matches any dashed .js
        // name in the listing. Inherited behavior, kept on purpose.
        let stale = stale_variants(
            &live(&["plain.js"]),
            &listing(&["plain.js", "unrelated-abc.js"]),
        );

        assert_eq!(stale, live(&["unrelated-abc.js"]));
    }

    #[test]
    fn test_dotless_name_uses_whole_name_as_extension() {
        // "LICENSE" has no dot: the extension segment is the full name. The
        // pattern still requires one arbitrary character before it, so a bare
        // "old-LICENSE" does not match while "old-2.LICENSE" does.
        let stale = stale_variants(
            &live(&["LICENSE"]),
            &listing(&["LICENSE", "old-LICENSE", "old-2.LICENSE", "notes.txt"]),
        );

        assert_eq!(stale, live(&["old-2.LICENSE"]));
    }

    #[test]
    fn test_shared_prefix_cross_match_is_documented_behavior() {
        // "widget-abc123.js" stems to "widget", which also matches the old
        // variant of the hyphenated widget-extra component.
        let stale = stale_variants(
            &live(&["widget-abc123.js"]),
            &listing(&["widget-abc123.js", "widget-extra-old111.js"]),
        );

        assert_eq!(stale, live(&["widget-extra-old111.js"]));
    }

    #[test]
    fn test_unrelated_extension_is_ignored() {
        let stale = stale_variants(
            &live(&["main-abc123.js"]),
            &listing(&["main-def456.css", "main-def456.js"]),
        );

        assert_eq!(stale, live(&["main-def456.js"]));
    }
}
