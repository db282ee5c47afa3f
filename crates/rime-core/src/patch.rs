//! Patch document text manipulation
//!
//! Rime patch files are YAML, but this module deliberately never parses
//! them. The injection point is a closed, tool-controlled contract
//! (`patch:` at top level, `schema_list:` directly under it), so a single
//! marker-anchored splice preserves all unrelated content and formatting
//! byte-for-byte. A structured merge is explicitly out of scope.

use std::borrow::Cow;

/// Base name reserved for the patch-injection target file.
pub const RESERVED_STEM: &str = "default.custom";

/// Destination file name of the generated base patch.
pub const PATCH_FILE_NAME: &str = "default.custom.yaml";

/// Candidate window size written into the generated base patch.
pub const MENU_PAGE_SIZE: u32 = 9;

const PATCH_MARKER: &str = "patch:";
const SCHEMA_LIST_MARKER: &str = "schema_list:";

/// Render the indented `schema_list` block, one entry per schema in
/// selection order, without a trailing newline.
pub fn schema_list_block(schemas: &[String]) -> String {
    let entries: Vec<String> = schemas
        .iter()
        .map(|schema| format!("    - schema: {schema}"))
        .collect();
    format!("  {SCHEMA_LIST_MARKER}\n{}", entries.join("\n"))
}

/// Splice a `schema_list` block into patch-document text.
///
/// Returns the input untouched when `schemas` is empty or the document
/// already declares a `schema_list:` anywhere; that skip is what makes
/// repeated syncs byte-identical. Otherwise the block lands immediately
/// after the first literal `patch:` marker, or under a freshly prepended
/// `patch:` header when the document has none.
///
/// Known limitation: "first literal occurrence" does not distinguish a
/// `patch:` inside a comment or string.
pub fn inject_schema_list<'a>(content: &'a str, schemas: &[String]) -> Cow<'a, str> {
    if schemas.is_empty() || content.contains(SCHEMA_LIST_MARKER) {
        return Cow::Borrowed(content);
    }

    let block = schema_list_block(schemas);
    if content.contains(PATCH_MARKER) {
        Cow::Owned(content.replacen(PATCH_MARKER, &format!("{PATCH_MARKER}\n{block}"), 1))
    } else {
        Cow::Owned(format!("{PATCH_MARKER}\n{block}\n{content}"))
    }
}

/// Render a fresh base patch document: menu page size plus the full
/// schema list. Written verbatim as `default.custom.yaml` right after a
/// bundle install; never merged with an existing file.
pub fn base_patch_document(schemas: &[String]) -> String {
    format!(
        "patch:\n  \"menu/page_size\": {MENU_PAGE_SIZE}\n{}\n",
        schema_list_block(schemas)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn schemas(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_block_inserted_directly_after_patch_marker() {
        let out = inject_schema_list("patch:\n  foo: 1\n", &schemas(&["luna_pinyin"]));
        assert_eq!(
            out,
            "patch:\n  schema_list:\n    - schema: luna_pinyin\n  foo: 1\n"
        );
    }

    #[test]
    fn test_missing_patch_marker_prepends_header() {
        let out = inject_schema_list("  foo: 1\n", &schemas(&["rime_ice"]));
        assert_eq!(out, "patch:\n  schema_list:\n    - schema: rime_ice\n  foo: 1\n");
    }

    #[rstest]
    #[case::existing_list("patch:\n  schema_list:\n    - schema: old\n")]
    #[case::list_anywhere("# schema_list: kept\npatch:\n  foo: 1\n")]
    fn test_existing_schema_list_skips_injection(#[case] content: &str) {
        let out = inject_schema_list(content, &schemas(&["rime_ice"]));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, content);
    }

    #[test]
    fn test_empty_selection_is_a_no_op() {
        let content = "patch:\n  foo: 1\n";
        let out = inject_schema_list(content, &[]);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, content);
    }

    #[test]
    fn test_injection_is_idempotent() {
        let selection = schemas(&["rime_ice", "double_pinyin_flypy"]);
        let once = inject_schema_list("patch:\n  foo: 1\n", &selection).into_owned();
        let twice = inject_schema_list(&once, &selection);
        assert_eq!(*twice, once);
    }

    #[test]
    fn test_only_first_patch_marker_is_spliced() {
        let content = "patch:\n  a: 1\n# patch: commented repeat\n";
        let out = inject_schema_list(content, &schemas(&["rime_ice"]));
        assert_eq!(out.matches("schema_list:").count(), 1);
        assert!(out.starts_with("patch:\n  schema_list:\n"));
        assert!(out.ends_with("# patch: commented repeat\n"));
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let block = schema_list_block(&schemas(&["b", "a", "c"]));
        assert_eq!(
            block,
            "  schema_list:\n    - schema: b\n    - schema: a\n    - schema: c"
        );
    }

    #[test]
    fn test_base_patch_is_valid_yaml_with_expected_values() {
        let doc = base_patch_document(&schemas(&["rime_ice", "double_pinyin_flypy"]));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&doc).unwrap();
        let patch = &parsed["patch"];
        assert_eq!(patch["menu/page_size"], serde_yaml::Value::from(9));
        assert_eq!(patch["schema_list"][0]["schema"], "rime_ice");
        assert_eq!(patch["schema_list"][1]["schema"], "double_pinyin_flypy");
    }
}
