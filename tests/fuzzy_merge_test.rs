//! カタログ更新時の fuzzy マージに関するテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::collections::BTreeMap;

use googletest::prelude::*;
use po_fuzzy_merge::config::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
use po_fuzzy_merge::{
    Matcher,
    MessageShape,
    TranslationRecord,
    build_matcher,
    merge,
    similarity,
};
use rstest::*;
use tempfile::TempDir;

/// Previously translated catalog.
fn existing_catalog() -> Vec<TranslationRecord> {
    vec![
        TranslationRecord::singular("Open the file", "Ouvrir le fichier")
            .with_comments(["Toolbar button"]),
        TranslationRecord::contextual("menu", "Quit", "Quitter"),
        TranslationRecord::plural("%d file deleted", "%d files deleted", [
            "%d fichier supprimé",
            "%d fichiers supprimés",
        ])
        .with_flags(["c-format"]),
    ]
}

/// Picks the best scoring existing record for `new`, as a catalog merge driver would.
fn best_match<'a>(
    matcher: Matcher,
    new: &TranslationRecord,
    existing: &'a [TranslationRecord],
) -> Option<&'a TranslationRecord> {
    existing
        .iter()
        .filter_map(|candidate| {
            matcher.evaluate(&new.key(), &candidate.key()).score().map(|score| (score, candidate))
        })
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, candidate)| candidate)
}

#[rstest]
fn carries_translation_over_to_edited_msgid() {
    let existing = existing_catalog();
    let new = TranslationRecord::singular("Open the files", "").with_comments(["stale"]);

    let candidate = best_match(Matcher::default(), &new, &existing).unwrap();
    let merged = merge(&new, candidate);

    assert_that!(merged.msgid(), eq("Open the files"));
    assert_that!(merged.message.msgstr(), some(eq("Ouvrir le fichier")));
    assert_that!(merged.comments, elements_are![eq("Toolbar button")]);
    assert_that!(merged.is_fuzzy(), eq(true));
}

#[rstest]
fn plural_candidate_collapses_into_singular_entry() {
    let existing = existing_catalog();
    let new = TranslationRecord::contextual("status", "%d file deleted.", "");

    let candidate = best_match(Matcher::default(), &new, &existing).unwrap();
    let merged = merge(&new, candidate);

    assert_that!(merged.shape(), eq(MessageShape::Contextual));
    assert_that!(merged.msgctxt(), some(eq("status")));
    assert_that!(merged.message.msgstr(), some(eq("%d fichier supprimé")));
    assert_that!(merged.flags, elements_are![eq("fuzzy")]);
}

#[rstest]
fn singular_candidate_broadcasts_into_plural_entry() {
    let existing = existing_catalog();
    let new = TranslationRecord::plural("Open the file", "Open the files", ["", "", ""]);

    let candidate = best_match(Matcher::default(), &new, &existing).unwrap();
    let merged = merge(&new, candidate);

    let expected: BTreeMap<u32, String> =
        (0..3).map(|i| (i, "Ouvrir le fichier".to_string())).collect();
    assert_eq!(merged.message.msgstr_plural(), Some(&expected));
    assert_that!(merged.msgid_plural(), some(eq("Open the files")));
}

#[rstest]
fn unrelated_entry_finds_no_candidate() {
    let existing = existing_catalog();
    let new = TranslationRecord::singular("xyz", "");

    assert_that!(best_match(build_matcher(0.5), &new, &existing), none());
}

#[rstest]
fn context_is_ignored_when_scoring() {
    let quit_elsewhere = TranslationRecord::contextual("dialog", "Quit", "");
    let existing = existing_catalog();

    let candidate = best_match(build_matcher(1.0), &quit_elsewhere, &existing).unwrap();

    assert_that!(candidate.msgctxt(), some(eq("menu")));
    assert_that!(similarity(&quit_elsewhere.key(), &candidate.key()), eq(1.0));
}

#[rstest]
fn merged_identity_matches_new_for_all_shape_pairs() {
    let build = |shape: MessageShape, msgid: &str| match shape {
        MessageShape::Singular => TranslationRecord::singular(msgid, "one"),
        MessageShape::Contextual => TranslationRecord::contextual("ctx", msgid, "one"),
        MessageShape::Plural => TranslationRecord::plural(msgid, "plural", ["one", "many"]),
        MessageShape::ContextualPlural => {
            TranslationRecord::contextual_plural("ctx", msgid, "plural", ["one", "many"])
        }
    };

    for new_shape in MessageShape::ALL {
        for existing_shape in MessageShape::ALL {
            let new = build(new_shape, "Save");
            let existing = build(existing_shape, "Save as").with_comments(["kept"]);

            let merged = merge(&new, &existing);

            assert_eq!(merged.key(), new.key(), "{new_shape:?} <- {existing_shape:?}");
            assert_eq!(merged.comments, vec!["kept".to_string()]);
            assert!(merged.is_fuzzy());
        }
    }
}

#[rstest]
fn workspace_settings_drive_the_matcher() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"threshold": 0.99}"#).unwrap();

    let mut manager = ConfigManager::new();
    manager.load_settings(Some(temp_dir.path().to_path_buf())).unwrap();
    let matcher = manager.matcher().unwrap();

    let existing = existing_catalog();
    let new = TranslationRecord::singular("Open the files", "");

    assert_that!(best_match(matcher, &new, &existing), none());
}
