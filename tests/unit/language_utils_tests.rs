/*!
 * Tests for language utility functions
 */

use mtbridge::language_utils::{
    default_supported_pairs, describe_pairs, validate_language_code, Language,
    LanguageEntry, LanguagePair, LanguageTable,
};

#[test]
fn test_language_codes_shouldMatchOpusMtCodes() {
    assert_eq!(Language::English.code(), "en");
    assert_eq!(Language::Hebrew.code(), "he");
    assert_eq!(Language::Russian.code(), "ru");
}

#[test]
fn test_defaultTable_shouldContainBuiltInLanguages() {
    let table = LanguageTable::default();
    assert_eq!(table.len(), 3);
    assert_eq!(table.code_for("English"), Some("en"));
    assert_eq!(table.code_for("Hebrew"), Some("he"));
    assert_eq!(table.code_for("Russian"), Some("ru"));
    assert_eq!(table.code_for("english"), None);
}

#[test]
fn test_table_withCustomEntries_shouldLookUpExactNames() {
    let table = LanguageTable::new(vec![LanguageEntry::new("Arabic", "ar")]);
    assert!(table.contains("Arabic"));
    assert!(!table.contains("Hebrew"));
}

#[test]
fn test_defaultPairs_shouldBeEnglishHebrewAndHebrewRussian() {
    let pairs = default_supported_pairs();
    assert_eq!(
        pairs,
        vec![
            LanguagePair::new("English", "Hebrew"),
            LanguagePair::new("Hebrew", "Russian"),
        ]
    );
}

#[test]
fn test_pair_matches_shouldBeDirectionSensitive() {
    let pair = LanguagePair::from((Language::English, Language::Hebrew));
    assert!(pair.matches("English", "Hebrew"));
    assert!(!pair.matches("Hebrew", "English"));
}

#[test]
fn test_describePairs_withSinglePair_shouldNotAddSeparator() {
    assert_eq!(describe_pairs(&[LanguagePair::new("French", "German")]), "'French' & 'German'");
}

#[test]
fn test_validateLanguageCode_shouldAcceptOnlyIso6391() {
    assert!(validate_language_code("he").is_ok());
    assert!(validate_language_code("heb").is_err());
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("").is_err());
}
