//! Integration tests for page-object generation
//!
//! These tests run the full pipeline against the markup fixtures.

use pagegen::diagnostics::Level;
use pagegen::{
    Config, LocatorStrategy, MarkupTree, OutputFormat, PageAssembler, PageObjectGenerator,
    Platform, RecordingDiagnostics, SilentDiagnostics,
};
use std::path::{Path, PathBuf};

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn config_for(output: &Path) -> Config {
    Config {
        output: output.to_path_buf(),
        ..Config::default()
    }
}

// ============================================================================
// Assembly
// ============================================================================

#[test]
fn test_android_login_layout() {
    let path = fixtures_path().join("android/Resources/layout/Login.axml");
    let page = PageAssembler::new(Platform::Android.rules(), &SilentDiagnostics)
        .assemble_file(&path)
        .expect("Failed to assemble Login.axml");

    assert_eq!(page.page_name, "Login");
    assert_eq!(page.platform, "Android");

    let fields: Vec<_> = page.elements.iter().map(|e| e.field_name.as_str()).collect();
    assert_eq!(fields, vec!["Company logo", "UserName", "Password", "SubmitButton"]);

    let trait_element = page.trait_element.as_ref().expect("Login should have a trait");
    assert_eq!(trait_element.locator_strategy, LocatorStrategy::AndroidContentDesc);
    assert_eq!(trait_element.wrapper_type, "AndroidElement");

    let submit = &page.elements[3];
    assert_eq!(submit.wrapper_type, "Button");
    assert_eq!(submit.locator_strategy, LocatorStrategy::Id);
    assert_eq!(submit.locator_value, "submitButton");
}

#[test]
fn test_android_layout_without_locators() {
    let path = fixtures_path().join("android/Resources/layout/Empty.axml");
    let page = PageAssembler::new(Platform::Android.rules(), &SilentDiagnostics)
        .assemble_file(&path)
        .expect("Android accepts any root");

    assert!(page.elements.is_empty());
    assert!(page.trait_element.is_none());
}

#[test]
fn test_windows_main_page() {
    let path = fixtures_path().join("windows/Views/MainPage.xaml");
    let tree = MarkupTree::load(&path).expect("Failed to parse MainPage.xaml");
    let page = PageAssembler::new(Platform::Windows.rules(), &SilentDiagnostics)
        .assemble(&path, &tree)
        .expect("MainPage is a page");

    let summary: Vec<_> = page
        .elements
        .iter()
        .map(|e| (e.wrapper_type.as_str(), e.locator_strategy, e.locator_value.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("ToggleSwitch", LocatorStrategy::AutomationId, "DarkModeToggle"),
            ("Slider", LocatorStrategy::AutomationId, "VolumeSlider"),
            ("ComboBox", LocatorStrategy::Name, "languagePicker"),
            ("Button", LocatorStrategy::Name, "saveButton"),
        ]
    );
    assert_eq!(
        page.trait_element.as_ref().map(|t| t.field_name.as_str()),
        Some("DarkModeToggle")
    );
}

// ============================================================================
// Full runs
// ============================================================================

#[test]
fn test_windows_run_skips_user_controls() {
    let output = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_for(output.path());
    let diagnostics = RecordingDiagnostics::new();

    let summary = PageObjectGenerator::new(&config, Platform::Windows, &diagnostics)
        .run(&fixtures_path().join("windows"))
        .expect("Run should succeed");

    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.generated, vec![output.path().join("MainPage.cs")]);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].ends_with("ProfileCard.xaml"));
    assert!(!output.path().join("ProfileCard.cs").exists());

    let source = std::fs::read_to_string(output.path().join("MainPage.cs")).unwrap();
    assert!(source.contains("public class MainPage : BasePage"));
    assert!(source.contains("Trait => ByExtensions.AutomationId(\"DarkModeToggle\")"));
    assert!(source.contains("public ComboBox LanguagePicker"));

    let warnings = diagnostics.messages(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("as a page was not detected"));
}

#[test]
fn test_windows_run_reads_utf16_pages() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let output = tempfile::tempdir().expect("Failed to create temp dir");

    // Visual Studio saves XAML as UTF-16LE with a byte order mark
    let page = r#"<?xml version="1.0" encoding="utf-16"?>
<Page xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
      xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml">
    <Button x:Name="SaveButton" />
</Page>"#;
    let mut bytes = vec![0xFF, 0xFE];
    for unit in page.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    std::fs::write(input.path().join("SettingsPage.xaml"), bytes).unwrap();

    let config = config_for(output.path());
    let diagnostics = RecordingDiagnostics::new();
    let summary = PageObjectGenerator::new(&config, Platform::Windows, &diagnostics)
        .run(input.path())
        .expect("Run should succeed");

    assert_eq!(summary.generated, vec![output.path().join("SettingsPage.cs")]);
    assert!(summary.skipped.is_empty());
    assert!(diagnostics.messages(Level::Warn).is_empty());

    let source = std::fs::read_to_string(output.path().join("SettingsPage.cs")).unwrap();
    assert!(source.contains("public Button SaveButton"));
}

#[test]
fn test_android_run_with_json_output() {
    let output = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config {
        format: OutputFormat::Json,
        ..config_for(output.path())
    };

    let summary = PageObjectGenerator::new(&config, Platform::Android, &SilentDiagnostics)
        .run(&fixtures_path().join("android"))
        .expect("Run should succeed");

    assert_eq!(summary.generated.len(), 2);

    let json = std::fs::read_to_string(output.path().join("Login.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["platform"], "Android");
    assert_eq!(value["base_wrapper_type"], "AndroidElement");
    assert_eq!(value["elements"].as_array().map(|a| a.len()), Some(4));

    let empty = std::fs::read_to_string(output.path().join("Empty.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&empty).unwrap();
    assert!(value["trait"].is_null());
}

#[test]
fn test_custom_template() {
    let output = tempfile::tempdir().expect("Failed to create temp dir");
    let template = output.path().join("kotlin.template");
    std::fs::write(
        &template,
        "package {{ namespace }}\n\nclass {{ page }} {\n{{#elements}}\n    val {{ name }} = by{{ by }}(\"{{ value }}\")\n{{/elements}}\n}\n",
    )
    .unwrap();

    let config = Config {
        template: Some(template),
        extension: "kt".to_string(),
        namespace: "com.example.pages".to_string(),
        output: output.path().join("pages"),
        ..Config::default()
    };

    PageObjectGenerator::new(&config, Platform::Android, &SilentDiagnostics)
        .run(&fixtures_path().join("android"))
        .expect("Run should succeed");

    let source = std::fs::read_to_string(output.path().join("pages/Login.kt")).unwrap();
    assert_eq!(
        source,
        "package com.example.pages\n\nclass Login {\n    val Company logo = byAndroidContentDesc(\"Company logo\")\n    val UserName = byId(\"userName\")\n    val Password = byId(\"password\")\n    val SubmitButton = byId(\"submitButton\")\n}\n"
    );
}

#[test]
fn test_empty_search_directory() {
    let input = tempfile::tempdir().expect("Failed to create temp dir");
    let output = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_for(output.path());
    let diagnostics = RecordingDiagnostics::new();

    let summary = PageObjectGenerator::new(&config, Platform::Android, &diagnostics)
        .run(input.path())
        .expect("Empty runs succeed");

    assert_eq!(summary.discovered, 0);
    assert!(summary.generated.is_empty());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    assert_eq!(
        diagnostics.messages(Level::Warn),
        vec!["No AXML files were found for processing".to_string()]
    );
}
