use pretty_assertions::assert_eq;
use std::fs;
use tokenwind_cli::{build, check, load_document, write_artifacts, BuildConfig, Document};

const DOCUMENT: &str = r##"{
    "core": {
        "ivy-framework": {
            "source": {
                "color": {
                    "primary": { "value": "#00cc92", "type": "color" },
                    "black": { "value": "#000000", "type": "color" },
                    "white": { "value": "#ffffff", "type": "color" }
                },
                "spacing": { "sm": { "value": "4px", "type": "spacing" } }
            },
            "theme": {
                "light": { "color": {
                    "background": { "value": "{core.ivy-framework.source.color.white}", "type": "color" },
                    "primary": { "value": "{core.ivy-framework.source.color.primary}", "type": "color" }
                } },
                "dark": { "color": {
                    "background": { "value": "{core.ivy-framework.source.color.black}", "type": "color" },
                    "primary": { "value": "{core.ivy-framework.source.color.primary}", "type": "color" }
                } }
            }
        }
    }
}"##;

const CONFIG: &str = r#"
tokens = "tokens.json"
out_dir = "dist"

[scope]
id = "core.ivy-framework"
"#;

fn workspace() -> (tempfile::TempDir, BuildConfig) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tokens.json"), DOCUMENT).unwrap();
    fs::write(dir.path().join("tokenwind.toml"), CONFIG).unwrap();
    let config = BuildConfig::load(&dir.path().join("tokenwind.toml")).unwrap();
    (dir, config)
}

#[test]
fn test_build_writes_every_output() {
    let (dir, config) = workspace();
    let document = load_document(&config).unwrap();
    let artifacts = build(&document, &config, Some("2024-05-01T12:00:00.000Z")).unwrap();
    let manifest = write_artifacts(&config.out_dir, &artifacts, None).unwrap();

    let out = dir.path().join("dist");
    for file in manifest.files.keys() {
        assert!(out.join(file).is_file(), "missing {}", file);
    }
    assert!(out.join("manifest.json").is_file());
    assert_eq!(manifest.files.len(), 12);

    let light = fs::read_to_string(out.join("css/light.css")).unwrap();
    assert_eq!(
        light,
        "@layer base {\n  :root {\n    --color-background: #ffffff;\n    --color-primary: #00cc92;\n  }\n}\n"
    );

    let tailwind = fs::read_to_string(out.join("tailwind/ivy-framework.js")).unwrap();
    assert!(tailwind.contains("\"primary\": \"var(--color-primary)\""));
    assert!(tailwind.contains("\"sm\": \"var(--spacing-sm)\""));

    let csharp = fs::read_to_string(out.join("csharp/DarkThemeTokens.cs")).unwrap();
    assert!(csharp.contains("public static readonly string Background = \"#000000\";"));
    assert!(csharp.contains("/// Generated on: 2024-05-01T12:00:00.000Z"));

    let raw = fs::read_to_string(out.join("tokens/index.json")).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let original: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn test_build_rejects_foreign_scope_reference() {
    let (_dir, config) = workspace();
    let broken = DOCUMENT.replace(
        "{core.ivy-framework.source.color.black}",
        "{core.ivy-web.source.color.black}",
    );
    let document = Document::from_json(&broken).unwrap();

    let err = build(&document, &config, None).unwrap_err();
    assert!(err.to_string().contains("core.ivy-web"));
}

#[test]
fn test_check_clean_document() {
    let (_dir, config) = workspace();
    let document = load_document(&config).unwrap();
    assert_eq!(check(&document, &config), vec![]);
}

#[test]
fn test_check_reports_key_mismatch() {
    let (_dir, config) = workspace();
    let mut raw: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();
    let light = raw["core"]["ivy-framework"]["theme"]["light"]["color"]
        .as_object_mut()
        .unwrap();
    let primary = light.remove("primary").unwrap();
    light.insert("accent".to_string(), primary);
    let document = Document::from_value(raw).unwrap();

    let diagnostics = check(&document, &config);
    assert!(diagnostics.iter().any(|d| d.is_error()));
}
