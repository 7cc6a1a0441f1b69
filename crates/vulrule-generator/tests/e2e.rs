//! End-to-end tests for VulRule.
//!
//! These tests run full builds against temporary sites and inspect the written tree.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Value, json};
use tempfile::TempDir;
use vulrule_core::{Config, Locale};
use vulrule_generator::{Builder, StatsRecord};

fn rule(tool: &str, lib: &str, api: &str, label: &str, cwe: &str, code: &str) -> Value {
    json!({
        "tool_name": tool,
        "lib_name": lib,
        "api_name": api,
        "rule": {
            "Description": format!("Rule for {api}"),
            "Label": [label],
            "cweType-and-QLCode": [{ "cweType": [cwe], "QLCode": code }]
        }
    })
}

fn two_rule_dataset() -> Value {
    json!([
        rule("CodeQL", "OpenSSL", "SSL_new", "initialization", "CWE-665", "from x import y"),
        rule("CodeQL", "OpenSSL", "SSL_free", "return value check", "CWE-252", "pass"),
    ])
}

fn mixed_dataset() -> Value {
    let mut rules = Vec::new();
    let libs = ["OpenSSL", "zlib", "libpng", "curl", "sqlite", "libxml2", "_Glib"];
    let labels = ["initialization", "parameter check", "return value check", "api pair"];
    for (i, lib) in libs.iter().enumerate() {
        for j in 0..=i {
            let tool = if j % 2 == 0 { "CodeQL" } else { "Semgrep" };
            let label = labels[(i + j) % labels.len()];
            rules.push(rule(tool, lib, &format!("{lib}_fn{j}"), label, "CWE-20", "pass"));
        }
    }
    Value::Array(rules)
}

fn config_for(site: &Path, dataset: &Value, locale: Locale) -> Config {
    let data_path = site.join("data.json");
    fs::write(&data_path, dataset.to_string()).expect("write dataset");

    let mut config = Config::default();
    config.paths.data_path = data_path;
    config.paths.site_root = site.to_path_buf();
    config.build.locale = locale;
    config
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("read {}: {e}", path.as_ref().display()))
}

/// Every file below `root`, keyed by relative path.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).expect("prefix").to_path_buf();
                out.insert(rel, fs::read(&path).expect("read file"));
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn test_two_rule_example() {
    let site = TempDir::new().expect("temp dir");
    let config = config_for(site.path(), &two_rule_dataset(), Locale::En);

    let stats = Builder::new(config).build().expect("build");
    let docs = site.path().join("docs");

    assert_eq!(stats.pages, 2);
    assert!(docs.join("intro.md").exists());
    assert!(docs.join("projects/openssl/api_ssl_new.md").exists());
    assert!(docs.join("projects/openssl/api_ssl_free.md").exists());

    let project = read(docs.join("projects/openssl/index.md"));
    assert!(project.contains("openssl has 2 rules"));
    assert!(project.contains("- [ssl_new](projects/openssl/api_ssl_new.md)"));
    assert!(project.contains("- [ssl_free](projects/openssl/api_ssl_free.md)"));

    let tool = read(docs.join("tools/CodeQL.md"));
    assert!(tool.contains("CodeQL generated 2 rules"));
    assert!(tool.contains("## openssl"));
    assert!(tool.find("ssl_new").unwrap() < tool.find("ssl_free").unwrap());

    let init = read(docs.join("labels/initialization.md"));
    assert_eq!(init.matches("- [").count(), 1);
    let ret = read(docs.join("labels/return value check.md"));
    assert_eq!(ret.matches("- [").count(), 1);
    assert!(ret.contains("ssl_free"));

    let page = read(docs.join("projects/openssl/api_ssl_new.md"));
    assert!(page.contains("CWE Type: **CWE-665**"));
    assert!(page.contains("from x import y"));

    let record: StatsRecord = serde_json::from_str(&read(&stats.stats_file)).expect("stats json");
    assert_eq!(record.rule_categories.len(), 2);
    assert!(record.rule_categories.iter().all(|l| l.count == "1"));
    assert_eq!(record.library_categories.len(), 1);
    assert_eq!(record.library_categories[0].name, "openssl");
    assert_eq!(record.library_categories[0].count, "2");
    assert_eq!(record.tool_categories[0].name, "CodeQL");
    assert_eq!(record.tool_categories[0].count, "2");

    for dir in ["projects", "tools", "labels"] {
        let manifest: Value =
            serde_json::from_str(&read(docs.join(dir).join("_category_.json"))).expect("manifest");
        assert_eq!(manifest["link"]["type"], "generated-index");
    }
}

#[test]
fn test_every_page_is_indexed_exactly_once_per_kind() {
    let site = TempDir::new().expect("temp dir");
    let dataset = mixed_dataset();
    let config = config_for(site.path(), &dataset, Locale::En);
    let stats = Builder::new(config).build().expect("build");
    let docs = stats.docs_root;

    let indices = |dir: &str| -> Vec<String> {
        let mut pages = Vec::new();
        for entry in fs::read_dir(docs.join(dir)).expect("read index dir") {
            let path = entry.expect("entry").path();
            if path.extension().is_some_and(|e| e == "md") {
                pages.push(read(&path));
            } else if path.join("index.md").exists() {
                pages.push(read(path.join("index.md")));
            }
        }
        pages
    };
    let tools = indices("tools");
    let labels = indices("labels");
    let projects = indices("projects");

    for rule in dataset.as_array().unwrap() {
        let lib = vulrule_core::normalize(rule["lib_name"].as_str().unwrap());
        let api = vulrule_core::normalize(rule["api_name"].as_str().unwrap());
        let link = format!("](projects/{lib}/api_{api}.md)");

        assert!(docs.join(format!("projects/{lib}/api_{api}.md")).exists());
        for (kind, pages) in [("tool", &tools), ("label", &labels), ("project", &projects)] {
            let hits: usize = pages.iter().map(|p| p.matches(&link).count()).sum();
            assert_eq!(hits, 1, "{link} appears {hits} times in {kind} indices");
        }
    }

    let label_file = read(docs.join("labels/api pair.md"));
    let expected = dataset
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["rule"]["Label"][0] == "api pair")
        .count();
    assert!(label_file.contains(&format!("There are {expected} rules of type api pair")));
}

#[test]
fn test_label_and_tool_stats_match_dataset() {
    let site = TempDir::new().expect("temp dir");
    let dataset = mixed_dataset();
    let config = config_for(site.path(), &dataset, Locale::En);
    let stats = Builder::new(config).build().expect("build");

    let mut labels: BTreeMap<String, usize> = BTreeMap::new();
    let mut tools: BTreeMap<String, usize> = BTreeMap::new();
    for rule in dataset.as_array().unwrap() {
        let label = rule["rule"]["Label"][0].as_str().unwrap();
        *labels.entry(label.to_string()).or_default() += 1;
        *tools.entry(rule["tool_name"].as_str().unwrap().to_string()).or_default() += 1;
    }

    let record: StatsRecord = serde_json::from_str(&read(&stats.stats_file)).expect("stats");
    let written: BTreeMap<String, usize> = record
        .rule_categories
        .iter()
        .map(|l| (l.name.clone(), l.count.parse().unwrap()))
        .collect();
    assert_eq!(record.rule_categories.len(), labels.len());
    assert_eq!(written, labels);

    let written: BTreeMap<String, usize> = record
        .tool_categories
        .iter()
        .map(|t| (t.name.clone(), t.count.parse().unwrap()))
        .collect();
    assert_eq!(written, tools);

    let init = record
        .rule_categories
        .iter()
        .find(|l| l.name == "initialization")
        .expect("initialization stats");
    assert_eq!(init.icon, "🚀");
    assert_eq!(init.color, "#FBBC05");
}

#[test]
fn test_library_stats_with_others() {
    let site = TempDir::new().expect("temp dir");
    let config = config_for(site.path(), &mixed_dataset(), Locale::En);
    let stats = Builder::new(config).build().expect("build");

    let record: StatsRecord = serde_json::from_str(&read(&stats.stats_file)).expect("stats");
    let names: Vec<_> = record
        .library_categories
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["glib", "libxml2", "sqlite", "curl", "libpng", "others"]);

    let total: usize = record
        .library_categories
        .iter()
        .map(|s| s.count.parse::<usize>().unwrap())
        .sum();
    assert_eq!(total, stats.pages);
    assert_eq!(record.library_categories[5].count, "3");
}

#[test]
fn test_rebuild_is_byte_identical() {
    let site = TempDir::new().expect("temp dir");
    let config = config_for(site.path(), &mixed_dataset(), Locale::Zh);

    Builder::new(config.clone()).build().expect("first build");
    let first = snapshot(site.path());

    Builder::new(config).build().expect("second build");
    let second = snapshot(site.path());

    assert_eq!(first, second);
}

#[test]
fn test_chinese_locale_targets_i18n_root() {
    let site = TempDir::new().expect("temp dir");
    let config = config_for(site.path(), &two_rule_dataset(), Locale::Zh);

    let stats = Builder::new(config).build().expect("build");

    let root = site
        .path()
        .join("i18n/zh/docusaurus-plugin-content-docs/current");
    assert_eq!(stats.docs_root, root);
    assert!(!site.path().join("docs").exists());

    let tool = read(root.join("tools/CodeQL.md"));
    assert!(tool.contains("CodeQL 生成了 2 条规则"));
    let manifest = read(root.join("tools/_category_.json"));
    assert!(manifest.contains("\"label\": \"工具\""));
    assert!(manifest.starts_with("{\n    \"position\": 3,"));
}

#[test]
fn test_empty_dataset_writes_no_rule_or_index_files() {
    let site = TempDir::new().expect("temp dir");
    let config = config_for(site.path(), &json!([]), Locale::En);

    assert!(Builder::new(config).build().is_err());

    let docs = site.path().join("docs");
    for dir in ["projects", "tools", "labels"] {
        assert!(!docs.join(dir).exists(), "{dir} should not exist");
    }
    assert!(!site.path().join("src").exists());
}

#[test]
fn test_invalid_rule_aborts_before_any_page() {
    let site = TempDir::new().expect("temp dir");
    let mut bad = rule("CodeQL", "zlib", "inflate", "initialization", "CWE-1", "pass");
    bad["rule"]["cweType-and-QLCode"] = json!([]);
    let dataset = json!([
        rule("CodeQL", "OpenSSL", "SSL_new", "initialization", "CWE-665", "pass"),
        bad
    ]);
    let config = config_for(site.path(), &dataset, Locale::En);

    let err = Builder::new(config).build().unwrap_err();

    assert!(err.to_string().contains("#1"));
    assert!(!site.path().join("docs/projects").exists());
}
