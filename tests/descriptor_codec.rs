//! Integration tests for the descriptor codec.
//!
//! These tests pin the exact bytes written for complete descriptors and
//! check that hand-written descriptors are read the way servers read them.

use std::fs;

use plugmeta::core::descriptor::{self, DescriptorError};
use plugmeta::core::metadata::{
    PluginCommand, PluginDependency, PluginMetadata, PluginPermission,
};
use plugmeta::core::types::{DependencyType, LoadOn, PermissionDefault};

const FULL_BODY: &str = "\
name: Example
version: 1.0.0
description: An example plugin
load: STARTUP
authors:
- Zartec
- ghac
website: https://example.org
main: org.example.Example
database: true
depend:
- Vault
softdepend:
- ProtocolLib
loadbefore:
- Essentials
prefix: EX
commands:
  example:
    description: Example command
    aliases:
    - ex
    - exa
    permission: example.use
    usage: /<command>
permissions:
  example.*:
    description: All example permissions
    default: op
    children:
      example.use: true
      example.admin: false
  example.use:
    default: true
";

fn full_metadata() -> PluginMetadata {
    let mut meta = PluginMetadata::new("Example");
    meta.set_version("1.0.0");
    meta.set_description("An example plugin");
    meta.set_load_on(LoadOn::Startup);
    meta.add_author("Zartec").unwrap();
    meta.add_author("ghac").unwrap();
    meta.set_website("https://example.org");
    meta.set_main("org.example.Example").unwrap();
    meta.set_database(true);
    meta.set_prefix("EX");

    // Interleaved on purpose; the writer partitions by type.
    meta.add_dependency(PluginDependency::new("Essentials", DependencyType::LoadBefore).unwrap())
        .unwrap();
    meta.add_dependency(PluginDependency::depend("Vault").unwrap())
        .unwrap();
    meta.add_dependency(PluginDependency::new("ProtocolLib", DependencyType::SoftDepend).unwrap())
        .unwrap();

    let mut command = PluginCommand::new("example").unwrap();
    command.set_description("Example command");
    command.add_alias("ex").unwrap();
    command.add_alias("exa").unwrap();
    command.set_permission("example.use");
    command.set_usage("/<command>");
    meta.add_command(command).unwrap();

    let mut all = PluginPermission::new("example.*").unwrap();
    all.set_description("All example permissions");
    all.set_default(PermissionDefault::Op);
    all.add_child("example.use", true).unwrap();
    all.add_child("example.admin", false).unwrap();
    meta.add_permission(all).unwrap();

    let mut using = PluginPermission::new("example.use").unwrap();
    using.set_default(PermissionDefault::True);
    meta.add_permission(using).unwrap();

    meta
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn full_descriptor_bytes() {
    assert_eq!(descriptor::encode(&full_metadata()).unwrap(), FULL_BODY);
}

#[test]
fn encoding_is_stable() {
    let meta = full_metadata();
    assert_eq!(
        descriptor::encode(&meta).unwrap(),
        descriptor::encode(&meta).unwrap()
    );
}

#[test]
fn single_author_collapses() {
    let mut meta = PluginMetadata::new("test");
    meta.set_main("org.example.Test").unwrap();
    meta.add_author("Zartec").unwrap();
    assert_eq!(
        descriptor::encode(&meta).unwrap(),
        "name: test\nauthor: Zartec\nmain: org.example.Test\n"
    );

    meta.add_author("ghac").unwrap();
    assert_eq!(
        descriptor::encode(&meta).unwrap(),
        "name: test\nauthors:\n- Zartec\n- ghac\nmain: org.example.Test\n"
    );
}

#[test]
fn dependencies_partition_by_type() {
    let mut meta = PluginMetadata::new("test");
    meta.set_main("org.example.Test").unwrap();
    meta.add_dependency(PluginDependency::depend("A").unwrap())
        .unwrap();
    meta.add_dependency(PluginDependency::new("B", DependencyType::SoftDepend).unwrap())
        .unwrap();
    meta.add_dependency(PluginDependency::new("C", DependencyType::LoadBefore).unwrap())
        .unwrap();

    let text = descriptor::encode(&meta).unwrap();
    assert_eq!(
        text,
        "name: test\nmain: org.example.Test\ndepend:\n- A\nsoftdepend:\n- B\nloadbefore:\n- C\n"
    );

    let parsed = descriptor::parse_str(&text).unwrap().unwrap();
    assert_eq!(parsed.dependency("A").unwrap().kind(), DependencyType::Depend);
    assert_eq!(parsed.dependency("B").unwrap().kind(), DependencyType::SoftDepend);
    assert_eq!(parsed.dependency("C").unwrap().kind(), DependencyType::LoadBefore);
}

#[test]
fn bungee_descriptor_snapshot() {
    let mut meta = PluginMetadata::new("Proxy");
    meta.set_version("2.1.0");
    meta.add_author("Zartec").unwrap();
    meta.set_main("org.example.Proxy").unwrap();

    let text = descriptor::encode(&meta).unwrap();
    insta::assert_snapshot!(text, @r###"
    name: Proxy
    version: 2.1.0
    author: Zartec
    main: org.example.Proxy
    "###);
}

#[test]
fn version_that_looks_like_a_number_stays_a_string() {
    let mut meta = PluginMetadata::new("test");
    meta.set_version("1.0");
    let text = descriptor::encode(&meta).unwrap();
    let parsed = descriptor::parse_str(&text).unwrap().unwrap();
    assert_eq!(parsed.version(), Some("1.0"));
}

// =============================================================================
// Reading
// =============================================================================

#[test]
fn full_descriptor_round_trips() {
    let parsed = descriptor::parse_str(FULL_BODY).unwrap().unwrap();
    assert_eq!(parsed, full_metadata());
}

#[test]
fn header_is_ignored_on_read() {
    let text = format!("{}{}", descriptor::header(), FULL_BODY);
    let parsed = descriptor::parse_str(&text).unwrap().unwrap();
    assert_eq!(parsed, full_metadata());
}

#[test]
fn hand_written_descriptor() {
    let text = "\
name: Handmade
version: '3'
authors: [Zartec, ghac]
softdepend: [Vault]
commands:
  home:
    aliases: h
  spawn:
permissions:
  home.use:
    default: NOT_OP
    children:
      home.other: ~
";
    let meta = descriptor::parse_str(text).unwrap().unwrap();
    assert_eq!(meta.version(), Some("3"));
    assert_eq!(meta.authors(), ["Zartec", "ghac"]);
    assert_eq!(meta.dependency("Vault").unwrap().kind(), DependencyType::SoftDepend);
    assert_eq!(meta.command("home").unwrap().aliases(), ["h"]);
    assert!(meta.command("spawn").is_some());

    let perm = meta.permission("home.use").unwrap();
    assert_eq!(perm.default_value(), Some(PermissionDefault::NoOp));
    assert!(perm.children().is_empty());
}

#[test]
fn empty_document_has_no_metadata() {
    assert!(descriptor::parse_str("").unwrap().is_none());
    assert!(descriptor::parse_str("# only a comment\n").unwrap().is_none());
}

#[test]
fn name_only_document() {
    let meta = descriptor::parse_str("name: test").unwrap().unwrap();
    assert_eq!(meta.name(), Some("test"));
    assert_eq!(meta.version(), None);
    assert_eq!(meta.description(), None);
    assert_eq!(meta.main(), None);
    assert_eq!(meta.load_on(), None);
    assert!(meta.authors().is_empty());
    assert_eq!(meta.database(), None);
    assert!(!meta.has_dependencies());
    assert_eq!(meta.commands().count(), 0);
    assert_eq!(meta.permissions().count(), 0);
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn write_and_read_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(descriptor::FILENAME_SPIGOT);

    descriptor::write_path(&path, &full_metadata()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# Auto-generated yaml file, generated at "));
    assert_eq!(descriptor::body(&text), FULL_BODY);

    let parsed = descriptor::read_path(&path).unwrap().unwrap();
    assert_eq!(parsed, full_metadata());
}

#[test]
fn read_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yml");
    match descriptor::read_path(&path) {
        Err(DescriptorError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn write_without_name_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(descriptor::FILENAME_BUNGEE);
    let err = descriptor::write_path(&path, &PluginMetadata::new("")).unwrap_err();
    assert!(matches!(err, DescriptorError::MissingName));
    assert!(!path.exists());
}
