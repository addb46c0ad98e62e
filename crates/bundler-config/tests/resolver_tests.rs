//! End-to-end resolution against package.json fixtures on disk

use bundler_config::{
    BundlerOptions, ConfigResolver, ErrorKind, ExternalsDeclaration, HostExternals,
};
use bundler_fs::{ManifestLocator, NormalizedPath, PackageManifest};
use bundler_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Map, Value, json};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn resolver_for(project: &TestProject) -> ConfigResolver {
    ConfigResolver::new(project.cwd())
}

#[test]
fn empty_block_gets_compatibility_and_purgecss_defaults() {
    let project = TestProject::new();
    project.write_bundler_options(json!({}), Some("1.2.3"));

    let options = resolver_for(&project).resolve().unwrap();

    assert_eq!(
        options,
        BundlerOptions {
            app_compatibility: Some("1.2.3".to_string()),
            purgecss: Map::new(),
            ..Default::default()
        }
    );
    assert_eq!(options.externals(), ExternalsDeclaration::None);
}

#[rstest]
#[case::null(json!(null))]
#[case::disabled(json!(false))]
#[case::zero(json!(0))]
#[case::empty_string(json!(""))]
fn switched_off_purgecss_resolves_to_empty_map(#[case] purgecss: Value) {
    let project = TestProject::new();
    project.write_bundler_options(json!({ "purgecss": purgecss }), None);

    let options = resolver_for(&project).resolve().unwrap();

    assert_eq!(options.purgecss, Map::new());
}

#[test]
fn manifest_without_one_amex_resolves_to_defaults() {
    let project = TestProject::new();
    project.write_manifest(&json!({ "name": "bare-module", "version": "0.1.0" }));

    let options = resolver_for(&project).resolve().unwrap();

    assert_eq!(options, BundlerOptions::default());
}

#[test]
fn valid_options_pass_through() {
    let project = TestProject::new();
    project.write_bundler_options(
        json!({
            "requiredExternals": ["lodash", "date-fns"],
            "purgecss": { "safelist": ["btn"] }
        }),
        Some("^5.0.0"),
    );

    let options = resolver_for(&project).resolve().unwrap();

    assert_eq!(
        options.externals(),
        ExternalsDeclaration::Required(&["lodash".to_string(), "date-fns".to_string()])
    );
    assert_eq!(options.purgecss["safelist"], json!(["btn"]));
    assert_eq!(options.app_compatibility.as_deref(), Some("^5.0.0"));
}

#[test]
fn resolves_from_nested_working_directory() {
    let project = TestProject::new();
    project.write_bundler_options(json!({ "providedExternals": ["my-design-system"] }), None);
    let nested = project.mkdir("src/components/Button");

    let options = ConfigResolver::new(nested).resolve().unwrap();

    assert_eq!(
        options.provided_externals,
        Some(vec!["my-design-system".to_string()])
    );
}

#[test]
fn nearest_manifest_is_used() {
    let project = TestProject::new();
    project.write_bundler_options(json!({ "unknownKey": true }), None);
    project.write_manifest_in(
        "packages/child",
        &json!({ "one-amex": { "bundler": { "requiredExternals": ["lodash"] } } }),
    );

    let options = ConfigResolver::new(project.mkdir("packages/child/src"))
        .resolve()
        .unwrap();

    assert_eq!(options.required_externals, Some(vec!["lodash".to_string()]));
}

#[test]
fn reserved_external_names_are_reported_in_registry_order() {
    let project = TestProject::new();
    project.write_bundler_options(
        json!({ "requiredExternals": ["lodash", "react-dom", "react"] }),
        None,
    );

    let err = resolver_for(&project).resolve().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ReservedExternalName);
    let message = err.to_string();
    assert!(message.contains("react, react-dom"), "{message}");
    assert!(!message.contains("lodash"), "{message}");
}

#[test]
fn custom_host_externals_registry_is_honoured() {
    let project = TestProject::new();
    project.write_bundler_options(json!({ "requiredExternals": ["react", "lodash"] }), None);

    let resolver = resolver_for(&project).with_host_externals(HostExternals::from_names(["lodash"]));
    let err = resolver.resolve().unwrap_err();

    match err {
        bundler_config::Error::ReservedExternalName { names } => assert_eq!(names, vec!["lodash"]),
        other => panic!("expected ReservedExternalName, got {other:?}"),
    }
}

#[test]
fn malformed_manifest_surfaces_fs_error() {
    let project = TestProject::new();
    std::fs::write(project.root().join("package.json"), "{ not json").unwrap();

    let err = resolver_for(&project).resolve().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fs);
}

struct NoManifest;

impl ManifestLocator for NoManifest {
    fn locate(&self, cwd: &NormalizedPath) -> bundler_fs::Result<PackageManifest> {
        Err(bundler_fs::Error::ManifestNotFound {
            start: cwd.to_native(),
        })
    }
}

#[test]
fn missing_manifest_is_reported() {
    let err = ConfigResolver::new(NormalizedPath::new("/nowhere"))
        .with_locator(NoManifest)
        .resolve()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ManifestNotFound);
    match err {
        bundler_config::Error::ManifestNotFound { start } => {
            assert_eq!(start, PathBuf::from("/nowhere"));
        }
        other => panic!("expected ManifestNotFound, got {other:?}"),
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn resolve_capturing_logs(resolver: &ConfigResolver) -> (bundler_config::Result<BundlerOptions>, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || resolver.resolve());
    (result, logs.contents())
}

#[test]
fn custom_client_config_emits_exactly_one_warning() {
    let project = TestProject::new();
    project.write_bundler_options(json!({ "webpackClientConfigPath": "webpack.client.js" }), None);

    let (result, logs) = resolve_capturing_logs(&resolver_for(&project));

    assert!(result.is_ok());
    assert_eq!(logs.matches("custom webpack config").count(), 1, "{logs}");
}

#[test]
fn plain_options_emit_no_warning() {
    let project = TestProject::new();
    project.write_bundler_options(json!({ "providedExternals": ["my-lib"] }), None);

    let (result, logs) = resolve_capturing_logs(&resolver_for(&project));

    assert!(result.is_ok());
    assert!(!logs.contains("custom webpack config"), "{logs}");
}

#[test]
fn invalid_options_emit_no_warning() {
    let project = TestProject::new();
    project.write_bundler_options(
        json!({ "webpackConfigPath": "webpack.js", "webpackServerConfigPath": "server.js" }),
        None,
    );

    let (result, logs) = resolve_capturing_logs(&resolver_for(&project));

    assert_eq!(
        result.unwrap_err().kind(),
        ErrorKind::ConflictingWebpackConfigPath
    );
    assert!(!logs.contains("custom webpack config"), "{logs}");
}
