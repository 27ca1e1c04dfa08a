//! Library-level packaging scenarios.
//!
//! These drive the use cases directly against a `ServiceManifest` and real
//! directories, without going through the CLI.

mod common;

use std::sync::{Arc, Mutex};

use fnpack::domain::entities::FunctionRecord;
use fnpack::domain::ports::{HostRegistry, LogLevel, Logger};
use fnpack::domain::value_objects::{ExcludePattern, PackagingMode, ServiceArtifactPolicy};
use fnpack::infrastructure::DirectoryBuildOutputs;
use fnpack::{PackageOptions, PackageUseCase, PackagingError, ServiceManifest};

use common::*;

#[derive(Default)]
struct CollectingLogger(Mutex<Vec<(LogLevel, String)>>);

impl CollectingLogger {
    fn at(&self, level: LogLevel) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Logger for CollectingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}

fn manifest(provider: &str, host_version: &str, individually: bool, functions: &[&str]) -> ServiceManifest {
    functions.iter().fold(
        ServiceManifest::new("svc", provider, host_version, individually),
        |m, name| m.with_function(*name, FunctionRecord::with_handler(format!("{}.handler", name))),
    )
}

#[test]
fn individual_packaging_with_many_workers() {
    let names = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
    let mut builder = TestEnv::builder();
    for name in names {
        builder = builder.with_output(name, &[("index.js", HANDLER_JS), ("index.js.map", HANDLER_MAP)]);
    }
    let env = builder.build();
    let root = env.project_root.path();
    let logger = Arc::new(CollectingLogger::default());

    let mut host = manifest("aws", "3.0.0", true, &names);
    let options = PackageOptions::new(root)
        .with_exclude(Some(ExcludePattern::new(r"\.map$").unwrap()))
        .with_concurrency(4);
    let use_case = PackageUseCase::new(DirectoryBuildOutputs::new(root.join(".webpack")), logger.clone());

    let result = use_case.execute(&mut host, &options).unwrap();

    assert_eq!(result.mode, PackagingMode::Individual);
    assert_eq!(result.archive_count(), names.len());
    for name in names {
        let deploy = root.join(format!(".serverless/{}.zip", name));
        assert_eq!(zip_entries(&deploy), vec!["index.js"]);
        assert!(!root.join(format!(".webpack/{}/index.js.map", name)).exists());
        assert_eq!(
            host.function(name).unwrap().artifact_path(),
            Some(format!(".serverless/{}.zip", name).as_str())
        );
    }
    assert!(logger.at(LogLevel::Error).is_empty());
}

#[test]
fn earliest_failure_in_unit_order_is_returned() {
    let env = TestEnv::builder()
        .with_output("a", &[("index.js", HANDLER_JS)])
        .with_output("c", &[("index.js", HANDLER_JS)])
        .build();
    let root = env.project_root.path();

    let mut host = manifest("aws", "3.0.0", true, &["a", "b", "c", "d"]);
    let options = PackageOptions::new(root).with_concurrency(1);
    let use_case = PackageUseCase::new(
        DirectoryBuildOutputs::new(root.join(".webpack")),
        Arc::new(CollectingLogger::default()),
    );

    let err = use_case.execute(&mut host, &options).unwrap_err();

    match err {
        PackagingError::DirectoryNotFound { path } => assert!(path.ends_with("b")),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(!root.join(".serverless").exists());
    assert!(host.function("a").unwrap().artifact_path().is_none());
}

#[test]
fn custom_policy_binds_service_artifact_for_extra_provider() {
    let env = TestEnv::builder()
        .with_output("service", &[("index.js", HANDLER_JS)])
        .build();
    let root = env.project_root.path();

    let mut host = manifest("knative", "3.0.0", false, &["first"]);
    let use_case = PackageUseCase::new(
        DirectoryBuildOutputs::new(root.join(".webpack")),
        Arc::new(CollectingLogger::default()),
    )
    .with_policy(ServiceArtifactPolicy::new(vec!["knative".to_string()]));

    let result = use_case.execute(&mut host, &PackageOptions::new(root)).unwrap();

    assert_eq!(result.binding.service(), Some(".serverless/svc.zip"));
    assert_eq!(host.service_artifact(), Some(".serverless/svc.zip"));
}

#[test]
fn saved_manifest_reloads_with_bindings() {
    let env = TestEnv::builder()
        .with_output("service", &[("index.js", HANDLER_JS)])
        .build();
    let root = env.project_root.path();
    let logger = Arc::new(CollectingLogger::default());

    let mut host = manifest("aws", "1.2.0", false, &["first", "second"]);
    let use_case = PackageUseCase::new(DirectoryBuildOutputs::new(root.join(".webpack")), logger.clone());
    use_case.execute(&mut host, &PackageOptions::new(root)).unwrap();

    let path = ServiceManifest::default_path(root);
    host.save(&path).unwrap();
    let reloaded = ServiceManifest::load(&path).unwrap();

    assert!(reloaded.generated_at().is_some());
    assert_eq!(reloaded.functions(), host.functions());
    let first = reloaded.function("first").unwrap();
    assert_eq!(first.artifact.as_deref(), Some(".serverless/svc.zip"));
    assert!(first.packaging_disabled());
    assert_eq!(logger.at(LogLevel::Info).len(), 2);
}
