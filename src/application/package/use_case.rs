//! Package Use Case
//!
//! Orchestrates a packaging run:
//! 1. Derive the packaging mode from the host
//! 2. Enumerate, filter and archive each compiled output (concurrently)
//! 3. Wait for every archive to finish
//! 4. Distribute the archives and record bindings on the host

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::domain::entities::{ArtifactLayout, CompileResult, PackagingUnit};
use crate::domain::ports::{BuildOutputs, HostRegistry, Logger};
use crate::domain::value_objects::{ExcludePattern, PackagingMode, ServiceArtifactPolicy};
use crate::error::{PackResult, PackagingError};
use crate::infrastructure::fs::{list_files, ArchiveSummary, ZipArchiveBuilder};

use super::options::PackageOptions;
use super::result::PackageResult;
use crate::application::distribute::ArtifactDistributor;

/// Package use case - archives compiled output and assigns artifacts
pub struct PackageUseCase<B>
where
    B: BuildOutputs,
{
    outputs: B,
    logger: Arc<dyn Logger>,
    policy: ServiceArtifactPolicy,
}

impl<B> PackageUseCase<B>
where
    B: BuildOutputs,
{
    pub fn new(outputs: B, logger: Arc<dyn Logger>) -> Self {
        Self {
            outputs,
            logger,
            policy: ServiceArtifactPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ServiceArtifactPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn execute<H>(&self, host: &mut H, options: &PackageOptions) -> PackResult<PackageResult>
    where
        H: HostRegistry + ?Sized,
    {
        let mode = PackagingMode::from_individually(host.package_individually());
        let selection = self.validate_selection(host, mode, options)?;
        let layout = ArtifactLayout::new(&options.project_root, &options.build_output);

        let archives = if options.reuse_artifacts {
            self.logger.info("Copying existing artifacts...");
            Vec::new()
        } else {
            let units = units_for(host, mode, selection);
            let results: Vec<CompileResult> = units
                .iter()
                .map(|unit| self.outputs.compile_result(unit))
                .collect();
            self.build_archives(&results, &layout, options)?
        };

        let distributor =
            ArtifactDistributor::new(layout, self.logger.clone()).with_policy(self.policy.clone());
        let binding = distributor.distribute(host, mode, selection)?;

        Ok(PackageResult {
            mode,
            archives,
            binding,
        })
    }

    fn validate_selection<'o, H>(
        &self,
        host: &H,
        mode: PackagingMode,
        options: &'o PackageOptions,
    ) -> PackResult<Option<&'o [String]>>
    where
        H: HostRegistry + ?Sized,
    {
        let Some(selection) = options.selection() else {
            return Ok(None);
        };
        if let Some(unknown) = selection.iter().find(|name| host.function(name).is_none()) {
            return Err(PackagingError::UnknownFunction {
                name: unknown.clone(),
            });
        }
        if !mode.is_individual() {
            self.logger
                .verbose("Function selection ignored: service is packaged as a whole");
            return Ok(None);
        }
        Ok(Some(selection))
    }

    /// Archive every compile result with at most `options.concurrency` workers.
    ///
    /// After the first failure no further units start; units already running
    /// finish. The earliest failure in unit order is returned.
    fn build_archives(
        &self,
        results: &[CompileResult],
        layout: &ArtifactLayout,
        options: &PackageOptions,
    ) -> PackResult<Vec<ArchiveSummary>> {
        let builder = ZipArchiveBuilder::new(options.compression_level);
        let exclude = options.exclude.as_ref();
        let logger = self.logger.as_ref();

        let next = AtomicUsize::new(0);
        let failed = AtomicBool::new(false);
        let slots: Mutex<Vec<Option<PackResult<ArchiveSummary>>>> =
            Mutex::new((0..results.len()).map(|_| None).collect());
        let workers = options.concurrency.clamp(1, results.len().max(1));

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    if failed.load(Ordering::SeqCst) {
                        break;
                    }
                    let index = next.fetch_add(1, Ordering::SeqCst);
                    let Some(result) = results.get(index) else {
                        break;
                    };
                    let outcome = archive_unit(result, layout, exclude, &builder, logger);
                    if outcome.is_err() {
                        failed.store(true, Ordering::SeqCst);
                    }
                    if let Ok(mut slots) = slots.lock() {
                        slots[index] = Some(outcome);
                    }
                });
            }
        });

        let slots = slots
            .into_inner()
            .map_err(|_| std::io::Error::other("archive worker panicked"))?;
        let mut archives = Vec::with_capacity(slots.len());
        for slot in slots.into_iter().flatten() {
            archives.push(slot?);
        }
        Ok(archives)
    }
}

fn units_for<H>(host: &H, mode: PackagingMode, selection: Option<&[String]>) -> Vec<PackagingUnit>
where
    H: HostRegistry + ?Sized,
{
    match mode {
        PackagingMode::Individual => selection
            .map(<[String]>::to_vec)
            .unwrap_or_else(|| host.function_names())
            .into_iter()
            .map(PackagingUnit::Function)
            .collect(),
        PackagingMode::Unified => vec![PackagingUnit::Service(host.service_name().to_string())],
    }
}

fn archive_unit(
    result: &CompileResult,
    layout: &ArtifactLayout,
    exclude: Option<&ExcludePattern>,
    builder: &ZipArchiveBuilder,
    logger: &dyn Logger,
) -> PackResult<ArchiveSummary> {
    let unit = result.unit();
    logger.verbose(&format!(
        "Zip {}: {}",
        unit.kind(),
        result.output_path().display()
    ));
    let files = list_files(result.output_path(), exclude, logger)?;
    let artifact = layout.locate(unit.identity());
    builder.build(&files, artifact.build_path(), logger)
}
