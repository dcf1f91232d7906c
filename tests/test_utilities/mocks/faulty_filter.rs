use depsnap::prelude::*;
use std::collections::HashSet;

/// How a [`FaultyFilter`] misbehaves when it meets its target id.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultMode {
    ReturnError,
    Panic,
    AcceptTwice,
    ChangeId,
    /// Passes adds through but rejects removing the target.
    RejectRemove,
}

/// Filter that faults on one dependency id and passes everything else through.
pub struct FaultyFilter {
    target: String,
    mode: FaultMode,
    order: i32,
}

#[allow(dead_code)]
impl FaultyFilter {
    pub const NAME: &'static str = "faulty";

    pub fn new(target: impl Into<String>, mode: FaultMode) -> Self {
        Self {
            target: target.into(),
            mode,
            order: 500,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl DependenciesSnapshotFilter for FaultyFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn before_add_or_update(
        &self,
        dependency: DependencyNode,
        _providers: &ProviderRegistry,
        _known_item_specs: Option<&HashSet<String>>,
        context: &mut AddDependencyContext<'_>,
    ) -> Result<()> {
        if dependency.id().id() != self.target || self.mode == FaultMode::RejectRemove {
            context.accept(dependency);
            return Ok(());
        }

        match self.mode {
            FaultMode::ReturnError => anyhow::bail!("refusing {}", self.target),
            FaultMode::Panic => panic!("faulty filter hit {}", self.target),
            FaultMode::AcceptTwice => {
                context.accept(dependency.clone());
                context.accept(dependency);
            }
            FaultMode::RejectRemove => unreachable!(),
            FaultMode::ChangeId => {
                let renamed = DependencyNode::builder(
                    DependencyId::new(dependency.provider_type(), format!("{}-renamed", self.target)),
                    dependency.icon_set().clone(),
                )
                .build()?;
                context.accept(renamed);
            }
        }
        Ok(())
    }

    fn before_remove(
        &self,
        dependency: &DependencyNode,
        context: &mut RemoveDependencyContext<'_>,
    ) -> Result<()> {
        let rejects = matches!(self.mode, FaultMode::ReturnError | FaultMode::RejectRemove);
        if dependency.id().id() == self.target && rejects {
            anyhow::bail!("refusing to remove {}", self.target);
        }
        context.accept();
        Ok(())
    }
}
