/*!
 * Process Manager Builder
 * Builder pattern for ProcessManager construction
 */

use super::pacing::{pacer_for, Pacer};
use super::ProcessManager;
use crate::core::SimConfig;
use crate::memory::{MemoryTable, PageSource, RandomPageSource};
use crate::monitoring::Observer;
use crate::storage::ProcessStore;
use tracing::info;

/// Builder for ProcessManager
pub struct ProcessManagerBuilder {
    config: SimConfig,
    page_source: Option<Box<dyn PageSource>>,
    pacer: Option<Box<dyn Pacer>>,
    observers: Vec<Box<dyn Observer>>,
    memory: Option<MemoryTable>,
    enable_store: bool,
}

impl ProcessManagerBuilder {
    /// Create a new ProcessManager builder
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
            page_source: None,
            pacer: None,
            observers: Vec::new(),
            memory: None,
            enable_store: true,
        }
    }

    /// Use the given configuration
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the random page source (deterministic runs)
    pub fn with_page_source(mut self, source: impl PageSource + 'static) -> Self {
        self.page_source = Some(Box::new(source));
        self
    }

    /// Replace the pacing strategy derived from the configured delay
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Some(Box::new(pacer));
        self
    }

    /// Add an observer; when any are added the configured report is not used
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Use a custom memory table (e.g. a small address space)
    pub fn with_memory(mut self, memory: MemoryTable) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Keep processes in memory only
    pub fn without_store(mut self) -> Self {
        self.enable_store = false;
        self
    }

    /// Build the ProcessManager
    pub fn build(self) -> ProcessManager {
        let pages = self
            .page_source
            .unwrap_or_else(|| Box::new(RandomPageSource::from_seed(self.config.seed)));
        let pacer = self.pacer.unwrap_or_else(|| pacer_for(self.config.step_delay));
        let observers = if self.observers.is_empty() {
            vec![self.config.report.observer()]
        } else {
            self.observers
        };
        let store = self
            .enable_store
            .then(|| ProcessStore::new(self.config.store_path.clone()));
        let memory = self.memory.unwrap_or_default();

        info!(
            store = ?store.as_ref().map(|s| s.path().display().to_string()),
            pages = memory.capacity(),
            quantum = self.config.quantum,
            fresh_runs = self.config.reset_between_policies,
            rr_memory = ?self.config.rr_memory,
            "Process manager initialized"
        );

        ProcessManager {
            processes: Vec::new(),
            completed: Vec::new(),
            cpu_time: 0,
            memory,
            pages,
            pacer,
            observers,
            store,
            config: self.config,
        }
    }
}

impl Default for ProcessManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
