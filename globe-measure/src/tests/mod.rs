//! Instrumented viewer, tool and terrain fakes shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::channel::oneshot;
use parking_lot::Mutex;

use crate::error::MeasureError;
use crate::messenger::Messenger;
use crate::options::MeasureOptions;
use crate::terrain::TerrainProvider;
use crate::tool::{MeasureTool, ToolFactory, ToolKind};
use crate::viewer::{CameraView, Viewer, ViewerFactory};

#[derive(Debug, Clone, PartialEq)]
pub enum JournalEntry {
    CreateViewer(String),
    SetTerrain(u32),
    SetView(CameraView),
    DestroyViewer,
    CreateTool(ToolKind),
    StartTool(ToolKind),
    EndTool(ToolKind),
    DestroyTool(ToolKind),
}

/// Ordered record of all calls made to the fakes.
#[derive(Default, Clone)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
    options: Arc<Mutex<Vec<MeasureOptions>>>,
}

impl Journal {
    pub fn push(&self, entry: JournalEntry) {
        self.entries.lock().push(entry);
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn count(&self, entry: &JournalEntry) -> usize {
        self.entries.lock().iter().filter(|e| *e == entry).count()
    }

    pub fn last_options(&self) -> Option<MeasureOptions> {
        self.options.lock().last().cloned()
    }

    /// Number of tools that were created but not destroyed yet.
    pub fn live_tools(&self) -> usize {
        let entries = self.entries.lock();
        let created = entries
            .iter()
            .filter(|e| matches!(e, JournalEntry::CreateTool(_)))
            .count();
        let destroyed = entries
            .iter()
            .filter(|e| matches!(e, JournalEntry::DestroyTool(_)))
            .count();
        created - destroyed
    }
}

pub struct FakeViewer {
    journal: Journal,
}

impl FakeViewer {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl Viewer for FakeViewer {
    type Terrain = u32;

    fn set_terrain(&mut self, terrain: Self::Terrain) {
        self.journal.push(JournalEntry::SetTerrain(terrain));
    }

    fn set_view(&mut self, view: &CameraView) {
        self.journal.push(JournalEntry::SetView(*view));
    }

    fn destroy(&mut self) {
        self.journal.push(JournalEntry::DestroyViewer);
    }
}

pub struct FakeViewerFactory {
    journal: Journal,
    fail: bool,
}

impl FakeViewerFactory {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            fail: false,
        }
    }

    pub fn failing(journal: Journal) -> Self {
        Self {
            journal,
            fail: true,
        }
    }
}

impl ViewerFactory<FakeViewer> for FakeViewerFactory {
    fn create(&self, container_id: &str) -> Result<FakeViewer, MeasureError> {
        if self.fail {
            return Err(MeasureError::ViewerCreation(container_id.to_string()));
        }

        self.journal
            .push(JournalEntry::CreateViewer(container_id.to_string()));
        Ok(FakeViewer::new(self.journal.clone()))
    }
}

pub struct FakeTool {
    kind: ToolKind,
    journal: Journal,
}

impl MeasureTool for FakeTool {
    fn start(&mut self) {
        self.journal.push(JournalEntry::StartTool(self.kind));
    }

    fn end(&mut self) {
        self.journal.push(JournalEntry::EndTool(self.kind));
    }

    fn destroy(&mut self) {
        self.journal.push(JournalEntry::DestroyTool(self.kind));
    }
}

pub struct FakeToolFactory {
    journal: Journal,
}

impl FakeToolFactory {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl ToolFactory<FakeViewer> for FakeToolFactory {
    fn create(
        &self,
        kind: ToolKind,
        _viewer: &FakeViewer,
        options: &MeasureOptions,
    ) -> Box<dyn MeasureTool> {
        self.journal.push(JournalEntry::CreateTool(kind));
        self.journal.options.lock().push(options.clone());
        Box::new(FakeTool {
            kind,
            journal: self.journal.clone(),
        })
    }
}

enum TerrainSource {
    Ready(u32),
    Failing,
    Controlled(Mutex<Option<oneshot::Receiver<Result<u32, MeasureError>>>>),
}

/// Terrain provider with a scripted response.
pub struct FakeTerrainProvider {
    source: TerrainSource,
}

impl FakeTerrainProvider {
    pub fn ready(terrain: u32) -> Self {
        Self {
            source: TerrainSource::Ready(terrain),
        }
    }

    pub fn failing() -> Self {
        Self {
            source: TerrainSource::Failing,
        }
    }

    /// Provider that resolves only when the returned sender is used.
    pub fn controlled() -> (Self, oneshot::Sender<Result<u32, MeasureError>>) {
        let (sender, receiver) = oneshot::channel();
        let provider = Self {
            source: TerrainSource::Controlled(Mutex::new(Some(receiver))),
        };
        (provider, sender)
    }
}

#[async_trait::async_trait]
impl TerrainProvider for FakeTerrainProvider {
    type Terrain = u32;

    async fn fetch(&self, asset_id: u64) -> Result<Self::Terrain, MeasureError> {
        match &self.source {
            TerrainSource::Ready(terrain) => Ok(*terrain),
            TerrainSource::Failing => Err(MeasureError::TerrainLoad(format!(
                "asset {asset_id} is not available"
            ))),
            TerrainSource::Controlled(receiver) => {
                let receiver = receiver.lock().take();
                match receiver {
                    Some(receiver) => receiver
                        .await
                        .unwrap_or_else(|_| Err(MeasureError::TerrainLoad("cancelled".into()))),
                    None => Err(MeasureError::TerrainLoad("already fetched".into())),
                }
            }
        }
    }
}

#[derive(Default, Clone)]
pub struct CountingMessenger {
    count: Arc<AtomicUsize>,
}

impl CountingMessenger {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Messenger for CountingMessenger {
    fn request_redraw(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
