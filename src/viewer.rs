//! The two content domains and what selecting in them does
//!
//! [`Viewer`] holds one panel per [`Domain`]. Each panel owns a
//! [`Catalog`] for its list and the [`DetailView`] currently shown. Startup
//! loads both domains concurrently; a failure in one leaves the other alone
//! and only swaps the failing domain's title for the error title.
//!
//! Selecting an item renders it and records its key in the session store so
//! the next start opens the same item.

use crate::catalog::{Catalog, Listed};
use crate::content::model::{Lesson, LessonManifest, LectureManifest, ManifestEntry, Unit};
use crate::content::source::{lesson_path, LECTURE_MANIFEST, LESSON_MANIFEST};
use crate::content::ContentSource;
use crate::error::FetchError;
use crate::render::{math, reading, DetailView};
use crate::session::{SessionStore, MATH_LAST, RW_LAST};

/// A content domain, one per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    ReadingWriting,
    Math,
}

impl Domain {
    pub fn name(self) -> &'static str {
        match self {
            Domain::ReadingWriting => "Reading & Writing",
            Domain::Math => "Math",
        }
    }

    /// Session key holding this domain's last selection
    pub fn session_key(self) -> &'static str {
        match self {
            Domain::ReadingWriting => RW_LAST,
            Domain::Math => MATH_LAST,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Domain::ReadingWriting => Domain::Math,
            Domain::Math => Domain::ReadingWriting,
        }
    }
}

/// Reading & writing: a manifest of lesson files, fetched one at a time
#[derive(Debug)]
pub struct ReadingPanel {
    pub catalog: Catalog<ManifestEntry>,
    pub view: DetailView,
}

impl ReadingPanel {
    fn failed() -> Self {
        ReadingPanel {
            catalog: Catalog::new(Vec::new()),
            view: DetailView::error(),
        }
    }

    /// Fetch the manifest and open the persisted (or first) lesson
    pub async fn load(source: &ContentSource, persisted: Option<&str>) -> Self {
        let manifest: LessonManifest = match source.fetch_json(LESSON_MANIFEST).await {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::error!(error = %e, "reading & writing manifest unavailable");
                return Self::failed();
            }
        };
        tracing::info!(lessons = manifest.0.len(), "loaded lesson manifest");

        let mut panel = ReadingPanel {
            catalog: Catalog::new(manifest.0),
            view: DetailView::empty(reading::TITLE_FALLBACK),
        };

        let initial = panel
            .catalog
            .initial(persisted)
            .and_then(|entry| entry.key())
            .map(str::to_string);
        if let Some(file) = initial {
            if let Err(e) = panel.open(source, &file).await {
                tracing::error!(error = %e, file = %file, "initial lesson unavailable");
                panel.view = DetailView::error();
            }
        }
        panel
    }

    /// Fetch and show one lesson; the current view stays on failure
    pub async fn open(&mut self, source: &ContentSource, file: &str) -> Result<(), FetchError> {
        let lesson: Lesson = source.fetch_json(&lesson_path(file)).await?;
        self.view = reading::render_lesson(&lesson);
        self.catalog.activate(file);
        Ok(())
    }
}

/// Math: every unit arrives with the manifest, nothing to fetch on select
#[derive(Debug)]
pub struct MathPanel {
    pub catalog: Catalog<Unit>,
    pub view: DetailView,
}

impl MathPanel {
    fn failed() -> Self {
        MathPanel {
            catalog: Catalog::new(Vec::new()),
            view: DetailView::error(),
        }
    }

    pub async fn load(source: &ContentSource, persisted: Option<&str>) -> Self {
        let manifest: LectureManifest = match source.fetch_json(LECTURE_MANIFEST).await {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::error!(error = %e, "math lecture manifest unavailable");
                return Self::failed();
            }
        };
        tracing::info!(units = manifest.units.len(), "loaded lecture manifest");

        let mut panel = MathPanel {
            catalog: Catalog::new(manifest.units),
            view: DetailView::empty(math::TITLE_FALLBACK),
        };
        if let Some(unit) = panel.catalog.initial(persisted).cloned() {
            panel.show(&unit);
        }
        panel
    }

    fn show(&mut self, unit: &Unit) {
        self.view = math::render_unit(unit);
        if let Some(slug) = unit.key() {
            self.catalog.activate(slug);
        }
    }

    /// Show the unit under the cursor and return it
    pub fn open_highlighted(&mut self) -> Option<Unit> {
        let unit = self.catalog.highlighted()?.clone();
        self.show(&unit);
        Some(unit)
    }
}

/// Outcome of selecting the highlighted item
#[derive(Debug)]
pub enum Selection {
    /// Nothing under the cursor
    Nothing,
    /// The item is shown; its label is returned for the status line
    Opened(String),
    /// The item could not be loaded; the previous view stays
    Failed(FetchError),
}

pub struct Viewer {
    source: ContentSource,
    store: Box<dyn SessionStore>,
    pub reading: ReadingPanel,
    pub math: MathPanel,
}

impl Viewer {
    /// Load both domains concurrently and open their initial items
    pub async fn start(source: ContentSource, store: Box<dyn SessionStore>) -> Self {
        let rw_last = store.get(RW_LAST);
        let math_last = store.get(MATH_LAST);

        let (reading, math) = tokio::join!(
            ReadingPanel::load(&source, rw_last.as_deref()),
            MathPanel::load(&source, math_last.as_deref()),
        );

        Viewer {
            source,
            store,
            reading,
            math,
        }
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn view(&self, domain: Domain) -> &DetailView {
        match domain {
            Domain::ReadingWriting => &self.reading.view,
            Domain::Math => &self.math.view,
        }
    }

    /// Filter text of a domain's search box
    pub fn filter(&self, domain: Domain) -> &str {
        match domain {
            Domain::ReadingWriting => self.reading.catalog.filter(),
            Domain::Math => self.math.catalog.filter(),
        }
    }

    pub fn push_filter_char(&mut self, domain: Domain, c: char) {
        match domain {
            Domain::ReadingWriting => self.reading.catalog.push_filter_char(c),
            Domain::Math => self.math.catalog.push_filter_char(c),
        }
    }

    pub fn pop_filter_char(&mut self, domain: Domain) {
        match domain {
            Domain::ReadingWriting => self.reading.catalog.pop_filter_char(),
            Domain::Math => self.math.catalog.pop_filter_char(),
        }
    }

    pub fn move_cursor(&mut self, domain: Domain, delta: isize) {
        match domain {
            Domain::ReadingWriting => self.reading.catalog.move_cursor(delta),
            Domain::Math => self.math.catalog.move_cursor(delta),
        }
    }

    /// Open the highlighted item of `domain` and remember it
    pub async fn select(&mut self, domain: Domain) -> Selection {
        let (label, key) = match domain {
            Domain::ReadingWriting => {
                let Some(entry) = self.reading.catalog.highlighted() else {
                    return Selection::Nothing;
                };
                let label = entry.display().to_string();
                let Some(file) = entry.key().map(str::to_string) else {
                    return Selection::Nothing;
                };
                if let Err(e) = self.reading.open(&self.source, &file).await {
                    tracing::error!(error = %e, file = %file, "lesson unavailable");
                    return Selection::Failed(e);
                }
                (label, Some(file))
            }
            Domain::Math => {
                let Some(unit) = self.math.open_highlighted() else {
                    return Selection::Nothing;
                };
                (unit.display().to_string(), unit.slug)
            }
        };

        tracing::info!(domain = domain.name(), item = %label, "selected");
        if let Some(key) = key {
            self.remember(domain, &key);
        }
        Selection::Opened(label)
    }

    fn remember(&mut self, domain: Domain, key: &str) {
        if let Err(e) = self.store.set(domain.session_key(), key) {
            tracing::warn!(error = %e, "could not persist selection");
        }
    }
}
