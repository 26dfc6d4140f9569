use touchslide_ui::DpSize;
use tracing::{debug, trace};

/// The regions of a slider the host measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The outer container.
    Container,
    /// The unfilled background track.
    Track,
    /// The visible thumb.
    Thumb,
    /// One graduation tick.
    Graduation,
}

/// Result of a single measurement report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureOutcome {
    /// Same size as already stored; nothing changed.
    Unchanged,
    /// Stored, but container, track and thumb are not all known yet.
    Pending,
    /// A complete snapshot was published.
    Published,
}

/// Snapshot of every region's size, published once the slider is ready.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredLayout {
    /// Container size.
    pub container: DpSize,
    /// Track size.
    pub track: DpSize,
    /// Thumb size.
    pub thumb: DpSize,
    /// Graduation size, the configured size until one is measured.
    pub graduation: DpSize,
}

/// Collects asynchronous size reports and gates readiness.
#[derive(Debug, Clone)]
pub struct MeasurementCoordinator {
    container: Option<DpSize>,
    track: Option<DpSize>,
    thumb: Option<DpSize>,
    graduation: Option<DpSize>,
    configured_graduation: DpSize,
    published: Option<MeasuredLayout>,
}

impl MeasurementCoordinator {
    /// Creates an empty coordinator; `configured_graduation` stands in for
    /// the graduation size until one is reported.
    pub fn new(configured_graduation: DpSize) -> Self {
        Self {
            container: None,
            track: None,
            thumb: None,
            graduation: None,
            configured_graduation,
            published: None,
        }
    }

    /// Records a size for `region`.
    pub fn report(&mut self, region: Region, size: DpSize) -> MeasureOutcome {
        let slot = match region {
            Region::Container => &mut self.container,
            Region::Track => &mut self.track,
            Region::Thumb => &mut self.thumb,
            Region::Graduation => &mut self.graduation,
        };
        if *slot == Some(size) {
            trace!(?region, ?size, "redundant measurement ignored");
            return MeasureOutcome::Unchanged;
        }
        *slot = Some(size);

        match self.snapshot() {
            Some(layout) => {
                if self.published.is_none() {
                    debug!(?layout, "slider measurements complete");
                }
                self.published = Some(layout);
                MeasureOutcome::Published
            }
            None => MeasureOutcome::Pending,
        }
    }

    /// Changes the graduation size used while none was measured.
    pub fn set_configured_graduation(&mut self, size: DpSize) {
        self.configured_graduation = size;
        if self.graduation.is_none()
            && let Some(layout) = self.published.as_mut()
        {
            layout.graduation = size;
        }
    }

    /// `true` once container, track and thumb were all measured.
    pub fn is_ready(&self) -> bool {
        self.published.is_some()
    }

    /// The published snapshot, if ready.
    pub fn layout(&self) -> Option<&MeasuredLayout> {
        self.published.as_ref()
    }

    /// The published snapshot, or zero sizes before readiness.
    pub fn layout_or_empty(&self) -> MeasuredLayout {
        self.published.unwrap_or(MeasuredLayout {
            graduation: self.configured_graduation,
            ..MeasuredLayout::default()
        })
    }

    fn snapshot(&self) -> Option<MeasuredLayout> {
        Some(MeasuredLayout {
            container: self.container?,
            track: self.track?,
            thumb: self.thumb?,
            graduation: self.graduation.unwrap_or(self.configured_graduation),
        })
    }
}
