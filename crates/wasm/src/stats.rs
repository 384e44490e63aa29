//! Count-up animation for the stats block.

use crate::dom;
use crate::error::PageError;
use crate::observer::VisibilityObserver;
use folio_core::{CounterAnimation, FolioConfig, StatsConfig, parse_stat_target};
use gloo::timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{Document, Element, IntersectionObserver};

type CounterSlot = Rc<RefCell<Option<Interval>>>;

/// Intervals of the counters currently running.
#[derive(Default)]
struct RunningCounters {
    slots: RefCell<Vec<CounterSlot>>,
}

impl RunningCounters {
    fn start(&self, element: Element, target: i64, config: &StatsConfig) {
        let mut animation = CounterAnimation::new(target, config);
        let slot: CounterSlot = Rc::new(RefCell::new(None));

        let handle = slot.clone();
        let interval = Interval::new(config.tick_ms, move || {
            let frame = animation.tick();
            dom::set_text(&element, &frame.text);
            if frame.finished {
                // Dropping the interval clears it.
                handle.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(interval);

        let mut slots = self.slots.borrow_mut();
        slots.retain(|s| s.borrow().is_some());
        slots.push(slot);
    }

    fn running(&self) -> usize {
        self.slots
            .borrow()
            .iter()
            .filter(|s| s.borrow().is_some())
            .count()
    }

    fn cancel_all(&self) {
        for slot in self.slots.borrow_mut().drain(..) {
            slot.borrow_mut().take();
        }
    }
}

pub(crate) struct StatsCounter {
    _observer: VisibilityObserver,
    counters: Rc<RunningCounters>,
    fired: Rc<Cell<bool>>,
}

impl StatsCounter {
    /// Returns `None` when the page has no stats container.
    pub(crate) fn attach(
        document: &Document,
        config: &FolioConfig,
    ) -> Result<Option<Self>, PageError> {
        let Some(container) = dom::query_one::<Element>(document, &config.selectors.stats_container)
        else {
            log::debug!("Stats: no container, feature disabled");
            return Ok(None);
        };
        let stats: Vec<Element> = dom::query_all(document, &config.selectors.stat_numbers);

        let counters = Rc::new(RunningCounters::default());
        let fired = Rc::new(Cell::new(false));
        let on_visible = {
            let counters = counters.clone();
            let fired = fired.clone();
            let stats_config = config.stats.clone();
            move |target: Element, observer: &IntersectionObserver| {
                observer.unobserve(&target);
                if fired.replace(true) {
                    return;
                }
                for stat in &stats {
                    let text = stat.text_content().unwrap_or_default();
                    match parse_stat_target(&text, &stats_config.suffix) {
                        Some(value) => counters.start(stat.clone(), value, &stats_config),
                        None => log::debug!("Stats: '{}' left as is", text),
                    }
                }
                log::debug!("Stats: started {} counters", counters.running());
            }
        };

        let observer = VisibilityObserver::new(config.stats.threshold, None, on_visible)?;
        observer.observe(&container);

        Ok(Some(Self {
            _observer: observer,
            counters,
            fired,
        }))
    }

    pub(crate) fn has_fired(&self) -> bool {
        self.fired.get()
    }

    pub(crate) fn running(&self) -> usize {
        self.counters.running()
    }
}

impl Drop for StatsCounter {
    fn drop(&mut self) {
        self.counters.cancel_all();
    }
}
