//! # Header Controller
//!
//! One `Header` per header-view mount. It owns the title resolver and the
//! prompt animator side by side; they never look at each other's state.
//!
//! ```text
//! Header
//! ├── titles: TitleResolver    // route → title, async override by generation
//! ├── prompt: PromptAnimator   // placeholder typing animation
//! └── mounted: bool            // false after unmount; late input is ignored
//! ```

use std::time::Duration;

use log::{debug, info};

use crate::catalog::LookupOutcome;
use crate::core::config::{ConfigError, HeaderConfig};
use crate::core::prompt::{AnimationState, PromptAnimator};
use crate::core::route::Route;
use crate::core::title::{LookupTicket, TitleResolver};

pub struct Header {
    titles: TitleResolver,
    prompt: PromptAnimator,
    mounted: bool,
}

impl Header {
    pub fn mount(config: &HeaderConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            titles: TitleResolver::new(config.titles.clone())?,
            prompt: PromptAnimator::new(config.prompt.clone())?,
            mounted: true,
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn title(&self) -> &str {
        self.titles.title()
    }

    pub fn placeholder(&self) -> String {
        self.prompt.placeholder()
    }

    pub fn animation(&self) -> &AnimationState {
        self.prompt.state()
    }

    pub fn lookup_pending(&self) -> bool {
        self.titles.pending()
    }

    pub fn detail_parent(&self) -> &str {
        self.titles.detail_parent()
    }

    pub fn navigate(&mut self, route: &Route) -> Option<LookupTicket> {
        if !self.mounted {
            return None;
        }
        self.titles.navigate(route)
    }

    /// Applies a lookup result. Stale or post-unmount results return false.
    pub fn apply_lookup(&mut self, generation: u64, outcome: LookupOutcome) -> bool {
        if !self.mounted {
            debug!("Header unmounted, ignoring lookup for generation {}", generation);
            return false;
        }
        self.titles.resolve(generation, outcome)
    }

    /// Delay before the first animation tick.
    pub fn first_tick_delay(&self) -> Duration {
        self.prompt.next_delay()
    }

    /// Advances the animation; `None` means nothing should be scheduled.
    pub fn tick(&mut self) -> Option<Duration> {
        if !self.mounted {
            return None;
        }
        self.prompt.tick()
    }

    pub fn is_search_focused(&self) -> bool {
        self.prompt.is_suspended()
    }

    /// Search box gained focus: freeze the animation.
    pub fn focus_search(&mut self) {
        if !self.mounted || self.prompt.is_suspended() {
            return;
        }
        info!("Search focused, animation suspended");
        self.prompt.suspend();
    }

    /// Search box lost focus. Returns the delay before the next tick, or
    /// `None` if the animation was not suspended or the header is gone.
    pub fn blur_search(&mut self) -> Option<Duration> {
        if !self.mounted || !self.prompt.is_suspended() {
            return None;
        }
        info!("Search blurred, animation resumed");
        Some(self.prompt.resume())
    }

    pub fn unmount(&mut self) {
        info!("Header unmounted");
        self.mounted = false;
    }
}
