use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::back_stack::BackStack;
use super::destination::{find_item, CatalogItem, ROOT_ROUTE};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavError {
    /// A route was referenced but never registered in the catalog: a wiring
    /// bug, not a runtime condition.
    #[error("navigation target `{route}` is not a registered destination")]
    NavigationTargetUnknown { route: String },
}

/// Interaction state saved and restored with each back-stack entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenState {
    /// Whether the destination's optional details panel is open.
    pub details_open: bool,
}

/// Navigation controller for the catalog shell.
///
/// Starts on [`ROOT_ROUTE`]. Catalog selections follow a "top-level
/// destination" policy: pop back to root saving state, then show the target
/// once, restoring what it had.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: BackStack<ScreenState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: BackStack::new(ROOT_ROUTE),
        }
    }

    pub fn current_route(&self) -> &'static str {
        self.stack.current().route
    }

    pub fn is_at_root(&self) -> bool {
        self.current_route() == ROOT_ROUTE
    }

    pub fn back_stack(&self) -> &BackStack<ScreenState> {
        &self.stack
    }

    pub fn current_state(&self) -> &ScreenState {
        &self.stack.current().state
    }

    pub fn update_current_state(&mut self, update: impl FnOnce(&mut ScreenState)) {
        update(&mut self.stack.current_mut().state);
    }

    /// Whether the list item for `item` should render as selected.
    pub fn is_selected(&self, item: CatalogItem) -> bool {
        self.stack
            .entries()
            .iter()
            .skip(1)
            .any(|entry| entry.route == item.route())
    }

    /// Catalog list selection.
    pub fn select_item(&mut self, item: CatalogItem) {
        self.select_top_level(item.route());
    }

    /// Catalog selection by route token.
    pub fn select(&mut self, route: &str) -> Result<(), NavError> {
        let route = resolve(route)?;
        self.select_top_level(route);
        Ok(())
    }

    /// Return to the catalog root, saving the state of what was open.
    pub fn navigate_to_root(&mut self) {
        self.select_top_level(ROOT_ROUTE);
    }

    /// Pop one entry. Returns `false` when already at root.
    pub fn back(&mut self) -> bool {
        self.stack.pop()
    }

    fn select_top_level(&mut self, route: &'static str) {
        self.stack.pop_to_start_saving();
        self.stack.launch_single_top(route);
        debug!(route, depth = self.stack.depth(), "selected top-level destination");
    }
}

fn resolve(route: &str) -> Result<&'static str, NavError> {
    if route == ROOT_ROUTE {
        return Ok(ROOT_ROUTE);
    }
    find_item(route)
        .map(CatalogItem::route)
        .ok_or_else(|| NavError::NavigationTargetUnknown {
            route: route.to_string(),
        })
}
