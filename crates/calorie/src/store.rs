//! Food store
//!
//! Holds the collections fetched from the food API together with the search
//! and category selection state, and exposes the named actions that refresh
//! them. Every action swallows its error: the failure is logged, the affected
//! field is reset to its empty value, and the error is kept in
//! [`FoodStore::last_failure`] until the next successful load of the same
//! resource.
//!
//! Actions take `&self` and may run concurrently. Each resource carries a
//! request ticket; a completion only lands if no newer request for the same
//! resource was started in the meantime.

use calorie_core::food::{FoodCategory, FoodItem, ProcessedFoodItem, SearchParams, StatsData};
use calorie_core::processor::process_foods;
use calorie_core::queries;
use calorie_core::view::{self, CategorySelection, SearchState};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::api::FoodApi;
use crate::error::Error;

/// State fields written by fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Foods,
    Categories,
    Stats,
    Search,
    Detail,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Foods => "foods",
            Resource::Categories => "categories",
            Resource::Stats => "stats",
            Resource::Search => "search results",
            Resource::Detail => "food detail",
        };
        f.write_str(name)
    }
}

/// Snapshot of everything the store holds
#[derive(Debug, Clone, Default, Serialize)]
pub struct FoodState {
    pub foods: Vec<FoodItem>,
    pub categories: Vec<FoodCategory>,
    /// Total item count reported alongside the categories
    pub categories_total: Option<u64>,
    pub selected_category: CategorySelection,
    pub search: SearchState,
    pub search_query: String,
    pub stats: Option<StatsData>,
    pub detail: Option<FoodItem>,
    pub failures: BTreeMap<Resource, Error>,
    #[serde(skip)]
    tickets: BTreeMap<Resource, u64>,
    #[serde(skip)]
    pending_loads: usize,
}

impl FoodState {
    pub fn loading(&self) -> bool {
        self.pending_loads > 0
    }

    fn next_ticket(&mut self, resource: Resource, tracks_loading: bool) -> Ticket {
        let seq = self.tickets.entry(resource).or_insert(0);
        *seq += 1;
        if tracks_loading {
            self.pending_loads += 1;
        }
        Ticket {
            resource,
            seq: *seq,
            tracks_loading,
        }
    }

    fn invalidate(&mut self, resource: Resource) {
        *self.tickets.entry(resource).or_insert(0) += 1;
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        self.tickets.get(&ticket.resource) == Some(&ticket.seq)
    }
}

/// Request ticket handed out when an action starts
#[derive(Debug, Clone, Copy)]
struct Ticket {
    resource: Resource,
    seq: u64,
    tracks_loading: bool,
}

pub struct FoodStore {
    api: FoodApi,
    state: Mutex<FoodState>,
}

impl FoodStore {
    pub fn new(api: FoodApi) -> Self {
        Self {
            api,
            state: Mutex::new(FoodState::default()),
        }
    }

    pub fn snapshot(&self) -> FoodState {
        self.state.lock().clone()
    }

    pub fn foods(&self) -> Vec<FoodItem> {
        self.state.lock().foods.clone()
    }

    pub fn categories(&self) -> Vec<FoodCategory> {
        self.state.lock().categories.clone()
    }

    pub fn stats(&self) -> Option<StatsData> {
        self.state.lock().stats.clone()
    }

    pub fn detail(&self) -> Option<FoodItem> {
        self.state.lock().detail.clone()
    }

    pub fn selected_category(&self) -> CategorySelection {
        self.state.lock().selected_category.clone()
    }

    pub fn search_state(&self) -> SearchState {
        self.state.lock().search.clone()
    }

    pub fn search_query(&self) -> String {
        self.state.lock().search_query.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading()
    }

    pub fn last_failure(&self, resource: Resource) -> Option<Error> {
        self.state.lock().failures.get(&resource).cloned()
    }

    /// Search results while a search is active, otherwise the cached items
    /// narrowed to the selected category
    pub fn filtered_foods(&self) -> Vec<FoodItem> {
        let state = self.state.lock();
        view::filtered_foods(&state.foods, &state.search, &state.selected_category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// [`FoodStore::filtered_foods`] run through the weight-aware processor
    pub fn processed_foods(&self) -> Vec<ProcessedFoodItem> {
        let state = self.state.lock();
        process_foods(view::filtered_foods(
            &state.foods,
            &state.search,
            &state.selected_category,
        ))
    }

    pub fn select_category(&self, selection: impl Into<CategorySelection>) {
        self.state.lock().selected_category = selection.into();
    }

    /// Replace the cached items with `/api/foods`
    pub async fn fetch_foods(&self, params: Option<SearchParams>) {
        let ticket = self.begin(Resource::Foods, true);
        let result = self.api.foods(params.as_ref()).await;

        self.complete(ticket, result, |state, foods| {
            if let Ok(foods) = &foods {
                log::info!("Loaded {} foods", foods.len());
            }
            state.foods = foods.unwrap_or_default();
        });
    }

    pub async fn fetch_categories(&self) {
        let ticket = self.begin(Resource::Categories, false);
        let result = self.api.categories().await;

        self.complete(ticket, result, |state, response| match response {
            Ok(response) => {
                log::info!("Loaded {} categories", response.categories.len());
                state.categories = response.categories;
                state.categories_total = response.total;
            }
            Err(_) => {
                state.categories = Vec::new();
                state.categories_total = None;
            }
        });
    }

    pub async fn fetch_stats(&self) {
        let ticket = self.begin(Resource::Stats, false);
        let result = self.api.stats().await;

        self.complete(ticket, result, |state, stats| {
            state.stats = stats.ok().flatten();
        });
    }

    /// Search by name
    ///
    /// A blank query clears the search without touching the network.
    /// Otherwise the results replace any previous search, and a failed
    /// request still leaves an active search with no results.
    pub async fn search(&self, query: &str) {
        if query.trim().is_empty() {
            self.clear_search();
            return;
        }

        let (ticket, selection) = {
            let mut state = self.state.lock();
            state.search_query = query.to_string();
            let ticket = state.next_ticket(Resource::Search, true);
            (ticket, state.selected_category.clone())
        };

        let result = self.api.search(query, &selection).await;

        self.complete(ticket, result, |state, results| {
            if let Ok(results) = &results {
                log::info!("Search \"{query}\" found {} foods", results.len());
            }
            state.search = SearchState::Active(results.unwrap_or_default());
        });
    }

    /// Replace the cached items with up to 100 items of one category
    ///
    /// The category selection is left as it is.
    pub async fn fetch_by_category(&self, category: &str) {
        let ticket = self.begin(Resource::Foods, true);
        let result = self.api.foods_by_category(category).await;

        self.complete(ticket, result, |state, foods| {
            if let Ok(foods) = &foods {
                log::info!("Loaded {} foods in category {category}", foods.len());
            }
            state.foods = foods.unwrap_or_default();
        });
    }

    pub async fn fetch_food(&self, id: &str) {
        let ticket = self.begin(Resource::Detail, false);
        let result = self.api.food(id).await;

        self.complete(ticket, result, |state, food| {
            state.detail = food.ok();
        });
    }

    /// Drop search results and go back to category filtering
    ///
    /// A search still in flight is discarded when it completes.
    pub fn clear_search(&self) {
        let mut state = self.state.lock();
        state.invalidate(Resource::Search);
        state.search = SearchState::Inactive;
        state.search_query.clear();
        state.failures.remove(&Resource::Search);
    }

    /// Load items, categories and stats together
    pub async fn initialize(&self) {
        futures::join!(
            self.fetch_foods(Some(queries::initial_foods_params())),
            self.fetch_categories(),
            self.fetch_stats()
        );
    }

    fn begin(&self, resource: Resource, tracks_loading: bool) -> Ticket {
        self.state.lock().next_ticket(resource, tracks_loading)
    }

    fn complete<T>(
        &self,
        ticket: Ticket,
        result: Result<T, Error>,
        apply: impl FnOnce(&mut FoodState, Result<T, Error>),
    ) {
        let mut state = self.state.lock();

        if ticket.tracks_loading {
            state.pending_loads = state.pending_loads.saturating_sub(1);
        }

        if !state.is_current(&ticket) {
            log::debug!(
                "Discarding stale {} response (request {})",
                ticket.resource,
                ticket.seq
            );
            return;
        }

        match &result {
            Ok(_) => {
                state.failures.remove(&ticket.resource);
            }
            Err(err) => {
                log::error!("Failed to fetch {}: {err}", ticket.resource);
                state.failures.insert(ticket.resource, err.clone());
            }
        }

        apply(&mut *state, result);
    }
}
