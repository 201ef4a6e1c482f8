//! World and step definitions for the listing scenarios

mod favorites;
mod filtering;
mod loading;

use cucumber::{gherkin, World};
use pokeline::{CollectionRequest, DetailRequest, ItemDetail, ListingViewModel, Reference};

/// Scenario state: the listing plus every request it handed out
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ListingWorld {
    pub listing: ListingViewModel,

    /// Collection fetches issued since the last `When`
    pub issued: Vec<CollectionRequest>,

    /// Detail fetches returned by the latest applied collection
    pub detail_requests: Vec<DetailRequest>,
}

impl ListingWorld {
    fn new() -> Self {
        Self {
            listing: ListingViewModel::new(20, 100),
            issued: Vec::new(),
            detail_requests: Vec::new(),
        }
    }

    /// The request the listing is currently waiting on
    pub fn current_request(&self) -> CollectionRequest {
        match self.listing.load_state() {
            pokeline::LoadState::Loading { request } => CollectionRequest { tag: *request },
            other => panic!("Expected a fetch in flight, listing is {other:?}"),
        }
    }

    pub fn item_named(&self, name: &str) -> &ItemDetail {
        self.listing
            .items()
            .iter()
            .find(|item| item.name() == name)
            .unwrap_or_else(|| panic!("No item named {name}"))
    }
}

/// Rows of a `| name | url |` table, header skipped
pub fn references_from(step: &gherkin::Step) -> Vec<Reference> {
    let table = step.table.as_ref().expect("step needs a table");
    table
        .rows
        .iter()
        .skip(1)
        .map(|row| Reference::new(row[0].trim(), row[1].trim()))
        .collect()
}

/// Split `"a, b, c"` into names
pub fn names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
